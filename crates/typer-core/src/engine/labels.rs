use std::fmt;

/// An insertion-ordered, duplicate-free set of type identifiers.
///
/// Rule semantics never depend on ordering, but a deterministic order keeps
/// typing runs reproducible and testable, so insertion order is preserved.
/// The sets stay tiny (a handful of identifiers per atom), which makes a
/// vector the right representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    entries: Vec<String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an identifier, collapsing duplicates.
    ///
    /// Returns `true` if the identifier was not already present.
    pub fn insert(&mut self, rule_id: &str) -> bool {
        if self.contains(rule_id) {
            false
        } else {
            self.entries.push(rule_id.to_string());
            true
        }
    }

    pub fn contains(&self, rule_id: &str) -> bool {
        self.entries.iter().any(|id| id == rule_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.entries.join(", "))
    }
}

/// Per-atom typing state: confirmed and excluded type identifiers.
///
/// Mutual exclusivity between competing hypotheses is enforced by
/// blacklisting siblings on confirmation, not by removing earlier whitelist
/// entries. A later exclusive confirmation may therefore blacklist an
/// identifier that an earlier rule whitelisted; the effective assignment is
/// [`TypeLabels::resolved`], the whitelist minus the blacklist. The blacklist
/// only ever grows for the lifetime of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeLabels {
    whitelist: LabelSet,
    blacklist: LabelSet,
}

impl TypeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// The confirmed candidate identifiers, in confirmation order.
    pub fn whitelist(&self) -> &LabelSet {
        &self.whitelist
    }

    /// The excluded identifiers, in exclusion order.
    pub fn blacklist(&self) -> &LabelSet {
        &self.blacklist
    }

    pub(crate) fn add_to_whitelist(&mut self, rule_id: &str) {
        self.whitelist.insert(rule_id);
    }

    pub(crate) fn add_to_blacklist(&mut self, rule_id: &str) {
        self.blacklist.insert(rule_id);
    }

    /// Combined size of both sets; the orchestrator's convergence measure.
    pub fn total_len(&self) -> usize {
        self.whitelist.len() + self.blacklist.len()
    }

    /// The effective assignment: whitelisted identifiers not overridden by a
    /// blacklist entry, in whitelist insertion order.
    ///
    /// An empty result means no rule matched (or every match was later
    /// excluded); callers should treat such atoms as needing default
    /// handling, not as an error.
    pub fn resolved(&self) -> Vec<&str> {
        self.whitelist
            .iter()
            .filter(|id| !self.blacklist.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order_and_collapses_duplicates() {
        let mut set = LabelSet::new();
        assert!(set.insert("136"));
        assert!(set.insert("135"));
        assert!(!set.insert("136"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["136", "135"]);
    }

    #[test]
    fn contains_finds_inserted_ids() {
        let mut set = LabelSet::new();
        set.insert("145B");
        assert!(set.contains("145B"));
        assert!(!set.contains("145"));
    }

    #[test]
    fn display_renders_braced_list() {
        let mut set = LabelSet::new();
        set.insert("135");
        set.insert("140");
        assert_eq!(set.to_string(), "{135, 140}");
        assert_eq!(LabelSet::new().to_string(), "{}");
    }

    #[test]
    fn resolved_subtracts_blacklist_from_whitelist() {
        let mut labels = TypeLabels::new();
        labels.add_to_whitelist("142");
        labels.add_to_whitelist("145");
        labels.add_to_blacklist("141");
        labels.add_to_blacklist("142");
        assert_eq!(labels.resolved(), vec!["145"]);
    }

    #[test]
    fn total_len_counts_both_sets() {
        let mut labels = TypeLabels::new();
        labels.add_to_whitelist("135");
        labels.add_to_blacklist("136");
        labels.add_to_blacklist("137");
        labels.add_to_blacklist("136");
        assert_eq!(labels.total_len(), 3);
    }
}
