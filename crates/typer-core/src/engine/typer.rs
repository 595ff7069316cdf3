use super::config::TyperConfig;
use super::error::TyperError;
use super::labels::TypeLabels;
use super::neighbors::NeighborCounts;
use super::rules::{self, RuleRegistry};
use crate::core::models::element::ElementKind;
use crate::core::models::ids::AtomId;
use crate::core::models::system::MoleculeGraph;
use slotmap::SecondaryMap;
use tracing::{debug, warn};

/// A single typing run over one molecular graph.
///
/// The typer owns every piece of per-run state: the per-atom label sets, the
/// memoized neighbor-count cache, and the rule registry. Starting a new run
/// means constructing a new `Typer`, so no state can leak between runs over
/// different graphs. The graph itself is only ever read.
pub struct Typer<'g> {
    graph: &'g MoleculeGraph,
    config: TyperConfig,
    registry: RuleRegistry,
    neighbors: NeighborCounts,
    labels: SecondaryMap<AtomId, TypeLabels>,
}

impl<'g> Typer<'g> {
    pub fn new(graph: &'g MoleculeGraph, config: TyperConfig) -> Self {
        Self {
            graph,
            config,
            registry: RuleRegistry::new(),
            neighbors: NeighborCounts::new(),
            labels: SecondaryMap::new(),
        }
    }

    /// Runs the fixed-point typing loop and returns the resulting report.
    ///
    /// Every non-ghost atom starts with empty label sets; ghost atoms are
    /// never initialized nor visited. Passes repeat until the summed size of
    /// all whitelists and blacklists stops changing, or the configured pass
    /// cap is reached (in which case a warning is emitted and the partial
    /// state is returned).
    ///
    /// # Errors
    ///
    /// Returns [`TyperError::ValenceExceeded`] for a structurally invalid
    /// graph, or [`TyperError::RuleNotImplemented`] if a dispatch order names
    /// an unregistered rule.
    pub fn run(mut self) -> Result<TypingReport, TyperError> {
        for (id, atom) in self.graph.atoms_iter() {
            if !atom.kind.is_ghost() {
                self.labels.insert(id, TypeLabels::new());
            }
        }

        let max_passes = self.config.max_passes;
        let mut passes = 0;
        let mut converged = false;
        for pass in 0..max_passes {
            passes = pass + 1;
            let before = self.total_label_len();
            self.run_pass()?;
            let after = self.total_label_len();
            debug!(pass = passes, labels = after, "typing pass complete");

            // Nothing changed, we're done.
            if before == after {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                max_passes,
                "reached maximum typing passes without convergence; typing may be incomplete"
            );
        }

        Ok(TypingReport {
            labels: self.labels,
            passes,
            converged,
        })
    }

    fn run_pass(&mut self) -> Result<(), TyperError> {
        let graph = self.graph;
        for (id, atom) in graph.atoms_iter() {
            match atom.kind {
                ElementKind::Ghost => continue,
                ElementKind::Carbon => rules::dispatch_carbon(self, id)?,
                ElementKind::Hydrogen => rules::dispatch_hydrogen(self, id)?,
                kind => warn!(atom = atom.name.as_str(), %kind, "atom kind not supported"),
            }
        }
        Ok(())
    }

    fn total_label_len(&self) -> usize {
        self.labels.values().map(TypeLabels::total_len).sum()
    }

    /// Executes the rule function for a type identifier on one atom.
    ///
    /// Does nothing when the identifier is already decided for the atom
    /// (present in its whitelist or blacklist).
    pub(crate) fn run_rule(&mut self, atom: AtomId, rule_id: &str) -> Result<(), TyperError> {
        if let Some(labels) = self.labels.get(atom) {
            if labels.whitelist().contains(rule_id) || labels.blacklist().contains(rule_id) {
                return Ok(());
            }
        }
        let rule = self
            .registry
            .get(rule_id)
            .ok_or_else(|| TyperError::RuleNotImplemented {
                rule_id: rule_id.to_string(),
            })?;
        rule(self, atom);
        Ok(())
    }

    /// Confirms a type identifier for an atom.
    pub(crate) fn whitelist(&mut self, atom: AtomId, rule_id: &str) {
        if let Some(labels) = self.labels.get_mut(atom) {
            labels.add_to_whitelist(rule_id);
        }
    }

    /// Excludes type identifiers for an atom.
    pub(crate) fn blacklist(&mut self, atom: AtomId, rule_ids: &[&str]) {
        if let Some(labels) = self.labels.get_mut(atom) {
            for rule_id in rule_ids {
                labels.add_to_blacklist(rule_id);
            }
        }
    }

    /// Returns the candidates that `neighbor` has confirmed: present in its
    /// whitelist and absent from its blacklist. Empty when the neighbor has
    /// no label state yet.
    pub(crate) fn check_neighbor<'c>(
        &self,
        neighbor: AtomId,
        candidates: &[&'c str],
    ) -> Vec<&'c str> {
        match self.labels.get(neighbor) {
            Some(labels) => candidates
                .iter()
                .copied()
                .filter(|id| labels.whitelist().contains(id) && !labels.blacklist().contains(id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn neighbor_count(&mut self, atom: AtomId, kind: ElementKind) -> usize {
        self.neighbors.count(self.graph, atom, kind)
    }

    pub(crate) fn graph(&self) -> &'g MoleculeGraph {
        self.graph
    }

    pub(crate) fn config(&self) -> &TyperConfig {
        &self.config
    }

    pub(crate) fn atom_name(&self, atom: AtomId) -> &'g str {
        self.graph.atom(atom).map_or("?", |a| a.name.as_str())
    }

    pub(crate) fn valence_error(&self, atom: AtomId, valence: usize, max: usize) -> TyperError {
        let (name, kind) = self
            .graph
            .atom(atom)
            .map_or(("?".to_string(), ElementKind::Ghost), |a| {
                (a.name.clone(), a.kind)
            });
        TyperError::ValenceExceeded {
            name,
            kind,
            valence,
            max,
        }
    }
}

/// The outcome of a typing run.
///
/// Maps every non-ghost atom of the typed graph to its label state. Atoms
/// whose resolved set is empty were matched by no rule (or had every match
/// excluded) and need default handling by the caller; that is not an error.
#[derive(Debug)]
pub struct TypingReport {
    labels: SecondaryMap<AtomId, TypeLabels>,
    passes: usize,
    converged: bool,
}

impl TypingReport {
    /// The label state for an atom, or `None` for ghosts and foreign IDs.
    pub fn labels(&self, atom: AtomId) -> Option<&TypeLabels> {
        self.labels.get(atom)
    }

    /// The effective type assignment for an atom (whitelist minus
    /// blacklist); empty for untyped atoms and ghosts.
    pub fn resolved(&self, atom: AtomId) -> Vec<&str> {
        self.labels
            .get(atom)
            .map(TypeLabels::resolved)
            .unwrap_or_default()
    }

    /// Iterates over all atoms that carry label state.
    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &TypeLabels)> {
        self.labels.iter()
    }

    /// Number of passes the run performed, including the final no-change
    /// pass that established convergence.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether the run reached a fixed point before the pass cap.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Assigns OPLS-aa atom types to every atom of `graph` using the default
/// configuration.
pub fn assign_atom_types(graph: &MoleculeGraph) -> Result<TypingReport, TyperError> {
    Typer::new(graph, TyperConfig::default()).run()
}
