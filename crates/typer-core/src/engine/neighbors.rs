use crate::core::models::element::ElementKind;
use crate::core::models::ids::AtomId;
use crate::core::models::system::MoleculeGraph;
use slotmap::SecondaryMap;
use std::collections::HashMap;

/// Memoized per-atom counts of neighbors by element kind.
///
/// A count is computed on first query by scanning the atom's incident bonds
/// and tallying each bond partner's kind, then cached for the lifetime of
/// the owning typing run. The cache is owned by the run, never shared across
/// runs, so stale counts cannot leak between graphs. Graph mutation during a
/// run is unsupported.
#[derive(Debug, Default)]
pub(crate) struct NeighborCounts {
    counts: SecondaryMap<AtomId, HashMap<ElementKind, usize>>,
}

impl NeighborCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of neighbors of `atom` with the given kind.
    pub fn count(&mut self, graph: &MoleculeGraph, atom: AtomId, kind: ElementKind) -> usize {
        self.counts_for(graph, atom)
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the full kind-to-count map for `atom`, computing and caching
    /// it on first access.
    pub fn counts_for(
        &mut self,
        graph: &MoleculeGraph,
        atom: AtomId,
    ) -> &HashMap<ElementKind, usize> {
        if !self.counts.contains_key(atom) {
            let mut tally = HashMap::new();
            for bond in graph.bonds_of(atom) {
                let partner_kind = bond
                    .partner(atom)
                    .and_then(|id| graph.atom(id))
                    .map(|a| a.kind);
                if let Some(kind) = partner_kind {
                    *tally.entry(kind).or_insert(0) += 1;
                }
            }
            self.counts.insert(atom, tally);
        }
        &self.counts[atom]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::MoleculeBuilder;

    #[test]
    fn tallies_neighbors_by_kind() {
        let mut builder = MoleculeBuilder::new();
        let c1 = builder.atom("C1", ElementKind::Carbon);
        let c2 = builder.atom("C2", ElementKind::Carbon);
        builder.bond(c1, c2);
        builder.hydrogens(c1, "H", 3);
        let graph = builder.build();

        let mut counts = NeighborCounts::new();
        assert_eq!(counts.count(&graph, c1, ElementKind::Hydrogen), 3);
        assert_eq!(counts.count(&graph, c1, ElementKind::Carbon), 1);
        assert_eq!(counts.count(&graph, c1, ElementKind::Oxygen), 0);
    }

    #[test]
    fn repeated_queries_return_the_cached_tally() {
        let mut builder = MoleculeBuilder::new();
        let c = builder.atom("C1", ElementKind::Carbon);
        builder.hydrogens(c, "H", 4);
        let graph = builder.build();

        let mut counts = NeighborCounts::new();
        let first = counts.counts_for(&graph, c).clone();
        let second = counts.counts_for(&graph, c).clone();
        assert_eq!(first, second);
        assert_eq!(first.get(&ElementKind::Hydrogen), Some(&4));
    }

    #[test]
    fn isolated_atom_has_empty_tally() {
        let mut builder = MoleculeBuilder::new();
        let c = builder.atom("C1", ElementKind::Carbon);
        let graph = builder.build();

        let mut counts = NeighborCounts::new();
        assert!(counts.counts_for(&graph, c).is_empty());
    }

    #[test]
    fn ghost_neighbors_are_tallied_under_their_own_kind() {
        let mut builder = MoleculeBuilder::new();
        let c = builder.atom("C1", ElementKind::Carbon);
        let g = builder.atom("port", ElementKind::Ghost);
        builder.bond(c, g);
        let graph = builder.build();

        let mut counts = NeighborCounts::new();
        assert_eq!(counts.count(&graph, c, ElementKind::Ghost), 1);
        assert_eq!(counts.count(&graph, c, ElementKind::Carbon), 0);
    }
}
