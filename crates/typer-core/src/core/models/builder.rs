use super::atom::Atom;
use super::element::ElementKind;
use super::ids::AtomId;
use super::system::MoleculeGraph;
use super::topology::BondOrder;

/// Fluent builder for constructing a [`MoleculeGraph`] programmatically.
///
/// Geometry construction and file loading are collaborator concerns; this
/// builder exists so tests, demos, and embedding code can assemble small
/// graphs without touching the graph's mutation API directly.
#[derive(Debug, Default)]
pub struct MoleculeBuilder {
    graph: MoleculeGraph,
}

impl MoleculeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an atom and returns its ID for later bonding.
    pub fn atom(&mut self, name: &str, kind: ElementKind) -> AtomId {
        self.graph.add_atom(Atom::new(name, kind))
    }

    /// Adds a single bond between two previously added atoms.
    ///
    /// # Panics
    ///
    /// Panics if either atom is not part of the graph under construction.
    pub fn bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> &mut Self {
        self.bond_with_order(atom1_id, atom2_id, BondOrder::Single)
    }

    /// Adds a bond with an explicit order between two previously added atoms.
    ///
    /// # Panics
    ///
    /// Panics if either atom is not part of the graph under construction.
    pub fn bond_with_order(
        &mut self,
        atom1_id: AtomId,
        atom2_id: AtomId,
        order: BondOrder,
    ) -> &mut Self {
        self.graph
            .add_bond(atom1_id, atom2_id, order)
            .expect("Both bond endpoints must already be in the graph");
        self
    }

    /// Attaches `count` hydrogens to an atom, named `<prefix>1..<prefix>N`.
    pub fn hydrogens(&mut self, to: AtomId, prefix: &str, count: usize) -> &mut Self {
        for i in 1..=count {
            let h = self.atom(&format!("{prefix}{i}"), ElementKind::Hydrogen);
            self.bond(to, h);
        }
        self
    }

    pub fn build(self) -> MoleculeGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_bonded_pair() {
        let mut builder = MoleculeBuilder::new();
        let c = builder.atom("C1", ElementKind::Carbon);
        let h = builder.atom("H1", ElementKind::Hydrogen);
        builder.bond(c, h);
        let graph = builder.build();

        assert_eq!(graph.atom_count(), 2);
        assert_eq!(graph.neighbors(c), &[h]);
        assert_eq!(graph.atom(h).unwrap().kind, ElementKind::Hydrogen);
    }

    #[test]
    fn hydrogens_helper_names_and_bonds_all_atoms() {
        let mut builder = MoleculeBuilder::new();
        let c = builder.atom("C1", ElementKind::Carbon);
        builder.hydrogens(c, "H", 4);
        let graph = builder.build();

        assert_eq!(graph.atom_count(), 5);
        assert_eq!(graph.bond_count(c), 4);
        let names: Vec<_> = graph
            .neighbors(c)
            .iter()
            .map(|&h| graph.atom(h).unwrap().name.clone())
            .collect();
        assert_eq!(names, vec!["H1", "H2", "H3", "H4"]);
    }
}
