use super::atom::Atom;
use super::ids::AtomId;
use super::topology::{Bond, BondOrder};
use slotmap::{SecondaryMap, SlotMap};

/// Represents a molecular graph: atoms as nodes, bonds as undirected edges.
///
/// This struct is the central data structure the typing engine operates on.
/// It owns the atoms and bonds and maintains cached adjacency and
/// incident-bond lists so neighbor queries are cheap. The engine only ever
/// reads from the graph; mutation happens during construction, typically
/// through [`super::builder::MoleculeBuilder`].
#[derive(Debug, Clone, Default)]
pub struct MoleculeGraph {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// List of all bonds in the graph, in declaration order.
    bonds: Vec<Bond>,
    /// Cached adjacency list, indexed by atom ID; neighbor order follows
    /// bond declaration order.
    adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
    /// Indices into `bonds` for each atom's incident bonds.
    incident_bonds: SecondaryMap<AtomId, Vec<usize>>,
}

impl MoleculeGraph {
    /// Creates a new, empty molecular graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in the graph.
    ///
    /// Iteration order is stable across calls for a given graph, which the
    /// typing engine relies on for deterministic passes.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Returns the number of atoms in the graph.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns a slice of all bonds in the graph.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Returns an iterator over the bonds incident to an atom, in bond
    /// declaration order.
    pub fn bonds_of(&self, id: AtomId) -> impl Iterator<Item = &Bond> {
        self.incident_bonds
            .get(id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.bonds[idx])
    }

    /// Returns the number of bonds incident to an atom, i.e. its valence.
    pub fn bond_count(&self, id: AtomId) -> usize {
        self.incident_bonds.get(id).map_or(0, Vec::len)
    }

    /// Retrieves the bonded neighbors of an atom, in bond declaration order.
    ///
    /// Returns an empty slice for an ID not present in the graph.
    pub fn neighbors(&self, id: AtomId) -> &[AtomId] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Adds an atom to the graph, initializing its adjacency entries.
    pub fn add_atom(&mut self, atom: Atom) -> AtomId {
        let id = self.atoms.insert(atom);
        self.adjacency.insert(id, Vec::new());
        self.incident_bonds.insert(id, Vec::new());
        id
    }

    /// Adds a bond between two distinct atoms.
    ///
    /// This method is idempotent; adding an already-present bond succeeds
    /// without creating a duplicate.
    ///
    /// # Return
    ///
    /// Returns `Some(())` if successful, otherwise `None` (unknown atom, or
    /// both endpoints are the same atom).
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Option<()> {
        if atom1_id == atom2_id {
            return None;
        }
        if !self.atoms.contains_key(atom1_id) || !self.atoms.contains_key(atom2_id) {
            return None;
        }

        if self.adjacency[atom1_id].contains(&atom2_id) {
            // Bond already exists, operation is successful (idempotent)
            return Some(());
        }

        let idx = self.bonds.len();
        self.bonds.push(Bond::new(atom1_id, atom2_id, order));
        self.adjacency[atom1_id].push(atom2_id);
        self.adjacency[atom2_id].push(atom1_id);
        self.incident_bonds[atom1_id].push(idx);
        self.incident_bonds[atom2_id].push(idx);
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::ElementKind;

    fn two_bonded_carbons() -> (MoleculeGraph, AtomId, AtomId) {
        let mut graph = MoleculeGraph::new();
        let c1 = graph.add_atom(Atom::new("C1", ElementKind::Carbon));
        let c2 = graph.add_atom(Atom::new("C2", ElementKind::Carbon));
        graph.add_bond(c1, c2, BondOrder::Single).unwrap();
        (graph, c1, c2)
    }

    #[test]
    fn add_atom_and_lookup() {
        let mut graph = MoleculeGraph::new();
        let id = graph.add_atom(Atom::new("C1", ElementKind::Carbon));
        assert_eq!(graph.atom_count(), 1);
        assert_eq!(graph.atom(id).unwrap().name, "C1");
        assert!(graph.neighbors(id).is_empty());
        assert_eq!(graph.bond_count(id), 0);
    }

    #[test]
    fn add_bond_updates_both_adjacency_lists() {
        let (graph, c1, c2) = two_bonded_carbons();
        assert_eq!(graph.bonds().len(), 1);
        assert_eq!(graph.neighbors(c1), &[c2]);
        assert_eq!(graph.neighbors(c2), &[c1]);
        assert_eq!(graph.bond_count(c1), 1);
    }

    #[test]
    fn add_bond_is_idempotent() {
        let (mut graph, c1, c2) = two_bonded_carbons();
        assert_eq!(graph.add_bond(c2, c1, BondOrder::Single), Some(()));
        assert_eq!(graph.bonds().len(), 1);
        assert_eq!(graph.neighbors(c1), &[c2]);
    }

    #[test]
    fn add_bond_rejects_unknown_and_self_bonds() {
        let mut graph = MoleculeGraph::new();
        let c1 = graph.add_atom(Atom::new("C1", ElementKind::Carbon));
        let mut other = MoleculeGraph::new();
        let foreign = other.add_atom(Atom::new("C9", ElementKind::Carbon));

        assert_eq!(graph.add_bond(c1, c1, BondOrder::Single), None);
        assert_eq!(graph.add_bond(c1, foreign, BondOrder::Single), None);
        assert!(graph.bonds().is_empty());
    }

    #[test]
    fn neighbor_order_follows_bond_declaration_order() {
        let mut graph = MoleculeGraph::new();
        let c = graph.add_atom(Atom::new("C1", ElementKind::Carbon));
        let h1 = graph.add_atom(Atom::new("H1", ElementKind::Hydrogen));
        let h2 = graph.add_atom(Atom::new("H2", ElementKind::Hydrogen));
        let h3 = graph.add_atom(Atom::new("H3", ElementKind::Hydrogen));
        graph.add_bond(c, h2, BondOrder::Single).unwrap();
        graph.add_bond(c, h1, BondOrder::Single).unwrap();
        graph.add_bond(c, h3, BondOrder::Single).unwrap();

        assert_eq!(graph.neighbors(c), &[h2, h1, h3]);
    }

    #[test]
    fn bonds_of_resolves_incident_bonds() {
        let mut graph = MoleculeGraph::new();
        let c1 = graph.add_atom(Atom::new("C1", ElementKind::Carbon));
        let c2 = graph.add_atom(Atom::new("C2", ElementKind::Carbon));
        let c3 = graph.add_atom(Atom::new("C3", ElementKind::Carbon));
        graph.add_bond(c1, c2, BondOrder::Single).unwrap();
        graph.add_bond(c2, c3, BondOrder::Double).unwrap();

        let partners: Vec<_> = graph
            .bonds_of(c2)
            .filter_map(|b| b.partner(c2))
            .collect();
        assert_eq!(partners, vec![c1, c3]);
        assert_eq!(graph.bonds_of(c1).count(), 1);
    }
}
