use crate::core::models::ids::AtomId;
use crate::core::models::system::MoleculeGraph;

/// Result of a bounded ring search from a seed atom.
///
/// Each entry in `rings` is the ordered path of a closed walk that starts at
/// the seed and returns to it. Because the walk is undirected and every ring
/// can be departed in either direction, **every true ring is reported exactly
/// twice** (once per direction). Callers rely on this: exactly 2 entries
/// signal one real ring. Results are ephemeral and recomputed per rule
/// invocation.
#[derive(Debug, Clone, Default)]
pub struct RingSearch {
    rings: Vec<Vec<AtomId>>,
    branch_points: Vec<AtomId>,
}

impl RingSearch {
    /// The discovered closed walks, in discovery order.
    pub fn rings(&self) -> &[Vec<AtomId>] {
        &self.rings
    }

    /// Atoms with more than two neighbors entered during the walk,
    /// deduplicated in first-visit order.
    pub fn branch_points(&self) -> &[AtomId] {
        &self.branch_points
    }
}

struct Frame {
    atom: AtomId,
    /// Index of the next neighbor of `atom` to explore.
    next: usize,
}

/// Enumerates all simple cycles through `seed` with length in
/// `3..=max_length`.
///
/// The search is a depth-first walk over an explicit frame stack. The
/// current path extends only through neighbors not already on it; a neighbor
/// equal to the path's first atom closes a ring, provided the path holds
/// more than 2 atoms (which rejects the trivial walk out and back across a
/// single bond). Worst-case cost is exponential in `max_length`, acceptable
/// because ring lengths of interest are small and molecular valence is
/// bounded.
pub fn find_rings(graph: &MoleculeGraph, seed: AtomId, max_length: usize) -> RingSearch {
    let mut result = RingSearch::default();
    let mut path = vec![seed];
    let mut stack = vec![Frame {
        atom: seed,
        next: 0,
    }];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let atom = stack[top].atom;
        let neighbors = graph.neighbors(atom);

        // Dead end: nowhere to go but back the way we came.
        if neighbors.len() <= 1 {
            path.pop();
            stack.pop();
            continue;
        }

        if stack[top].next == 0
            && neighbors.len() > 2
            && !result.branch_points.contains(&atom)
        {
            result.branch_points.push(atom);
        }

        let next = stack[top].next;
        stack[top].next += 1;
        let Some(&neighbor) = neighbors.get(next) else {
            // All neighbors explored; this atom's subtree is exhausted.
            path.pop();
            stack.pop();
            continue;
        };

        if path.len() > 2 && neighbor == path[0] {
            result.rings.push(path.clone());
        } else if path.contains(&neighbor) {
            // Stepping backwards into the current path.
        } else if path.len() < max_length {
            path.push(neighbor);
            stack.push(Frame {
                atom: neighbor,
                next: 0,
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::MoleculeBuilder;
    use crate::core::models::element::ElementKind;
    use std::collections::HashSet;

    fn carbon_ring(n: usize) -> (MoleculeGraph, Vec<AtomId>) {
        let mut builder = MoleculeBuilder::new();
        let atoms: Vec<_> = (0..n)
            .map(|i| builder.atom(&format!("C{}", i + 1), ElementKind::Carbon))
            .collect();
        for i in 0..n {
            builder.bond(atoms[i], atoms[(i + 1) % n]);
        }
        (builder.build(), atoms)
    }

    #[test]
    fn hexagon_is_found_exactly_twice() {
        let (graph, atoms) = carbon_ring(6);
        let search = find_rings(&graph, atoms[0], 6);

        assert_eq!(search.rings().len(), 2);
        let first: HashSet<_> = search.rings()[0].iter().copied().collect();
        let second: HashSet<_> = search.rings()[1].iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(search.rings()[0][0], atoms[0]);
    }

    #[test]
    fn ring_longer_than_max_length_is_invisible() {
        let (graph, atoms) = carbon_ring(6);
        let search = find_rings(&graph, atoms[0], 5);
        assert!(search.rings().is_empty());
    }

    #[test]
    fn single_bond_is_not_a_ring() {
        let mut builder = MoleculeBuilder::new();
        let c1 = builder.atom("C1", ElementKind::Carbon);
        let c2 = builder.atom("C2", ElementKind::Carbon);
        builder.bond(c1, c2);
        let graph = builder.build();

        let search = find_rings(&graph, c1, 6);
        assert!(search.rings().is_empty());
    }

    #[test]
    fn triangle_is_found_twice() {
        let (graph, atoms) = carbon_ring(3);
        let search = find_rings(&graph, atoms[0], 6);
        assert_eq!(search.rings().len(), 2);
        assert_eq!(search.rings()[0].len(), 3);
    }

    #[test]
    fn substituted_ring_reports_the_branch_point() {
        let (mut graph, atoms) = {
            let mut builder = MoleculeBuilder::new();
            let ring: Vec<_> = (0..6)
                .map(|i| builder.atom(&format!("C{}", i + 1), ElementKind::Carbon))
                .collect();
            for i in 0..6 {
                builder.bond(ring[i], ring[(i + 1) % 6]);
            }
            (builder.build(), ring)
        };
        let methyl = graph.add_atom(crate::core::models::atom::Atom::new(
            "C7",
            ElementKind::Carbon,
        ));
        graph
            .add_bond(atoms[2], methyl, Default::default())
            .unwrap();

        let search = find_rings(&graph, atoms[0], 6);
        // The substituted carbon has three neighbors and is crossed by both
        // ring traversals.
        assert!(search.branch_points().contains(&atoms[2]));
        assert_eq!(search.rings().len(), 2);
    }

    #[test]
    fn isolated_seed_yields_nothing() {
        let mut builder = MoleculeBuilder::new();
        let c = builder.atom("C1", ElementKind::Carbon);
        let graph = builder.build();

        let search = find_rings(&graph, c, 6);
        assert!(search.rings().is_empty());
        assert!(search.branch_points().is_empty());
    }

    #[test]
    fn fused_seed_sees_only_cycles_through_itself() {
        // Two hexagons sharing a single linking bond (biphenyl skeleton):
        // the seed in ring A must not report ring B.
        let mut builder = MoleculeBuilder::new();
        let a: Vec<_> = (0..6)
            .map(|i| builder.atom(&format!("A{}", i + 1), ElementKind::Carbon))
            .collect();
        let b: Vec<_> = (0..6)
            .map(|i| builder.atom(&format!("B{}", i + 1), ElementKind::Carbon))
            .collect();
        for i in 0..6 {
            builder.bond(a[i], a[(i + 1) % 6]);
            builder.bond(b[i], b[(i + 1) % 6]);
        }
        builder.bond(a[0], b[0]);
        let graph = builder.build();

        let search = find_rings(&graph, a[3], 6);
        assert_eq!(search.rings().len(), 2);
        let members: HashSet<_> = search.rings()[0].iter().copied().collect();
        assert!(b.iter().all(|id| !members.contains(id)));
    }
}
