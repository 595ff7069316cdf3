//! Built-in demo molecules, constructed programmatically.
//!
//! These mirror the structures traditionally used to validate OPLS-aa atom
//! typers (alkanes, an alkene, benzene, biphenyl). File loading of molecular
//! structures is deliberately not part of this tool.

use atomtyper::core::models::builder::MoleculeBuilder;
use atomtyper::core::models::element::ElementKind;
use atomtyper::core::models::ids::AtomId;
use atomtyper::core::models::system::MoleculeGraph;
use atomtyper::core::models::topology::BondOrder;

const NAMES: &[&str] = &[
    "methane",
    "ethane",
    "propane",
    "isobutane",
    "neopentane",
    "cyclohexane",
    "propene",
    "benzene",
    "biphenyl",
];

pub fn names() -> &'static [&'static str] {
    NAMES
}

pub fn build(name: &str) -> Option<MoleculeGraph> {
    match name {
        "methane" => Some(linear_alkane(1)),
        "ethane" => Some(linear_alkane(2)),
        "propane" => Some(linear_alkane(3)),
        "isobutane" => Some(branched_alkane(3)),
        "neopentane" => Some(branched_alkane(4)),
        "cyclohexane" => Some(cyclohexane()),
        "propene" => Some(propene()),
        "benzene" => Some(benzene()),
        "biphenyl" => Some(biphenyl()),
        _ => None,
    }
}

fn linear_alkane(length: usize) -> MoleculeGraph {
    let mut builder = MoleculeBuilder::new();
    let carbons: Vec<_> = (0..length)
        .map(|i| builder.atom(&format!("C{}", i + 1), ElementKind::Carbon))
        .collect();
    for pair in carbons.windows(2) {
        builder.bond(pair[0], pair[1]);
    }
    for (i, &c) in carbons.iter().enumerate() {
        let h_count = if length == 1 {
            4
        } else if i == 0 || i == length - 1 {
            3
        } else {
            2
        };
        builder.hydrogens(c, &format!("H{}-", i + 1), h_count);
    }
    builder.build()
}

fn branched_alkane(methyl_count: usize) -> MoleculeGraph {
    let mut builder = MoleculeBuilder::new();
    let center = builder.atom("C0", ElementKind::Carbon);
    for i in 0..methyl_count {
        let methyl = builder.atom(&format!("C{}", i + 1), ElementKind::Carbon);
        builder.bond(center, methyl);
        builder.hydrogens(methyl, &format!("H{}-", i + 1), 3);
    }
    builder.hydrogens(center, "H0-", 4 - methyl_count);
    builder.build()
}

fn cyclohexane() -> MoleculeGraph {
    let mut builder = MoleculeBuilder::new();
    let ring = carbon_ring(&mut builder, "C", BondOrder::Single);
    for (i, &c) in ring.iter().enumerate() {
        builder.hydrogens(c, &format!("H{}-", i + 1), 2);
    }
    builder.build()
}

fn propene() -> MoleculeGraph {
    let mut builder = MoleculeBuilder::new();
    let c1 = builder.atom("C1", ElementKind::Carbon);
    let c2 = builder.atom("C2", ElementKind::Carbon);
    let c3 = builder.atom("C3", ElementKind::Carbon);
    builder.bond(c1, c2);
    builder.bond_with_order(c2, c3, BondOrder::Double);
    builder.hydrogens(c1, "H1-", 3);
    builder.hydrogens(c2, "H2-", 1);
    builder.hydrogens(c3, "H3-", 2);
    builder.build()
}

fn benzene() -> MoleculeGraph {
    let mut builder = MoleculeBuilder::new();
    let ring = carbon_ring(&mut builder, "C", BondOrder::Aromatic);
    for (i, &c) in ring.iter().enumerate() {
        builder.hydrogens(c, &format!("H{}-", i + 1), 1);
    }
    builder.build()
}

fn biphenyl() -> MoleculeGraph {
    let mut builder = MoleculeBuilder::new();
    let ring_a = carbon_ring(&mut builder, "CA", BondOrder::Aromatic);
    let ring_b = carbon_ring(&mut builder, "CB", BondOrder::Aromatic);
    builder.bond(ring_a[0], ring_b[0]);
    for (prefix, ring) in [("HA", &ring_a), ("HB", &ring_b)] {
        for (i, &c) in ring.iter().enumerate().skip(1) {
            builder.hydrogens(c, &format!("{prefix}{}-", i + 1), 1);
        }
    }
    builder.build()
}

fn carbon_ring(builder: &mut MoleculeBuilder, prefix: &str, order: BondOrder) -> Vec<AtomId> {
    let ring: Vec<_> = (0..6)
        .map(|i| builder.atom(&format!("{prefix}{}", i + 1), ElementKind::Carbon))
        .collect();
    for i in 0..6 {
        builder.bond_with_order(ring[i], ring[(i + 1) % 6], order);
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_builds() {
        for name in names() {
            assert!(build(name).is_some(), "demo '{name}' failed to build");
        }
    }

    #[test]
    fn unknown_name_builds_nothing() {
        assert!(build("caffeine").is_none());
    }

    #[test]
    fn benzene_has_twelve_atoms() {
        let graph = build("benzene").unwrap();
        assert_eq!(graph.atom_count(), 12);
        assert_eq!(graph.bonds().len(), 12);
    }
}
