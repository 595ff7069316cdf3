use super::ids::AtomId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "ar" | "aromatic" => Ok(Self::Aromatic),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Aromatic => "Aromatic",
            }
        )
    }
}

/// An undirected bond between two atoms.
///
/// The typing rules never inspect the bond order; connectivity alone drives
/// the pattern matching. The order is still carried for callers that care
/// about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId,
    pub atom2_id: AtomId,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Self {
        Self {
            atom1_id,
            atom2_id,
            order,
        }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom1_id == atom_id || self.atom2_id == atom_id
    }

    /// Given one endpoint of the bond, returns the other endpoint.
    ///
    /// Returns `None` if `atom_id` is not an endpoint of this bond.
    pub fn partner(&self, atom_id: AtomId) -> Option<AtomId> {
        if atom_id == self.atom1_id {
            Some(self.atom2_id)
        } else if atom_id == self.atom2_id {
            Some(self.atom1_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn bond_order_from_str_accepts_common_forms() {
        assert!(matches!(BondOrder::from_str("1"), Ok(BondOrder::Single)));
        assert!(matches!(BondOrder::from_str("double"), Ok(BondOrder::Double)));
        assert!(matches!(BondOrder::from_str("T"), Ok(BondOrder::Triple)));
        assert!(matches!(BondOrder::from_str("ar"), Ok(BondOrder::Aromatic)));
        assert!(BondOrder::from_str("quadruple").is_err());
    }

    #[test]
    fn bond_order_default_is_single() {
        assert_eq!(BondOrder::default(), BondOrder::Single);
    }

    #[test]
    fn contains_matches_both_endpoints() {
        let a = dummy_atom_id(1);
        let b = dummy_atom_id(2);
        let c = dummy_atom_id(3);
        let bond = Bond::new(a, b, BondOrder::Single);
        assert!(bond.contains(a));
        assert!(bond.contains(b));
        assert!(!bond.contains(c));
    }

    #[test]
    fn partner_resolves_the_other_endpoint() {
        let a = dummy_atom_id(1);
        let b = dummy_atom_id(2);
        let c = dummy_atom_id(3);
        let bond = Bond::new(a, b, BondOrder::Double);
        assert_eq!(bond.partner(a), Some(b));
        assert_eq!(bond.partner(b), Some(a));
        assert_eq!(bond.partner(c), None);
    }
}
