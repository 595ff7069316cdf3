use super::element::ElementKind;

/// Represents an atom in a molecular graph.
///
/// An atom carries only what the typing engine needs: a free-form name used
/// in diagnostics (e.g. `"C1"`) and its element kind. Connectivity lives on
/// the owning [`super::system::MoleculeGraph`]; per-run typing state is
/// attached externally by the engine and never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The name of the atom (e.g., "C1", "H3").
    pub name: String,
    /// The element kind of the atom.
    pub kind: ElementKind,
}

impl Atom {
    /// Creates a new `Atom` with the given name and element kind.
    pub fn new(name: &str, kind: ElementKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_name_and_kind() {
        let atom = Atom::new("C1", ElementKind::Carbon);
        assert_eq!(atom.name, "C1");
        assert_eq!(atom.kind, ElementKind::Carbon);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new("H2", ElementKind::Hydrogen);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
