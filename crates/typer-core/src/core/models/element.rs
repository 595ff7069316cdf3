use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents the element kind of an atom in a molecular graph.
///
/// This enum covers the elements the typing engine can encounter, plus the
/// [`ElementKind::Ghost`] sentinel for open attachment points (ports) that
/// stand in for not-yet-bonded substituents. Ghost atoms are part of the
/// graph but are skipped entirely by the typing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Carbon.
    Carbon,
    /// Hydrogen.
    Hydrogen,
    /// Oxygen.
    Oxygen,
    /// Nitrogen.
    Nitrogen,
    /// Sulfur.
    Sulfur,
    /// Placeholder for an open attachment point; never typed.
    Ghost,
}

impl ElementKind {
    /// Returns the one-letter symbol for this element kind.
    ///
    /// Ghost atoms use the symbol `"G"`, matching the convention for open
    /// attachment points in molecular construction tools.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Carbon => "C",
            Self::Hydrogen => "H",
            Self::Oxygen => "O",
            Self::Nitrogen => "N",
            Self::Sulfur => "S",
            Self::Ghost => "G",
        }
    }

    /// Returns `true` if this is the ghost sentinel rather than a real atom.
    pub fn is_ghost(&self) -> bool {
        matches!(self, Self::Ghost)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid element kind string")]
pub struct ParseElementError;

impl FromStr for ElementKind {
    type Err = ParseElementError;

    /// Parses a string into an `ElementKind`.
    ///
    /// Accepts the one-letter symbol or the full element name,
    /// case-insensitively. Ghost atoms parse from `"G"`, `"ghost"`, or
    /// `"port"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "carbon" => Ok(Self::Carbon),
            "h" | "hydrogen" => Ok(Self::Hydrogen),
            "o" | "oxygen" => Ok(Self::Oxygen),
            "n" | "nitrogen" => Ok(Self::Nitrogen),
            "s" | "sulfur" => Ok(Self::Sulfur),
            "g" | "ghost" | "port" => Ok(Self::Ghost),
            _ => Err(ParseElementError),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
