use thiserror::Error;

use crate::core::models::element::ElementKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TyperError {
    /// The graph itself is malformed: an atom carries more bonds than are
    /// chemically valid for its element. Typing aborts immediately.
    #[error("atom '{name}' has {valence} bonds; at most {max} are valid for {kind}")]
    ValenceExceeded {
        name: String,
        kind: ElementKind,
        valence: usize,
        max: usize,
    },

    /// The dispatcher was asked to evaluate an identifier with no registered
    /// rule function. This is a registry-construction defect, not a property
    /// of the input graph.
    #[error("no typing rule registered for identifier '{rule_id}'")]
    RuleNotImplemented { rule_id: String },
}
