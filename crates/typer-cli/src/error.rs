use atomtyper::engine::error::TyperError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown molecule '{0}'; use --list to see the built-in demos")]
    UnknownMolecule(String),

    #[error("typing failed: {0}")]
    Typer(#[from] TyperError),
}
