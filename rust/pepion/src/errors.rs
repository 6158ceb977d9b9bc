use thiserror::Error;

/// Errors caused by an invalid fragmentation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Unknown ion type identifier: {id}")]
    UnknownIonType { id: u8 },
    #[error("Unknown ion series name: {name}")]
    UnknownIonSeries { name: String },
    #[error("Expected exactly one precursor mass, got {count}")]
    PrecursorMassCount { count: usize },
    #[error("Unknown mass mode identifier: {id}")]
    UnknownMassMode { id: u8 },
}

/// Errors raised while resolving residue masses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MassError {
    /// `position` is 1-indexed along the peptide sequence.
    #[error("Invalid residue '{residue}' at position {position}")]
    UnknownResidue { residue: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PepionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Mass(#[from] MassError),
}

pub type Result<T> = std::result::Result<T, PepionError>;
