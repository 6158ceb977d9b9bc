//! Theoretical peptide fragment ion generation and mass calculation.
//!
//! Given a peptide sequence, per-site modification masses, an ordered
//! ion-series configuration, and a maximum charge state, this crate
//! produces every theoretical fragment ion (mass, display label, backbone
//! position) an instrument could observe, and separately computes the
//! residue-by-residue mass ladder of a modified sequence.
//!
//! The two low-level entry points are [`generate_ions`] and
//! [`calculate_mass`]; [`Peptide`] wraps both behind a convenience API.
//!
//! All computation is synchronous, in-memory, and call-scoped: no state
//! survives a call, and no I/O is performed.

// Declare modules
pub mod constants;
pub mod errors;
pub mod generate;
pub mod mass;
pub mod models;
pub mod peptide;

mod labels;

// Re-export main structures
pub use crate::models::{
    Ion,
    IonSeriesConfig,
    IonType,
    MassArrayKind,
    MassMode,
    ModLocation,
    ModSite,
    NeutralLoss,
};
pub use crate::peptide::Peptide;

// Re-export entry points
pub use crate::generate::generate_ions;
pub use crate::mass::{
    calculate_mass,
    calculate_peptide_mass,
    PeptideMass,
};

// Re-export errors
pub use crate::errors::{
    ConfigError,
    MassError,
    PepionError,
    Result,
};
