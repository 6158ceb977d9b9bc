use serde::{
    Deserialize,
    Serialize,
};

/// A single theoretical fragment (or precursor) ion.
///
/// `position` doubles as the sort key of merged ion lists and as the input
/// to the charge eligibility rule:
/// - 1-indexed backbone cleavage ordinal for sequential series (a/b/c/x/y/z),
/// - 0 for immonium ions, which are non-positional,
/// - the sequence length for precursor ions, so they always sort last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ion {
    pub mass: f64,
    pub label: String,
    pub position: usize,
}

impl Ion {
    pub fn new(mass: f64, label: impl Into<String>, position: usize) -> Self {
        Self {
            mass,
            label: label.into(),
            position,
        }
    }
}
