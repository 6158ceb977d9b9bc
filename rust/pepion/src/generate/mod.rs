//! Fragment ion generation across all requested ion series.

use tracing::debug;

use crate::errors::Result;
use crate::models::{
    Ion,
    IonSeriesConfig,
    MassArrayKind,
    NeutralLoss,
};

mod charge;
mod precursor;
mod series;

use charge::merge_by_position;

/// Generates every theoretical fragment ion of one peptide.
///
/// Inputs, as supplied by the host boundary:
/// - `config`: ordered ion-series table (series, allowed neutral losses),
/// - `precursor_mass`: neutral peptide mass,
/// - `residue_masses`: one (modified) mass per residue,
/// - `nterm_masses` / `cterm_masses`: cumulative backbone cleavage masses
///   anchored at the N-/C-terminus (the final entry of each duplicates the
///   precursor and is skipped by the sequential series),
/// - `max_charge`: highest charge state to expand to,
/// - `radical`: whether radical-mechanism variants are generated,
/// - `sequence`: the peptide sequence, used for immonium labels and the
///   precursor position.
///
/// The result is sorted ascending by position across every series and
/// charge state, with ties kept in generation order.
#[allow(clippy::too_many_arguments)]
#[tracing::instrument(skip_all, level = "trace")]
pub fn generate_ions(
    config: &IonSeriesConfig,
    precursor_mass: f64,
    residue_masses: &[f64],
    nterm_masses: &[f64],
    cterm_masses: &[f64],
    max_charge: usize,
    radical: bool,
    sequence: &str,
) -> Result<Vec<Ion>> {
    let precursor_masses = [precursor_mass];

    let mut ions: Vec<Ion> = Vec::new();
    for (ion_type, losses) in config.iter() {
        let generate = |masses: &[f64], losses: &[NeutralLoss]| {
            series::generate_series(ion_type, masses, max_charge, losses, radical, sequence)
        };
        let batch = match ion_type.mass_array() {
            MassArrayKind::NTerminal => generate(nterm_masses, losses),
            MassArrayKind::CTerminal => generate(cterm_masses, losses),
            MassArrayKind::Residue => generate(residue_masses, losses),
            MassArrayKind::Precursor => precursor::generate_precursor(
                &precursor_masses,
                max_charge,
                losses,
                radical,
                sequence,
            )?,
        };
        debug!(%ion_type, count = batch.len(), "generated ion batch");
        merge_by_position(&mut ions, batch);
    }

    Ok(ions)
}
