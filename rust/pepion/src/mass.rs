//! Residue-by-residue mass ladder of a modified peptide.

use serde::{
    Deserialize,
    Serialize,
};

use crate::constants::{
    self,
    WATER_MASS,
};
use crate::errors::{
    MassError,
    Result,
};
use crate::models::{
    site_deltas,
    MassMode,
    ModSite,
};

/// Computes the mass ladder of a modified sequence.
///
/// The result holds `sequence length + 2` values: index 0 carries the
/// N-terminal modification delta, index `n + 1` the C-terminal delta, and
/// index `i + 1` the mass of residue `i` plus any modification delta
/// registered there. Sites without a modification contribute zero;
/// multiple modifications on one site are summed.
#[tracing::instrument(skip_all, level = "trace")]
pub fn calculate_mass(sequence: &str, mods: &[ModSite], mode: MassMode) -> Result<Vec<f64>> {
    let residues: Vec<char> = sequence.chars().collect();
    let seq_len = residues.len();
    let deltas = site_deltas(mods, seq_len);

    let mut ladder = vec![0.0; seq_len + 2];
    ladder[0] = deltas.get(&0).copied().unwrap_or(0.0);
    ladder[seq_len + 1] = deltas.get(&(seq_len + 1)).copied().unwrap_or(0.0);

    for (ii, &residue) in residues.iter().enumerate() {
        let residue_mass =
            constants::residue_mass(residue, mode).ok_or(MassError::UnknownResidue {
                residue,
                position: ii + 1,
            })?;
        ladder[ii + 1] = residue_mass + deltas.get(&(ii + 1)).copied().unwrap_or(0.0);
    }

    Ok(ladder)
}

/// The mass ladder split into its terminal and residue parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeptideMass {
    pub nterm: f64,
    pub residues: Vec<f64>,
    pub cterm: f64,
}

impl PeptideMass {
    /// Total neutral peptide mass: both termini, every residue, plus one
    /// water for the backbone condensation.
    pub fn total(&self) -> f64 {
        self.nterm + self.residues.iter().sum::<f64>() + self.cterm + WATER_MASS
    }
}

impl From<Vec<f64>> for PeptideMass {
    fn from(mut ladder: Vec<f64>) -> Self {
        debug_assert!(ladder.len() >= 2, "mass ladder misses its terminal slots");
        let cterm = ladder.pop().unwrap_or(0.0);
        let nterm = if ladder.is_empty() {
            0.0
        } else {
            ladder.remove(0)
        };
        Self {
            nterm,
            residues: ladder,
            cterm,
        }
    }
}

/// Convenience wrapper around [`calculate_mass`] returning the split view.
pub fn calculate_peptide_mass(
    sequence: &str,
    mods: &[ModSite],
    mode: MassMode,
) -> Result<PeptideMass> {
    calculate_mass(sequence, mods, mode).map(PeptideMass::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModLocation;

    fn assert_close(left: f64, right: f64) {
        assert!(
            (left - right).abs() < 1e-6,
            "expected {left} to be close to {right}"
        );
    }

    #[test]
    fn unmodified_ladder_has_zero_termini() {
        let ladder = calculate_mass("AC", &[], MassMode::Monoisotopic).unwrap();
        assert_eq!(ladder.len(), 4);
        assert_eq!(ladder[0], 0.0);
        assert_close(ladder[1], 71.03711378515);
        assert_close(ladder[2], 103.00918495955);
        assert_eq!(ladder[3], 0.0);
        assert!(ladder.iter().all(|m| m.is_finite()));
    }

    #[test]
    fn terminal_deltas_land_in_the_outer_slots() {
        let mods = [
            ModSite::new(304.20536, ModLocation::NTerm, "iTRAQ8plex"),
            ModSite::new(21.981943, ModLocation::CTerm, "Cation:Na"),
        ];
        let ladder = calculate_mass("AAA", &mods, MassMode::Monoisotopic).unwrap();
        assert_close(ladder[0], 304.20536);
        assert_close(ladder[4], 21.981943);
    }

    #[test]
    fn residue_deltas_are_overlaid() {
        let mods = [ModSite::new(15.994915, ModLocation::Residue(2), "Oxidation")];
        let ladder = calculate_mass("AMA", &mods, MassMode::Monoisotopic).unwrap();
        assert_close(ladder[2], 131.04048508847 + 15.994915);
    }

    #[test]
    fn duplicate_site_deltas_are_summed() {
        let mods = [
            ModSite::new(15.994915, ModLocation::Residue(1), "Oxidation"),
            ModSite::new(15.994915, ModLocation::Residue(1), "Oxidation"),
        ];
        let ladder = calculate_mass("M", &mods, MassMode::Monoisotopic).unwrap();
        assert_close(ladder[1], 131.04048508847 + 2.0 * 15.994915);
    }

    #[test]
    fn unknown_residue_is_named() {
        let err = calculate_mass("AXA", &[], MassMode::Monoisotopic).unwrap_err();
        assert_eq!(
            err,
            MassError::UnknownResidue {
                residue: 'X',
                position: 2
            }
            .into()
        );
        assert!(err.to_string().contains('X'));
    }

    #[test]
    fn known_peptide_masses() {
        // Hand-checked reference masses.
        let mono = calculate_peptide_mass("AAA", &[], MassMode::Monoisotopic).unwrap();
        assert!((mono.total() - 231.12).abs() < 0.01);
        let avg = calculate_peptide_mass("AAA", &[], MassMode::Average).unwrap();
        assert!((avg.total() - 231.24).abs() < 0.01);

        let tagged = calculate_peptide_mass(
            "AAA",
            &[ModSite::new(304.20536, ModLocation::NTerm, "iTRAQ8plex")],
            MassMode::Monoisotopic,
        )
        .unwrap();
        assert!((tagged.total() - 535.33).abs() < 0.01);
    }

    #[test]
    fn water_round_trip() {
        let ladder = calculate_mass("PEPTIDE", &[], MassMode::Monoisotopic).unwrap();
        let total: f64 = ladder.iter().sum::<f64>() + WATER_MASS;
        let split = calculate_peptide_mass("PEPTIDE", &[], MassMode::Monoisotopic).unwrap();
        assert_close(total, split.total());
        // PEPTIDE monoisotopic neutral mass.
        assert!((total - 799.36).abs() < 0.01);
    }
}
