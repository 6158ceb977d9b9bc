//! Fixed small-molecule masses and the standard residue mass table.

use crate::models::MassMode;

pub const PROTON_MASS: f64 = 1.007276466879;
pub const WATER_MASS: f64 = 18.01056468403;
pub const CO_MASS: f64 = 27.99491461957;
pub const CO2_MASS: f64 = 43.989830;
pub const NH3_MASS: f64 = 17.02654910112;
pub const NITROGEN_MASS: f64 = 14.003074;

/// iTRAQ 8-plex reporter tag.
pub const ITRAQ_TAG_MASS: f64 = 304.20536;
/// Carbamidomethylation of cysteine.
pub const CARBAMIDOMETHYL_MASS: f64 = 57.021464;

/// (monoisotopic, average) masses of the 20 standard amino acid residues.
fn residue_masses(residue: char) -> Option<(f64, f64)> {
    let masses = match residue {
        'G' => (57.02146372069, 57.051402191402),
        'A' => (71.03711378515, 71.078019596249),
        'S' => (87.03202840472, 87.077424520567),
        'P' => (97.05276384961, 97.115372897831),
        'V' => (99.06841391407, 99.131254405943),
        'T' => (101.04767846918, 101.104041925414),
        'C' => (103.00918495955, 103.142807002376),
        'I' | 'L' => (113.08406397853, 113.157871810790),
        'N' => (114.04292744138, 114.102804382804),
        'D' => (115.02694302429, 115.087565341620),
        'Q' => (128.05857750584, 128.129421787651),
        'K' => (128.09496301519, 128.172515776292),
        'E' => (129.04259308875, 129.114182746467),
        'M' => (131.04048508847, 131.19604181207),
        'H' => (137.05891185847, 137.139515217458),
        'F' => (147.06841391407, 147.174197992883),
        'R' => (156.10111102405, 156.185922199184),
        'Y' => (163.06332853364, 163.173602917201),
        'W' => (186.07931295073, 186.210313751855),
        _ => return None,
    };
    Some(masses)
}

/// Mass of a single residue under the requested mass mode.
/// Returns `None` for residues outside the standard 20.
pub fn residue_mass(residue: char, mode: MassMode) -> Option<f64> {
    residue_masses(residue).map(|(mono, avg)| match mode {
        MassMode::Monoisotopic => mono,
        MassMode::Average => avg,
    })
}
