//! The shared backbone algorithm behind every sequential ion series and the
//! immonium ions. Per-type behavior (mass offset, truncation, radical
//! variants, labels) is dispatched over [`IonType`].

use crate::constants::{
    CO_MASS,
    NITROGEN_MASS,
    PROTON_MASS,
};
use crate::generate::charge::expand_charges;
use crate::labels;
use crate::models::{
    Ion,
    IonType,
    NeutralLoss,
};

/// Type-specific mass offset applied to the raw backbone cleavage mass.
fn fix_mass(ion_type: IonType, mass: f64) -> f64 {
    match ion_type {
        IonType::B | IonType::Y => mass + PROTON_MASS,
        IonType::A => mass + PROTON_MASS - CO_MASS,
        IonType::C => mass + 4.0 * PROTON_MASS + NITROGEN_MASS,
        IonType::Z => mass - NITROGEN_MASS - PROTON_MASS,
        IonType::X => mass + CO_MASS - PROTON_MASS,
        IonType::Immonium => mass - CO_MASS + PROTON_MASS,
        IonType::Precursor => unreachable!("precursor ions use a dedicated generator"),
    }
}

/// Radical variants per series: hydrogen-shift annotation and mass delta
/// relative to the fixed base mass.
fn radical_variants(ion_type: IonType) -> &'static [(&'static str, f64)] {
    match ion_type {
        IonType::B | IonType::X => &[("-H", 0.0)],
        IonType::A => &[("-H", -PROTON_MASS), ("+H", PROTON_MASS)],
        IonType::C => &[("+2H", 2.0 * PROTON_MASS)],
        IonType::Z => &[("-H", -PROTON_MASS)],
        IonType::Y | IonType::Immonium => &[],
        IonType::Precursor => unreachable!("precursor ions use a dedicated generator"),
    }
}

/// Usable prefix of the mass array: sequential series drop the final
/// cleavage point (it duplicates the precursor), immonium consumes every
/// residue mass.
fn usable_masses(ion_type: IonType, masses: &[f64]) -> &[f64] {
    match ion_type {
        IonType::Immonium => masses,
        _ => &masses[..masses.len().saturating_sub(1)],
    }
}

/// Generates the full ion set of one series: base ions, radical variants,
/// neutral-loss variants, and all charge states up to `max_charge`.
///
/// The returned list is sorted ascending by position.
pub(crate) fn generate_series(
    ion_type: IonType,
    masses: &[f64],
    max_charge: usize,
    losses: &[NeutralLoss],
    radical: bool,
    sequence: &str,
) -> Vec<Ion> {
    let residues: Vec<char> = sequence.chars().collect();
    let usable = usable_masses(ion_type, masses);

    let mut ions = Vec::with_capacity(usable.len() * (1 + 2 + losses.len()));
    for (ii, &raw_mass) in usable.iter().enumerate() {
        let mass = fix_mass(ion_type, raw_mass);

        if ion_type == IonType::Immonium {
            let Some(&residue) = residues.get(ii) else {
                break;
            };
            ions.push(Ion::new(mass, labels::immonium(residue), 0));
            for loss in losses {
                ions.push(Ion::new(
                    mass - loss.mass,
                    labels::immonium_loss(residue, &loss.name),
                    0,
                ));
            }
            continue;
        }

        let series = ion_type.series_char();
        let position = ii + 1;
        ions.push(Ion::new(mass, labels::base(series, position), position));

        if radical {
            for &(variant, delta) in radical_variants(ion_type) {
                ions.push(Ion::new(
                    mass + delta,
                    labels::radical(series, position, variant),
                    position,
                ));
            }
        }

        for loss in losses {
            ions.push(Ion::new(
                mass - loss.mass,
                labels::neutral_loss(series, position, &loss.name),
                position,
            ));
        }
    }

    expand_charges(ions, max_charge)
}
