//! Precursor ions follow their own algorithm: one input mass, every charge
//! state from 1 up, and the maximal position so they always sort last.

use crate::constants::PROTON_MASS;
use crate::errors::ConfigError;
use crate::labels;
use crate::models::{
    Ion,
    NeutralLoss,
};

pub(crate) fn generate_precursor(
    masses: &[f64],
    max_charge: usize,
    losses: &[NeutralLoss],
    radical: bool,
    sequence: &str,
) -> Result<Vec<Ion>, ConfigError> {
    let &[mass] = masses else {
        return Err(ConfigError::PrecursorMassCount {
            count: masses.len(),
        });
    };
    let position = sequence.chars().count();

    let mut ions = Vec::with_capacity(max_charge * (2 + losses.len()));
    for charge in 1..=max_charge {
        let symbol = labels::precursor_charge_symbol(charge, radical);
        let charge_f = charge as f64;

        ions.push(Ion::new(
            mass / charge_f + PROTON_MASS,
            format!("[M+H][{symbol}]"),
            position,
        ));

        if radical {
            ions.push(Ion::new(mass / charge_f, format!("M[{symbol}]"), position));
        }

        for loss in losses {
            ions.push(Ion::new(
                (mass - loss.mass) / charge_f + PROTON_MASS,
                format!("[M-{}][{symbol}]", loss.name),
                position,
            ));
        }
    }

    Ok(ions)
}
