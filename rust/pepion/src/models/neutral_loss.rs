use serde::{
    Deserialize,
    Serialize,
};

use crate::constants::{
    CO2_MASS,
    CO_MASS,
    NH3_MASS,
    WATER_MASS,
};
use crate::models::IonType;

/// A secondary mass loss applied on top of a base fragment ion.
///
/// Losses are supplied per ion series by the caller; the same series may be
/// configured with different losses in different calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeutralLoss {
    pub name: String,
    pub mass: f64,
}

impl NeutralLoss {
    pub fn new(name: impl Into<String>, mass: f64) -> Self {
        Self {
            name: name.into(),
            mass,
        }
    }

    pub fn water() -> Self {
        Self::new("H2O", WATER_MASS)
    }

    pub fn ammonia() -> Self {
        Self::new("NH3", NH3_MASS)
    }

    pub fn carbon_monoxide() -> Self {
        Self::new("CO", CO_MASS)
    }

    pub fn carbon_dioxide() -> Self {
        Self::new("CO2", CO2_MASS)
    }
}

/// Ordered table of requested ion series and their allowed neutral losses.
///
/// Order matters: generated batches are merged into the final ion list in
/// table order, which fixes the relative order of equal-position ions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IonSeriesConfig {
    pub series: Vec<(IonType, Vec<NeutralLoss>)>,
}

impl IonSeriesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, ion_type: IonType, losses: Vec<NeutralLoss>) -> Self {
        self.series.push((ion_type, losses));
        self
    }

    /// A commonly used default series table: precursor with H2O/NH3/CO2
    /// losses, b with H2O/NH3/CO, y with NH3/H2O, and plain
    /// immonium/a/c/z ions.
    pub fn standard() -> Self {
        Self::new()
            .with_series(
                IonType::Precursor,
                vec![
                    NeutralLoss::water(),
                    NeutralLoss::ammonia(),
                    NeutralLoss::carbon_dioxide(),
                ],
            )
            .with_series(IonType::Immonium, Vec::new())
            .with_series(
                IonType::B,
                vec![
                    NeutralLoss::water(),
                    NeutralLoss::ammonia(),
                    NeutralLoss::carbon_monoxide(),
                ],
            )
            .with_series(
                IonType::Y,
                vec![NeutralLoss::ammonia(), NeutralLoss::water()],
            )
            .with_series(IonType::A, Vec::new())
            .with_series(IonType::C, Vec::new())
            .with_series(IonType::Z, Vec::new())
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (IonType, &'a [NeutralLoss])> + 'a {
        self.series
            .iter()
            .map(|(ion_type, losses)| (*ion_type, losses.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
