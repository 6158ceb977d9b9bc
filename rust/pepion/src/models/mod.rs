use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::ConfigError;

mod ion;
mod ion_type;
mod modification;
mod neutral_loss;

pub use ion::Ion;
pub use ion_type::{
    IonType,
    MassArrayKind,
};
pub use modification::{
    ModLocation,
    ModSite,
};
pub(crate) use modification::site_deltas;
pub use neutral_loss::{
    IonSeriesConfig,
    NeutralLoss,
};

/// Which convention is used for residue masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassMode {
    Monoisotopic,
    Average,
}

impl TryFrom<u8> for MassMode {
    type Error = ConfigError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Monoisotopic),
            1 => Ok(Self::Average),
            _ => Err(ConfigError::UnknownMassMode { id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_mode_numeric_ids() {
        assert_eq!(MassMode::try_from(0), Ok(MassMode::Monoisotopic));
        assert_eq!(MassMode::try_from(1), Ok(MassMode::Average));
        assert_eq!(
            MassMode::try_from(2),
            Err(ConfigError::UnknownMassMode { id: 2 })
        );
    }
}
