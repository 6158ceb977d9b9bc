use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::ConfigError;

/// The closed set of supported ion types.
///
/// The discriminants match the identifiers used by host callers (the `x`
/// series, a later addition, takes the next free id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum IonType {
    Precursor = 1,
    Immonium = 2,
    B = 3,
    Y = 4,
    A = 5,
    C = 6,
    Z = 7,
    X = 8,
}

/// Which of the caller-supplied mass arrays an ion type consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassArrayKind {
    /// Cumulative masses anchored at the N-terminus (a/b/c series).
    NTerminal,
    /// Cumulative masses anchored at the C-terminus (x/y/z series).
    CTerminal,
    /// One mass per residue (immonium).
    Residue,
    /// The single precursor mass.
    Precursor,
}

impl IonType {
    pub fn mass_array(self) -> MassArrayKind {
        match self {
            Self::B | Self::A | Self::C => MassArrayKind::NTerminal,
            Self::Y | Self::Z | Self::X => MassArrayKind::CTerminal,
            Self::Immonium => MassArrayKind::Residue,
            Self::Precursor => MassArrayKind::Precursor,
        }
    }

    /// Single-character series marker used in sequential ion labels.
    pub(crate) fn series_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::Immonium | Self::Precursor => {
                unreachable!("only sequential ion types carry a series character")
            }
        }
    }
}

impl TryFrom<u8> for IonType {
    type Error = ConfigError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Precursor),
            2 => Ok(Self::Immonium),
            3 => Ok(Self::B),
            4 => Ok(Self::Y),
            5 => Ok(Self::A),
            6 => Ok(Self::C),
            7 => Ok(Self::Z),
            8 => Ok(Self::X),
            _ => Err(ConfigError::UnknownIonType { id }),
        }
    }
}

impl FromStr for IonType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precursor" | "M" => Ok(Self::Precursor),
            "imm" | "immonium" => Ok(Self::Immonium),
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(ConfigError::UnknownIonSeries {
                name: s.to_string(),
            }),
        }
    }
}

impl Display for IonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Precursor => write!(f, "precursor"),
            Self::Immonium => write!(f, "imm"),
            other => write!(f, "{}", other.series_char()),
        }
    }
}
