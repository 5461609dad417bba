//! Intensity value object for pairwise judgments (Saaty 1-9 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Fundamental scale of absolute numbers used to state how strongly one
/// criterion is preferred over another.
///
/// The reciprocal judgment (B over A) is expressed by passing `1.0 / value`,
/// which the judgment table does automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Intensity {
    #[default]
    Equal = 1,
    EqualToModerate = 2,
    Moderate = 3,
    ModerateToStrong = 4,
    Strong = 5,
    StrongToVeryStrong = 6,
    VeryStrong = 7,
    VeryStrongToExtreme = 8,
    Extreme = 9,
}

impl Intensity {
    /// Creates an Intensity from an integer, returning error if out of range.
    pub fn try_from_value(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Intensity::Equal),
            2 => Ok(Intensity::EqualToModerate),
            3 => Ok(Intensity::Moderate),
            4 => Ok(Intensity::ModerateToStrong),
            5 => Ok(Intensity::Strong),
            6 => Ok(Intensity::StrongToVeryStrong),
            7 => Ok(Intensity::VeryStrong),
            8 => Ok(Intensity::VeryStrongToExtreme),
            9 => Ok(Intensity::Extreme),
            _ => Err(ValidationError::out_of_range(
                "intensity",
                1.0,
                9.0,
                f64::from(value),
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the reciprocal intensity (B over A).
    pub fn reciprocal(&self) -> f64 {
        1.0 / f64::from(self.value())
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Equal => "Equal importance",
            Intensity::EqualToModerate => "Equal to moderate",
            Intensity::Moderate => "Moderate importance",
            Intensity::ModerateToStrong => "Moderate to strong",
            Intensity::Strong => "Strong importance",
            Intensity::StrongToVeryStrong => "Strong to very strong",
            Intensity::VeryStrong => "Very strong importance",
            Intensity::VeryStrongToExtreme => "Very strong to extreme",
            Intensity::Extreme => "Extreme importance",
        }
    }
}

impl From<Intensity> for f64 {
    fn from(intensity: Intensity) -> Self {
        f64::from(intensity.value())
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
