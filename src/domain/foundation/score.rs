//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A criterion score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0.0);

    /// Highest possible score.
    pub const MAX: Self = Self(100.0);

    /// Creates a new Score, clamping to the valid range.
    ///
    /// NaN is treated as the lowest score.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Wraps a value without clamping. Used when loading stored records.
    pub(crate) fn from_raw(value: f64) -> Self {
        Self(value)
    }

    /// Returns true if `value` lies outside the valid range and would be clamped.
    pub fn would_clamp(value: f64) -> bool {
        !(Self::MIN.0..=Self::MAX.0).contains(&value)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
