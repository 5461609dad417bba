//! Analysis defaults configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{ModelOptions, CONSISTENCY_THRESHOLD, DEFAULT_SENSITIVITY_DELTA};

/// Tunables applied to every model built from this configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Largest consistency ratio still accepted as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Default maximum weight perturbation for sensitivity sweeps
    #[serde(default = "default_sensitivity_delta")]
    pub sensitivity_delta: f64,
}

impl AnalysisConfig {
    /// Options for constructing an [`AhpModel`](crate::domain::ahp::AhpModel)
    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            consistency_threshold: self.consistency_threshold,
            sensitivity_delta: self.sensitivity_delta,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.consistency_threshold;
        if !(t > 0.0 && t < 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(t));
        }
        let d = self.sensitivity_delta;
        if !(d > 0.0 && d <= 1.0) {
            return Err(ValidationError::InvalidSensitivityDelta(d));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            sensitivity_delta: default_sensitivity_delta(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_sensitivity_delta() -> f64 {
    DEFAULT_SENSITIVITY_DELTA
}
