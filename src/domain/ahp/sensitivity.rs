//! Sensitivity Analyzer - Ranking stability under a single-criterion weight sweep.

use serde::{Deserialize, Serialize};

use super::ranking::round_to;
use super::{Alternative, Criterion, ScoreAggregator};
use crate::domain::foundation::AhpError;

/// Default maximum weight perturbation (±5 percentage points).
pub const DEFAULT_SENSITIVITY_DELTA: f64 = 0.05;

/// Samples on each side of zero; the sweep has `2 * SENSITIVITY_STEPS + 1` points.
pub const SENSITIVITY_STEPS: usize = 5;

/// One sample of the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Perturbation applied to the target weight before renormalization.
    pub variation: f64,
    /// The perturbation as a percentage string, e.g. "-5.0%".
    pub variation_percent: String,
    /// Alternative names in rank order under the perturbed weights.
    pub ranking: Vec<String>,
}

/// Result of sweeping one criterion's weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub criterion: String,
    /// Pre-perturbation weight rounded to 4 decimals.
    pub original_weight: f64,
    pub points: Vec<SensitivityPoint>,
}

impl SensitivityReport {
    /// Ranking at zero perturbation.
    pub fn baseline(&self) -> Option<&SensitivityPoint> {
        self.points.iter().find(|p| p.variation == 0.0)
    }

    /// Returns true if every sample produces the same ranking.
    pub fn is_stable(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[0].ranking == pair[1].ranking)
    }

    /// Samples whose ranking differs from the baseline.
    pub fn rank_changes(&self) -> Vec<&SensitivityPoint> {
        let Some(baseline) = self.baseline() else {
            return Vec::new();
        };
        self.points
            .iter()
            .filter(|p| p.ranking != baseline.ranking)
            .collect()
    }
}

/// Perturbation analysis over stored weights.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Sweeps the target weight over [-delta, +delta] in steps of delta / 5.
    ///
    /// For each sample the target weight becomes max(0, w + v), other weights
    /// are unchanged, and all are divided by their new sum. Alternatives are
    /// re-ranked with a stable sort. Stored weights are never modified.
    ///
    /// # Errors
    /// `AhpError::NotFound` if `target` is not a criterion name.
    pub fn analyze(
        criteria: &[Criterion],
        alternatives: &[Alternative],
        target: &str,
        delta: f64,
    ) -> Result<SensitivityReport, AhpError> {
        let target_index = criteria
            .iter()
            .position(|c| c.name == target)
            .ok_or_else(|| AhpError::criterion_not_found(target))?;

        let original: Vec<f64> = criteria.iter().map(|c| c.weight).collect();
        let steps = SENSITIVITY_STEPS as f64;

        let points = (0..=2 * SENSITIVITY_STEPS)
            .map(|i| {
                let variation = delta * (i as f64 - steps) / steps;
                let weights = Self::perturbed_weights(&original, target_index, variation);

                SensitivityPoint {
                    variation,
                    variation_percent: format_variation(variation),
                    ranking: ScoreAggregator::rank_names(alternatives, criteria, &weights),
                }
            })
            .collect();

        Ok(SensitivityReport {
            criterion: target.to_string(),
            original_weight: round_to(original[target_index], 4),
            points,
        })
    }

    /// Applies the perturbation to one weight and renormalizes the vector.
    ///
    /// A zero sum leaves the working weights as they are. Zero variation
    /// returns the stored weights unchanged, so the baseline sample ranks
    /// exactly like [`ScoreAggregator::rank`].
    pub fn perturbed_weights(original: &[f64], target_index: usize, variation: f64) -> Vec<f64> {
        let mut weights = original.to_vec();
        if variation == 0.0 {
            return weights;
        }
        if let Some(w) = weights.get_mut(target_index) {
            *w = (*w + variation).max(0.0);
        }

        let total: f64 = weights.iter().sum();
        if total > 0.0 {
            for w in &mut weights {
                *w /= total;
            }
        }
        weights
    }
}

fn format_variation(variation: f64) -> String {
    let percent = variation * 100.0;
    // Avoid "-0.0%" for values that round to zero.
    let percent = if percent.abs() < 0.05 { 0.0 } else { percent };
    format!("{:.1}%", percent)
}
