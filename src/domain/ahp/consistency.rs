//! Consistency Check - How far pairwise judgments deviate from transitivity.

use serde::{Deserialize, Serialize};

use super::ComparisonMatrix;

/// Random index constants for matrices of size 1 through 15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.56, 1.57, 1.59, 1.60,
];

/// Conventional acceptability threshold for the consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Returns RI(n), or None when n is outside the table.
pub fn random_index(n: usize) -> Option<f64> {
    n.checked_sub(1).and_then(|i| RANDOM_INDEX.get(i)).copied()
}

/// Result of a consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencySummary {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub is_consistent: bool,
}

impl ConsistencySummary {
    /// Summary of a trivially consistent (or not yet evaluated) model.
    pub fn trivial(n: usize) -> Self {
        Self {
            lambda_max: n as f64,
            consistency_index: 0.0,
            consistency_ratio: 0.0,
            is_consistent: true,
        }
    }
}

impl Default for ConsistencySummary {
    fn default() -> Self {
        Self::trivial(0)
    }
}

/// Consistency index/ratio computation.
pub struct ConsistencyCheck;

impl ConsistencyCheck {
    /// Evaluates the matrix against its derived weights.
    ///
    /// # Algorithm
    /// - ws = M · w, λ_i = ws_i / w_i, λ_max = mean(λ_i)
    /// - CI = (λ_max - n) / (n - 1), forced to 0 for n <= 2
    /// - CR = CI / RI(n), 0 when RI(n) is 0 or n is outside the table
    pub fn evaluate(
        matrix: &ComparisonMatrix,
        weights: &[f64],
        threshold: f64,
    ) -> ConsistencySummary {
        let n = matrix.size();
        if n == 0 {
            return ConsistencySummary::trivial(0);
        }

        let weighted = matrix.weighted_sums(weights);
        let lambda_max = weighted
            .iter()
            .zip(weights)
            .map(|(ws, w)| ws / w)
            .sum::<f64>()
            / n as f64;

        let consistency_index = if n <= 2 {
            0.0
        } else {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        };

        let consistency_ratio = match random_index(n) {
            Some(ri) if ri > 0.0 => consistency_index / ri,
            _ => 0.0,
        };

        ConsistencySummary {
            lambda_max,
            consistency_index,
            consistency_ratio,
            is_consistent: consistency_ratio <= threshold,
        }
    }
}
