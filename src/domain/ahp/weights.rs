//! Weight Deriver - Priority weights from a comparison matrix.

use serde::{Deserialize, Serialize};

use super::{ComparisonMatrix, ConsistencyCheck, ConsistencySummary, Criterion, JudgmentTable};

/// Derived weights (criteria order) plus the consistency of the judgments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDerivation {
    pub weights: Vec<f64>,
    pub consistency: ConsistencySummary,
}

/// Principal eigenvector approximation over a comparison matrix.
pub struct WeightDeriver;

impl WeightDeriver {
    /// Approximates the principal eigenvector.
    ///
    /// # Algorithm
    /// 1. s_j = Σ_i M[i][j]
    /// 2. N[i][j] = M[i][j] / s_j
    /// 3. w_i = (Σ_j N[i][j]) / n
    ///
    /// The result sums to 1 up to rounding and is not renormalized.
    pub fn priority_vector(matrix: &ComparisonMatrix) -> Vec<f64> {
        let n = matrix.size();
        if n == 0 {
            return Vec::new();
        }

        matrix
            .normalized()
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect()
    }

    /// Builds the matrix, derives weights, and checks consistency.
    pub fn derive(
        criteria: &[Criterion],
        judgments: &JudgmentTable,
        threshold: f64,
    ) -> WeightDerivation {
        let matrix = ComparisonMatrix::build(criteria, judgments);
        let weights = Self::priority_vector(&matrix);
        let consistency = ConsistencyCheck::evaluate(&matrix, &weights, threshold);

        WeightDerivation {
            weights,
            consistency,
        }
    }
}
