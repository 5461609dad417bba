//! Comparison Matrix - Square reciprocal matrix of pairwise intensities.

use serde::{Deserialize, Serialize};

use super::{Criterion, JudgmentTable};

/// An n x n pairwise comparison matrix with unit diagonal.
///
/// Row and column indices follow criteria insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Builds the matrix from criteria and judgments.
    ///
    /// For each i < j the judged intensity of i over j is read (1 when
    /// unjudged) and its reciprocal is written to (j, i).
    pub fn build(criteria: &[Criterion], judgments: &JudgmentTable) -> Self {
        let n = criteria.len();
        let mut values = vec![vec![1.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let intensity =
                    judgments.intensity_or_default(&criteria[i].name, &criteria[j].name);
                values[i][j] = intensity;
                values[j][i] = 1.0 / intensity;
            }
        }

        Self {
            labels: criteria.iter().map(|c| c.name.clone()).collect(),
            values,
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns true for a 0 x 0 matrix.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.size();
        (0..n)
            .map(|j| self.values.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Matrix with each entry divided by its column sum.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        let sums = self.column_sums();
        self.values
            .iter()
            .map(|row| row.iter().zip(&sums).map(|(v, s)| v / s).collect())
            .collect()
    }

    /// Product of the matrix with a weight vector.
    pub fn weighted_sums(&self, weights: &[f64]) -> Vec<f64> {
        self.values
            .iter()
            .map(|row| row.iter().zip(weights).map(|(m, w)| m * w).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::CriterionConfig;

    fn criteria(names: &[&str]) -> Vec<Criterion> {
        names
            .iter()
            .map(|n| Criterion::new(*n, CriterionConfig::new()))
            .collect()
    }

    #[test]
    fn empty_criteria_build_empty_matrix() {
        let m = ComparisonMatrix::build(&[], &JudgmentTable::new());
        assert!(m.is_empty());
        assert!(m.column_sums().is_empty());
    }

    #[test]
    fn diagonal_is_one_and_unjudged_default_to_one() {
        let m = ComparisonMatrix::build(&criteria(&["A", "B", "C"]), &JudgmentTable::new());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), Some(1.0));
            }
        }
    }

    #[test]
    fn judged_entries_are_reciprocal() {
        let mut judgments = JudgmentTable::new();
        judgments.set("A", "B", 3.0);
        judgments.set("C", "A", 5.0);

        let m = ComparisonMatrix::build(&criteria(&["A", "B", "C"]), &judgments);

        assert_eq!(m.get(0, 1), Some(3.0));
        assert!((m.get(1, 0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert!((m.get(0, 2).unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(m.get(2, 0), Some(5.0));
        assert_eq!(m.get(1, 2), Some(1.0));
    }

    #[test]
    fn labels_follow_criteria_order() {
        let m = ComparisonMatrix::build(&criteria(&["Z", "A"]), &JudgmentTable::new());
        assert_eq!(m.labels, vec!["Z".to_string(), "A".to_string()]);
    }

    #[test]
    fn normalized_columns_sum_to_one() {
        let mut judgments = JudgmentTable::new();
        judgments.set("A", "B", 3.0);
        judgments.set("A", "C", 5.0);
        judgments.set("B", "C", 2.0);

        let m = ComparisonMatrix::build(&criteria(&["A", "B", "C"]), &judgments);
        let n = m.normalized();

        for j in 0..3 {
            let col: f64 = n.iter().map(|row| row[j]).sum();
            assert!((col - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn weighted_sums_multiply_rows() {
        let mut judgments = JudgmentTable::new();
        judgments.set("A", "B", 2.0);

        let m = ComparisonMatrix::build(&criteria(&["A", "B"]), &judgments);
        let ws = m.weighted_sums(&[2.0 / 3.0, 1.0 / 3.0]);

        assert!((ws[0] - 4.0 / 3.0).abs() < 1e-12);
        assert!((ws[1] - 2.0 / 3.0).abs() < 1e-12);
    }
}
