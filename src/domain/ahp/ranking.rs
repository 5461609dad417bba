//! Score Aggregator - Weighted-sum scoring and stable ranking of alternatives.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{Alternative, AuxData, Criterion};

/// An alternative with its aggregated score and the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub name: String,
    /// Weighted sum rounded to 2 decimals.
    pub overall_score: f64,
    /// Score per criterion (0 when unscored).
    pub scores: BTreeMap<String, f64>,
    /// Weight per criterion rounded to 4 decimals.
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub data: AuxData,
}

/// Rounds `value` to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Weighted-sum aggregation over criteria.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Computes Σ_c score(c) · weight(c).
    ///
    /// `weights` is parallel to `criteria`. Missing scores count as 0.
    pub fn overall_score(
        alternative: &Alternative,
        criteria: &[Criterion],
        weights: &[f64],
    ) -> f64 {
        criteria
            .iter()
            .zip(weights)
            .map(|(c, w)| alternative.score_for(&c.name) * w)
            .sum()
    }

    /// Scores every alternative and sorts descending.
    ///
    /// The sort is stable: equal scores keep insertion order.
    pub fn sorted_scores<'a>(
        alternatives: &'a [Alternative],
        criteria: &[Criterion],
        weights: &[f64],
    ) -> Vec<(&'a Alternative, f64)> {
        let mut scored: Vec<_> = alternatives
            .iter()
            .map(|alt| (alt, Self::overall_score(alt, criteria, weights)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored
    }

    /// Returns alternative names in rank order.
    pub fn rank_names(
        alternatives: &[Alternative],
        criteria: &[Criterion],
        weights: &[f64],
    ) -> Vec<String> {
        Self::sorted_scores(alternatives, criteria, weights)
            .into_iter()
            .map(|(alt, _)| alt.name.clone())
            .collect()
    }

    /// Ranks alternatives using the weights stored on each criterion.
    pub fn rank(alternatives: &[Alternative], criteria: &[Criterion]) -> Vec<RankedAlternative> {
        let weights: Vec<f64> = criteria.iter().map(|c| c.weight).collect();
        let weight_snapshot: BTreeMap<String, f64> = criteria
            .iter()
            .map(|c| (c.name.clone(), round_to(c.weight, 4)))
            .collect();

        Self::sorted_scores(alternatives, criteria, &weights)
            .into_iter()
            .map(|(alt, score)| RankedAlternative {
                name: alt.name.clone(),
                overall_score: round_to(score, 2),
                scores: criteria
                    .iter()
                    .map(|c| (c.name.clone(), alt.score_for(&c.name)))
                    .collect(),
                weights: weight_snapshot.clone(),
                data: alt.data.clone(),
            })
            .collect()
    }
}
