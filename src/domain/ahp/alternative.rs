//! Alternative - A candidate being ranked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Score;

/// Opaque key-value payload carried alongside an alternative.
pub type AuxData = BTreeMap<String, serde_json::Value>;

/// A decision alternative with sparse per-criterion scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    #[serde(default)]
    pub data: AuxData,
    /// Scores keyed by criterion name.
    #[serde(default)]
    pub scores: BTreeMap<String, Score>,
}

impl Alternative {
    /// Creates an alternative with no scores.
    pub fn new(name: impl Into<String>, data: AuxData) -> Self {
        Self {
            name: name.into(),
            data,
            scores: BTreeMap::new(),
        }
    }

    /// Returns the score for a criterion, 0 when unscored.
    pub fn score_for(&self, criterion: &str) -> f64 {
        self.scores.get(criterion).map(Score::value).unwrap_or(0.0)
    }

    /// Sets a score, clamping it into [0, 100].
    pub fn set_score(&mut self, criterion: impl Into<String>, score: f64) -> Score {
        let score = Score::new(score);
        self.scores.insert(criterion.into(), score);
        score
    }
}
