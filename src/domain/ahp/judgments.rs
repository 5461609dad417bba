//! Judgment Table - Reciprocal pairwise intensities between criteria.

use std::collections::HashMap;

/// Ordered pair of criterion names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub first: String,
    pub second: String,
}

impl PairKey {
    /// Creates a key for "first compared to second".
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Returns the key with the pair reversed.
    pub fn reversed(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }
}

/// Pairwise judgments, reciprocal by construction.
///
/// Setting (A, B) = v also stores (B, A) = 1/v. Self-pairs are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JudgmentTable {
    entries: HashMap<PairKey, f64>,
}

impl JudgmentTable {
    /// Creates an empty judgment table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `first` is `intensity` times as important as `second`.
    ///
    /// Returns false for self-pairs, which are implicitly 1 and never stored.
    /// Intensity is not range-checked; 0 yields an infinite reciprocal.
    pub fn set(&mut self, first: &str, second: &str, intensity: f64) -> bool {
        if first == second {
            return false;
        }
        let key = PairKey::new(first, second);
        self.entries.insert(key.reversed(), 1.0 / intensity);
        self.entries.insert(key, intensity);
        true
    }

    /// Returns the stored intensity of `first` over `second`, if judged.
    pub fn get(&self, first: &str, second: &str) -> Option<f64> {
        if first == second {
            return Some(1.0);
        }
        self.entries.get(&PairKey::new(first, second)).copied()
    }

    /// Returns the intensity, defaulting unjudged pairs to 1 (indifference).
    pub fn intensity_or_default(&self, first: &str, second: &str) -> f64 {
        self.get(first, second).unwrap_or(1.0)
    }

    /// Number of stored directed entries (two per judged pair).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no pair has been judged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all stored directed entries.
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, f64)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }
}
