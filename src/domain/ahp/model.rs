//! AHP Model - Decision problem state and the operations over it.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::{
    Alternative, AuxData, ComparisonMatrix, ConsistencySummary, Criterion, CriterionConfig,
    JudgmentTable, RankedAlternative, ScoreAggregator, SensitivityAnalyzer, SensitivityReport,
    WeightDerivation, WeightDeriver, CONSISTENCY_THRESHOLD, DEFAULT_SENSITIVITY_DELTA,
};
use crate::domain::foundation::{AhpError, ModelId, Score};

/// Analysis tunables carried by a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOptions {
    /// Maximum consistency ratio still considered consistent.
    pub consistency_threshold: f64,
    /// Delta used by [`AhpModel::sensitivity_default`].
    pub sensitivity_delta: f64,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            consistency_threshold: CONSISTENCY_THRESHOLD,
            sensitivity_delta: DEFAULT_SENSITIVITY_DELTA,
        }
    }
}

/// In-memory state of one decision problem.
///
/// Populated during setup (criteria, alternatives, judgments, scores), then
/// analyzed. Criteria and alternatives are append-only and keep insertion
/// order; criteria order fixes the comparison matrix indices.
#[derive(Debug, Clone)]
pub struct AhpModel {
    pub(super) id: ModelId,
    pub(super) name: String,
    pub(super) options: ModelOptions,
    pub(super) criteria: Vec<Criterion>,
    pub(super) alternatives: Vec<Alternative>,
    pub(super) judgments: JudgmentTable,
    pub(super) weights: HashMap<String, f64>,
    pub(super) consistency: ConsistencySummary,
}

impl AhpModel {
    /// Creates an empty model with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, ModelOptions::default())
    }

    /// Creates an empty model with the given options.
    pub fn with_options(name: impl Into<String>, options: ModelOptions) -> Self {
        Self {
            id: ModelId::new(),
            name: name.into(),
            options,
            criteria: Vec::new(),
            alternatives: Vec::new(),
            judgments: JudgmentTable::new(),
            weights: HashMap::new(),
            consistency: ConsistencySummary::default(),
        }
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ModelOptions {
        &self.options
    }

    /// Criteria in insertion order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Alternatives in insertion order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn judgments(&self) -> &JudgmentTable {
        &self.judgments
    }

    /// Consistency as of the last weight derivation (or import).
    pub fn consistency(&self) -> &ConsistencySummary {
        &self.consistency
    }

    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    pub fn alternative(&self, name: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.name == name)
    }

    /// Derived weight of a criterion; None before derivation.
    pub fn weight_of(&self, criterion: &str) -> Option<f64> {
        self.weights.get(criterion).copied()
    }

    /// Intensity of `first` over `second` if judged.
    pub fn judgment(&self, first: &str, second: &str) -> Option<f64> {
        self.judgments.get(first, second)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a criterion with zero weight.
    ///
    /// A name that already exists returns the existing criterion unchanged.
    pub fn add_criterion(
        &mut self,
        name: impl Into<String>,
        config: CriterionConfig,
    ) -> &Criterion {
        let name = name.into();
        if let Some(idx) = self.criteria.iter().position(|c| c.name == name) {
            warn!(
                model = %self.name,
                criterion = %name,
                "Criterion already exists; keeping original"
            );
            return &self.criteria[idx];
        }

        debug!(model = %self.name, criterion = %name, kind = %config.kind, "Added criterion");
        self.criteria.push(Criterion::new(name, config));
        &self.criteria[self.criteria.len() - 1]
    }

    /// Appends an alternative with no scores.
    ///
    /// A name that already exists returns the existing alternative unchanged.
    pub fn add_alternative(&mut self, name: impl Into<String>, data: AuxData) -> &Alternative {
        let name = name.into();
        if let Some(idx) = self.alternatives.iter().position(|a| a.name == name) {
            warn!(
                model = %self.name,
                alternative = %name,
                "Alternative already exists; keeping original"
            );
            return &self.alternatives[idx];
        }

        debug!(model = %self.name, alternative = %name, "Added alternative");
        self.alternatives.push(Alternative::new(name, data));
        &self.alternatives[self.alternatives.len() - 1]
    }

    /// Records that `first` is `intensity` times as important as `second`,
    /// and the reciprocal judgment.
    ///
    /// Intensity is not validated; callers supply values in the 1/9..9 range.
    pub fn set_pairwise_comparison(&mut self, first: &str, second: &str, intensity: f64) {
        if self.judgments.set(first, second, intensity) {
            debug!(model = %self.name, first, second, intensity, "Set pairwise comparison");
        } else {
            debug!(model = %self.name, criterion = first, "Ignored self comparison");
        }
    }

    /// Sets an alternative's score for a criterion, clamped into [0, 100].
    ///
    /// The criterion name is not checked; scores for unknown criteria are
    /// stored but never weighted.
    ///
    /// # Errors
    /// `AhpError::NotFound` if the alternative does not exist. The model is
    /// left unchanged.
    pub fn score_alternative(
        &mut self,
        alternative: &str,
        criterion: &str,
        score: f64,
    ) -> Result<(), AhpError> {
        let model = &self.name;
        let alt = self
            .alternatives
            .iter_mut()
            .find(|a| a.name == alternative)
            .ok_or_else(|| AhpError::alternative_not_found(alternative))?;

        if Score::would_clamp(score) {
            debug!(model = %model, alternative, criterion, score, "Clamped score into [0, 100]");
        }
        alt.set_score(criterion, score);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────────────────

    /// Builds the current comparison matrix.
    pub fn comparison_matrix(&self) -> ComparisonMatrix {
        ComparisonMatrix::build(&self.criteria, &self.judgments)
    }

    /// Derives criterion weights and checks consistency.
    ///
    /// Overwrites each criterion's weight, the weight map, and the stored
    /// consistency. Inconsistency is reported, not fatal.
    pub fn derive_weights(&mut self) -> WeightDerivation {
        let result = WeightDeriver::derive(
            &self.criteria,
            &self.judgments,
            self.options.consistency_threshold,
        );

        self.weights.clear();
        for (criterion, weight) in self.criteria.iter_mut().zip(&result.weights) {
            criterion.weight = *weight;
            self.weights.insert(criterion.name.clone(), *weight);
        }
        self.consistency = result.consistency;

        info!(
            model = %self.name,
            criteria = self.criteria.len(),
            lambda_max = result.consistency.lambda_max,
            consistency_ratio = result.consistency.consistency_ratio,
            "Derived criterion weights"
        );
        if !result.consistency.is_consistent {
            warn!(
                model = %self.name,
                consistency_ratio = result.consistency.consistency_ratio,
                threshold = self.options.consistency_threshold,
                "Pairwise judgments are inconsistent"
            );
        }

        result
    }

    /// Ranks alternatives by weighted score using the stored weights.
    ///
    /// Before weights are derived every score is 0.
    pub fn rank_alternatives(&self) -> Vec<RankedAlternative> {
        ScoreAggregator::rank(&self.alternatives, &self.criteria)
    }

    /// Sweeps one criterion's weight over [-delta, +delta].
    ///
    /// # Errors
    /// `AhpError::NotFound` if the criterion does not exist.
    pub fn sensitivity(&self, criterion: &str, delta: f64) -> Result<SensitivityReport, AhpError> {
        let report =
            SensitivityAnalyzer::analyze(&self.criteria, &self.alternatives, criterion, delta)?;
        debug!(
            model = %self.name,
            criterion,
            delta,
            stable = report.is_stable(),
            "Completed sensitivity analysis"
        );
        Ok(report)
    }

    /// Sensitivity sweep using the model's configured delta.
    pub fn sensitivity_default(&self, criterion: &str) -> Result<SensitivityReport, AhpError> {
        self.sensitivity(criterion, self.options.sensitivity_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn three_criteria_model() -> AhpModel {
        let mut model = AhpModel::new("Supplier selection");
        model.add_criterion("A", CriterionConfig::new());
        model.add_criterion("B", CriterionConfig::new());
        model.add_criterion("C", CriterionConfig::new());
        model.set_pairwise_comparison("A", "B", 3.0);
        model.set_pairwise_comparison("A", "C", 5.0);
        model.set_pairwise_comparison("B", "C", 2.0);
        model
    }

    #[test]
    fn new_model_is_empty() {
        let model = AhpModel::new("Empty");
        assert_eq!(model.name(), "Empty");
        assert!(model.criteria().is_empty());
        assert!(model.alternatives().is_empty());
        assert!(model.judgments().is_empty());
        assert_eq!(model.options(), &ModelOptions::default());
    }

    #[test]
    fn add_criterion_keeps_order_and_zero_weight() {
        let model = three_criteria_model();
        let names: Vec<_> = model.criteria().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(model.criteria().iter().all(|c| c.weight == 0.0));
        assert_eq!(model.weight_of("A"), None);
    }

    #[test]
    fn duplicate_criterion_returns_existing() {
        let mut model = AhpModel::new("m");
        model.add_criterion("A", CriterionConfig::new().unit("USD"));
        let existing = model.add_criterion("A", CriterionConfig::new().unit("EUR"));

        assert_eq!(existing.unit, "USD");
        assert_eq!(model.criteria().len(), 1);
    }

    #[test]
    fn duplicate_alternative_returns_existing() {
        let mut model = AhpModel::new("m");
        let mut data = AuxData::new();
        data.insert("region".to_string(), json!("EU"));
        model.add_alternative("X", data);
        let existing = model.add_alternative("X", AuxData::new());

        assert_eq!(existing.data["region"], json!("EU"));
        assert_eq!(model.alternatives().len(), 1);
    }

    #[test]
    fn pairwise_comparison_is_reciprocal() {
        let model = three_criteria_model();
        assert_eq!(model.judgment("A", "B"), Some(3.0));
        assert!((model.judgment("B", "A").unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(model.judgment("A", "A"), Some(1.0));
    }

    #[test]
    fn score_alternative_clamps() {
        let mut model = three_criteria_model();
        model.add_alternative("X", AuxData::new());

        model.score_alternative("X", "A", 150.0).unwrap();
        model.score_alternative("X", "B", -20.0).unwrap();

        let alt = model.alternative("X").unwrap();
        assert_eq!(alt.score_for("A"), 100.0);
        assert_eq!(alt.score_for("B"), 0.0);
    }

    #[test]
    fn score_unknown_alternative_fails_without_change() {
        let mut model = three_criteria_model();
        model.add_alternative("X", AuxData::new());
        model.score_alternative("X", "A", 10.0).unwrap();
        let before = model.alternatives().to_vec();

        let err = model.score_alternative("Ghost", "A", 50.0).unwrap_err();

        assert_eq!(err, AhpError::alternative_not_found("Ghost"));
        assert_eq!(model.alternatives(), before.as_slice());
    }

    #[test]
    fn derive_weights_updates_criteria_and_map() {
        let mut model = three_criteria_model();
        let result = model.derive_weights();

        for (criterion, weight) in model.criteria().iter().zip(&result.weights) {
            assert_eq!(criterion.weight, *weight);
            assert_eq!(model.weight_of(&criterion.name), Some(*weight));
        }
        assert_eq!(model.consistency(), &result.consistency);
        assert!(result.consistency.is_consistent);
    }

    #[test]
    fn derive_weights_uses_configured_threshold() {
        let options = ModelOptions {
            consistency_threshold: 0.001,
            ..ModelOptions::default()
        };
        let mut model = AhpModel::with_options("strict", options);
        model.add_criterion("A", CriterionConfig::new());
        model.add_criterion("B", CriterionConfig::new());
        model.add_criterion("C", CriterionConfig::new());
        model.set_pairwise_comparison("A", "B", 3.0);
        model.set_pairwise_comparison("A", "C", 5.0);
        model.set_pairwise_comparison("B", "C", 2.0);

        assert!(!model.derive_weights().consistency.is_consistent);
    }

    #[test]
    fn ranking_before_derivation_is_all_zero() {
        let mut model = three_criteria_model();
        model.add_alternative("X", AuxData::new());
        model.score_alternative("X", "A", 80.0).unwrap();

        let ranked = model.rank_alternatives();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].overall_score, 0.0);
    }

    #[test]
    fn sensitivity_default_uses_configured_delta() {
        let options = ModelOptions {
            sensitivity_delta: 0.1,
            ..ModelOptions::default()
        };
        let mut model = AhpModel::with_options("m", options);
        model.add_criterion("A", CriterionConfig::new());
        model.add_criterion("B", CriterionConfig::new());
        model.derive_weights();

        let report = model.sensitivity_default("A").unwrap();
        assert_eq!(report.points.first().unwrap().variation_percent, "-10.0%");
        assert_eq!(report.points.last().unwrap().variation_percent, "10.0%");
    }

    #[test]
    fn sensitivity_does_not_mutate_weights() {
        let mut model = three_criteria_model();
        model.derive_weights();
        let before = model.criteria().to_vec();

        model.sensitivity("A", 0.05).unwrap();

        assert_eq!(model.criteria(), before.as_slice());
    }

    #[test]
    fn sensitivity_unknown_criterion_fails() {
        let model = three_criteria_model();
        assert!(model.sensitivity("Ghost", 0.05).unwrap_err().is_not_found());
    }
}
