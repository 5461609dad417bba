//! AHP Module - Analytic Hierarchy Process engine.
//!
//! Derives criterion weights from pairwise judgments, checks their
//! consistency, ranks alternatives by weighted score, and measures how
//! rankings react to weight perturbations.
//!
//! # Components
//!
//! - `AhpModel` - Decision problem state and the setup/analysis surface
//! - `JudgmentTable` / `ComparisonMatrix` - Reciprocal pairwise intensities
//! - `WeightDeriver` - Normalized-column-average eigenvector approximation
//! - `ConsistencyCheck` - Consistency index and ratio (Saaty random index)
//! - `ScoreAggregator` - Weighted-sum scoring with stable ranking
//! - `SensitivityAnalyzer` - Single-criterion weight sweep
//! - `ModelRecord` - Export/import shape (JSON, YAML)
//!
//! # Design Philosophy
//!
//! The analyzers are stateless and pure: they take criteria, alternatives
//! and weights and return computed results. `AhpModel` owns the state and
//! is the only type that mutates it.

mod alternative;
mod consistency;
mod criterion;
mod judgments;
mod matrix;
mod model;
mod ranking;
mod record;
mod sensitivity;
mod weights;

pub use alternative::{Alternative, AuxData};
pub use consistency::{
    random_index, ConsistencyCheck, ConsistencySummary, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use criterion::{Criterion, CriterionConfig, CriterionKind};
pub use judgments::{JudgmentTable, PairKey};
pub use matrix::ComparisonMatrix;
pub use model::{AhpModel, ModelOptions};
pub use ranking::{round_to, RankedAlternative, ScoreAggregator};
pub use record::{AlternativeRecord, CriterionRecord, ModelRecord, RecordError};
pub use sensitivity::{
    SensitivityAnalyzer, SensitivityPoint, SensitivityReport, DEFAULT_SENSITIVITY_DELTA,
    SENSITIVITY_STEPS,
};
pub use weights::{WeightDerivation, WeightDeriver};
