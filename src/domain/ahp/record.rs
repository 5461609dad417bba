//! Model Record - Export/import shape of an AHP model.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::{debug, info};

use super::ranking::round_to;
use super::{
    AhpModel, Alternative, AuxData, ConsistencySummary, Criterion, CriterionKind, JudgmentTable,
    ModelOptions, RankedAlternative,
};
use crate::domain::foundation::{ModelId, Score, Timestamp};

/// Errors encoding or decoding a model record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Exported criterion with its weight rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: CriterionKind,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub weight: f64,
}

/// Exported alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRecord {
    pub name: String,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub data: AuxData,
}

/// Snapshot of a model: structure, weights, consistency, and rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub model_name: String,
    #[serde(default)]
    pub model_id: Option<ModelId>,
    pub timestamp: Timestamp,
    pub criteria: Vec<CriterionRecord>,
    pub alternatives: Vec<AlternativeRecord>,
    pub consistency: ConsistencySummary,
    #[serde(default)]
    pub rankings: Vec<RankedAlternative>,
}

impl ModelRecord {
    /// Encodes as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes from JSON.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes as YAML.
    pub fn to_yaml(&self) -> Result<String, RecordError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Decodes from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, RecordError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl AhpModel {
    /// Captures the model, stamped with the current time.
    pub fn export(&self) -> ModelRecord {
        let record = ModelRecord {
            model_name: self.name.clone(),
            model_id: Some(self.id),
            timestamp: Timestamp::now(),
            criteria: self
                .criteria
                .iter()
                .map(|c| CriterionRecord {
                    name: c.name.clone(),
                    description: c.description.clone(),
                    kind: c.kind,
                    unit: c.unit.clone(),
                    weight: round_to(c.weight, 4),
                })
                .collect(),
            alternatives: self
                .alternatives
                .iter()
                .map(|a| AlternativeRecord {
                    name: a.name.clone(),
                    scores: a.scores.iter().map(|(k, s)| (k.clone(), s.value())).collect(),
                    data: a.data.clone(),
                })
                .collect(),
            consistency: self.consistency,
            rankings: self.rank_alternatives(),
        };

        debug!(
            model = %self.name,
            timestamp = %record.timestamp.to_rfc3339(),
            criteria = record.criteria.len(),
            alternatives = record.alternatives.len(),
            "Exported model record"
        );
        record
    }

    /// Rebuilds a model from a record with default options.
    pub fn import(record: ModelRecord) -> Self {
        Self::import_with_options(record, ModelOptions::default())
    }

    /// Rebuilds a model from a record.
    ///
    /// Criteria, alternatives, and consistency are loaded verbatim without
    /// setup validation. Judgments are not part of a record, so the judgment
    /// table starts empty; deriving weights again resets them to equal.
    pub fn import_with_options(record: ModelRecord, options: ModelOptions) -> Self {
        let criteria: Vec<Criterion> = record
            .criteria
            .into_iter()
            .map(|c| Criterion {
                name: c.name,
                description: c.description,
                kind: c.kind,
                unit: c.unit,
                weight: c.weight,
            })
            .collect();

        let weights: HashMap<String, f64> = criteria
            .iter()
            .map(|c| (c.name.clone(), c.weight))
            .collect();

        let alternatives: Vec<Alternative> = record
            .alternatives
            .into_iter()
            .map(|a| Alternative {
                name: a.name,
                data: a.data,
                scores: a
                    .scores
                    .into_iter()
                    .map(|(k, v)| (k, Score::from_raw(v)))
                    .collect(),
            })
            .collect();

        info!(
            model = %record.model_name,
            criteria = criteria.len(),
            alternatives = alternatives.len(),
            "Imported model record"
        );

        Self {
            id: record.model_id.unwrap_or_default(),
            name: record.model_name,
            options,
            criteria,
            alternatives,
            judgments: JudgmentTable::new(),
            weights,
            consistency: record.consistency,
        }
    }
}
