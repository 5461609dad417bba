//! Criterion - A weighted dimension alternatives are scored on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Whether higher raw scores are desirable or undesirable.
///
/// Descriptive only: scoring never inverts cost criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    #[default]
    Benefit,
    Cost,
}

impl CriterionKind {
    /// Returns the lowercase name used in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::Benefit => "benefit",
            CriterionKind::Cost => "cost",
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CriterionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionKind::Benefit),
            "cost" => Ok(CriterionKind::Cost),
            other => Err(ValidationError::invalid_format(
                "kind",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}

/// Setup options for a new criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionConfig {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: CriterionKind,
    #[serde(default)]
    pub unit: String,
}

impl CriterionConfig {
    /// Creates a config with defaults (benefit kind, empty description and unit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the kind.
    pub fn kind(mut self, kind: CriterionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the unit.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// A decision criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub description: String,
    pub kind: CriterionKind,
    pub unit: String,
    /// Derived priority weight; 0 until weights are derived.
    pub weight: f64,
}

impl Criterion {
    /// Creates a criterion with zero weight.
    pub fn new(name: impl Into<String>, config: CriterionConfig) -> Self {
        Self {
            name: name.into(),
            description: config.description,
            kind: config.kind,
            unit: config.unit,
            weight: 0.0,
        }
    }

    /// Returns true if this is a cost criterion.
    pub fn is_cost(&self) -> bool {
        self.kind == CriterionKind::Cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_criterion_starts_with_zero_weight() {
        let c = Criterion::new("Price", CriterionConfig::new());
        assert_eq!(c.weight, 0.0);
        assert_eq!(c.kind, CriterionKind::Benefit);
        assert!(c.description.is_empty());
    }

    #[test]
    fn config_builder_sets_fields() {
        let c = Criterion::new(
            "Price",
            CriterionConfig::new()
                .description("Unit price")
                .kind(CriterionKind::Cost)
                .unit("USD"),
        );
        assert_eq!(c.description, "Unit price");
        assert_eq!(c.unit, "USD");
        assert!(c.is_cost());
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Cost".parse::<CriterionKind>().unwrap(), CriterionKind::Cost);
        assert_eq!(" benefit ".parse::<CriterionKind>().unwrap(), CriterionKind::Benefit);
    }

    #[test]
    fn kind_rejects_unknown_value() {
        let err = "neutral".parse::<CriterionKind>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CriterionKind::Cost).unwrap(), "\"cost\"");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: CriterionConfig = serde_json::from_str(r#"{"unit": "days"}"#).unwrap();
        assert_eq!(config.unit, "days");
        assert_eq!(config.kind, CriterionKind::Benefit);
    }
}
