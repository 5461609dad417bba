//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! (and optionally a file) using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `AHP_ENGINE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::{init_tracing, AhpConfig};
//! use ahp_engine::domain::ahp::AhpModel;
//!
//! let config = AhpConfig::load().expect("Failed to load configuration");
//! init_tracing(&config.logging);
//!
//! let model = AhpModel::with_options("Supplier selection", config.model_options());
//! ```

mod analysis;
mod error;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

use crate::domain::ahp::ModelOptions;

const ENV_PREFIX: &str = "AHP_ENGINE";
const ENV_SEPARATOR: &str = "__";

/// Root engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AhpConfig {
    /// Analysis defaults (consistency threshold, sensitivity delta)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AhpConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_ENGINE__ANALYSIS__CONSISTENCY_THRESHOLD=0.1`
    ///   -> `analysis.consistency_threshold = 0.1`
    /// - `AHP_ENGINE__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if values cannot be parsed into expected
    /// types, or `ConfigError::ValidationFailed` if a parsed value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format (TOML, YAML, JSON) is taken from the file extension. The merged
    /// result is validated like [`AhpConfig::load`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Options for constructing a model from this configuration
    pub fn model_options(&self) -> ModelOptions {
        self.analysis.model_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AHP_ENGINE__ANALYSIS__CONSISTENCY_THRESHOLD");
        env::remove_var("AHP_ENGINE__ANALYSIS__SENSITIVITY_DELTA");
        env::remove_var("AHP_ENGINE__LOGGING__LEVEL");
        env::remove_var("AHP_ENGINE__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AhpConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis.consistency_threshold, 0.10);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ENGINE__ANALYSIS__CONSISTENCY_THRESHOLD", "0.2");
        env::set_var("AHP_ENGINE__LOGGING__FORMAT", "json");
        let result = AhpConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.consistency_threshold, 0.2);
        assert_eq!(config.analysis.sensitivity_delta, 0.05);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.model_options().consistency_threshold, 0.2);
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[analysis]\nsensitivity_delta = 0.1\n\n[logging]\nlevel = \"warn\""
        )
        .unwrap();

        let config = AhpConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.analysis.sensitivity_delta, 0.1);
        assert_eq!(config.analysis.consistency_threshold, 0.10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analysis]\nconsistency_threshold = 0.08").unwrap();

        env::set_var("AHP_ENGINE__ANALYSIS__CONSISTENCY_THRESHOLD", "0.12");
        let result = AhpConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().analysis.consistency_threshold, 0.12);
    }

    #[test]
    fn test_missing_file_is_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AhpConfig::load_from_file("/nonexistent/ahp-engine.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_rejects_out_of_range_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ENGINE__ANALYSIS__CONSISTENCY_THRESHOLD", "1.5");
        let result = AhpConfig::load();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(
                ValidationError::InvalidConsistencyThreshold(t)
            )) if t == 1.5
        ));
    }

    #[test]
    fn test_load_from_file_rejects_out_of_range_delta() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analysis]\nsensitivity_delta = 2.0").unwrap();

        let result = AhpConfig::load_from_file(file.path());
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidSensitivityDelta(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AhpConfig::default();
        config.analysis.sensitivity_delta = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSensitivityDelta(_))
        ));
    }
}
