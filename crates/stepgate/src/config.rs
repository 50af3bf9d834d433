//! Gate configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_LOCALE;
use crate::error::ConfigError;

/// Configuration for the condition gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Locale of the skip message (default: "en")
    pub locale: String,
    /// Stop evaluating at the first failing condition (default: true)
    pub short_circuit: bool,
    /// Steps marked as conditionable, used to seed a `ConditionableRegistry`
    pub conditioned_steps: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            short_circuit: true,
            conditioned_steps: Vec::new(),
        }
    }
}

impl GateConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = GateConfig::default();
        assert_eq!(config.locale, "en");
        assert!(config.short_circuit);
        assert!(config.conditioned_steps.is_empty());
    }

    #[test]
    fn load_missing_config() {
        let config = GateConfig::load("/nonexistent/path/stepgate.toml").unwrap();
        assert_eq!(config, GateConfig::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GateConfig::from_toml_str(r#"locale = "fr""#).unwrap();
        assert_eq!(config.locale, "fr");
        assert!(config.short_circuit);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            locale = "fr"
            short_circuit = false
            conditioned_steps = ["check_colour", "open_door"]
            "#
        )
        .unwrap();

        let config = GateConfig::load(file.path()).unwrap();
        assert_eq!(config.locale, "fr");
        assert!(!config.short_circuit);
        assert_eq!(config.conditioned_steps, vec!["check_colour", "open_door"]);
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = GateConfig::from_toml_str("short_circuit = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
