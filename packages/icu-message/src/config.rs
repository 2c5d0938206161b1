//! Validator Configuration
//!
//! The compiled/uncompiled switch is passed to the validator explicitly
//! instead of living in a process-wide flag.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable read by [`ValidatorConfig::from_env`].
pub const MODE_ENV_VAR: &str = "ICU_MESSAGE_MODE";

/// Execution mode of the code declaring messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Checks run on every call.
    #[default]
    Uncompiled,
    /// The build pipeline already validated and replaced every call site,
    /// so validation is a pass-through.
    Compiled,
}

impl ExecutionMode {
    /// Maps a build profile to a mode: debug builds validate.
    pub fn for_build(debug_assertions: bool) -> Self {
        if debug_assertions {
            ExecutionMode::Uncompiled
        } else {
            ExecutionMode::Compiled
        }
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self, ExecutionMode::Compiled)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Uncompiled => f.write_str("uncompiled"),
            ExecutionMode::Compiled => f.write_str("compiled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown execution mode '{0}', expected 'compiled' or 'uncompiled'")]
    UnknownMode(String),
}

impl FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uncompiled" => Ok(ExecutionMode::Uncompiled),
            "compiled" => Ok(ExecutionMode::Compiled),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Validator settings, typically read from a JSON file such as
/// `{ "mode": "compiled" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub mode: ExecutionMode,
}

impl ValidatorConfig {
    pub fn new(mode: ExecutionMode) -> Self {
        ValidatorConfig { mode }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ValidatorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Reads the mode from [`MODE_ENV_VAR`]. Unset means uncompiled.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            None => Ok(ValidatorConfig::default()),
            Some(v) if v.trim().is_empty() => Ok(ValidatorConfig::default()),
            Some(v) => Ok(ValidatorConfig::new(v.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_uncompiled() {
        assert_eq!(ValidatorConfig::default().mode, ExecutionMode::Uncompiled);
    }

    #[test]
    fn for_build_maps_debug_assertions() {
        assert_eq!(ExecutionMode::for_build(true), ExecutionMode::Uncompiled);
        assert_eq!(ExecutionMode::for_build(false), ExecutionMode::Compiled);
    }

    #[test]
    fn parses_mode_case_insensitively() {
        assert_eq!("Compiled".parse::<ExecutionMode>(), Ok(ExecutionMode::Compiled));
        assert_eq!(" uncompiled ".parse::<ExecutionMode>(), Ok(ExecutionMode::Uncompiled));
        assert_eq!(
            "prod".parse::<ExecutionMode>(),
            Err(ConfigError::UnknownMode("prod".to_string()))
        );
    }

    #[test]
    fn env_value_handling() {
        assert_eq!(ValidatorConfig::from_env_value(None), Ok(ValidatorConfig::default()));
        assert_eq!(ValidatorConfig::from_env_value(Some("")), Ok(ValidatorConfig::default()));
        assert_eq!(
            ValidatorConfig::from_env_value(Some("COMPILED")).map(|c| c.mode),
            Ok(ExecutionMode::Compiled)
        );
        assert!(ValidatorConfig::from_env_value(Some("yes")).is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let config: ValidatorConfig = serde_json::from_str(r#"{ "mode": "compiled" }"#).unwrap();
        assert!(config.mode.is_compiled());

        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.mode, ExecutionMode::Uncompiled);

        assert!(serde_json::from_str::<ValidatorConfig>(r#"{ "strict": true }"#).is_err());
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("icu-message-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "mode": "compiled" }"#).unwrap();
        let config = ValidatorConfig::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config.unwrap().mode, ExecutionMode::Compiled);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("icu-message-config-does-not-exist.json");
        assert!(ValidatorConfig::load(&path).is_err());
    }
}
