// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration loading or validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The requested configuration file was not found.
    #[error("config file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: String,
    },

    /// The file could not be parsed as valid TOML.
    #[error("failed to parse config: {reason}")]
    ParseError {
        /// Human-readable parse error detail.
        reason: String,
    },

    /// Semantic validation failed (one or more problems).
    #[error("config validation failed: {reasons:?}")]
    ValidationError {
        /// Individual validation failure messages.
        reasons: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// The relational engine backing the persistence layer.
///
/// Selecting an engine installs that dialect's translator set; the
/// translation contract itself is engine-agnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseEngine {
    /// Microsoft SQL Server.
    #[default]
    SqlServer,
    /// PostgreSQL.
    Postgres,
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SqlServer => "sql_server",
            Self::Postgres => "postgres",
        };
        f.write_str(s)
    }
}

impl FromStr for DatabaseEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql_server" | "sqlserver" | "mssql" => Ok(Self::SqlServer),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(format!("unknown database engine '{other}'")),
        }
    }
}

/// Top-level runtime configuration for the translation engine.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct DatagateConfig {
    /// Engine whose dialect translators are installed.
    #[serde(default)]
    pub engine: DatabaseEngine,

    /// Log level override (e.g. `"debug"`, `"info"`, `"warn"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for DatagateConfig {
    fn default() -> Self {
        Self {
            engine: DatabaseEngine::default(),
            log_level: Some("info".into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Recognised log levels.
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a [`DatagateConfig`] from an optional TOML file path.
///
/// * If `path` is `Some`, reads and parses the file.
/// * If `path` is `None`, returns [`DatagateConfig::default()`].
///
/// Environment variable overrides are applied on top in both cases.
///
/// # Errors
///
/// [`ConfigError::FileNotFound`] when the file cannot be read,
/// [`ConfigError::ParseError`] when it is not valid TOML.
pub fn load_config(path: Option<&Path>) -> Result<DatagateConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p).map_err(|_| ConfigError::FileNotFound {
                path: p.display().to_string(),
            })?;
            parse_toml(&content)?
        }
        None => DatagateConfig::default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Parse a TOML string into a [`DatagateConfig`].
///
/// # Errors
///
/// [`ConfigError::ParseError`] when the content is not valid TOML or the
/// fields have the wrong types.
pub fn parse_toml(content: &str) -> Result<DatagateConfig, ConfigError> {
    toml::from_str::<DatagateConfig>(content).map_err(|e| ConfigError::ParseError {
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Env overrides
// ---------------------------------------------------------------------------

/// Apply environment variable overrides.
///
/// Recognised variables:
/// - `DATAGATE_ENGINE` (ignored when the value is not a known engine)
/// - `DATAGATE_LOG_LEVEL`
pub fn apply_env_overrides(config: &mut DatagateConfig) {
    if let Ok(val) = std::env::var("DATAGATE_ENGINE")
        && let Ok(engine) = val.parse()
    {
        config.engine = engine;
    }
    if let Ok(val) = std::env::var("DATAGATE_LOG_LEVEL") {
        config.log_level = Some(val);
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a parsed configuration.
///
/// # Errors
///
/// [`ConfigError::ValidationError`] listing every problem found.
pub fn validate_config(config: &DatagateConfig) -> Result<(), ConfigError> {
    let mut reasons: Vec<String> = Vec::new();

    if let Some(ref level) = config.log_level
        && !VALID_LOG_LEVELS.contains(&level.as_str())
    {
        reasons.push(format!("invalid log_level '{level}'"));
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError { reasons })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let cfg = DatagateConfig::default();
        validate_config(&cfg).expect("default config should be valid");
        assert_eq!(cfg.engine, DatabaseEngine::SqlServer);
        assert_eq!(cfg.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn parse_valid_toml_string() {
        let toml = r#"
            engine = "postgres"
            log_level = "debug"
        "#;
        let cfg = parse_toml(toml).unwrap();
        assert_eq!(cfg.engine, DatabaseEngine::Postgres);
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn engine_defaults_to_sql_server_when_absent() {
        let cfg = parse_toml(r#"log_level = "warn""#).unwrap();
        assert_eq!(cfg.engine, DatabaseEngine::SqlServer);
    }

    #[test]
    fn parse_invalid_toml_gives_parse_error() {
        let err = parse_toml("this is [not valid toml =").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn parse_unknown_engine_gives_parse_error() {
        let err = parse_toml(r#"engine = "oracle""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn validation_catches_invalid_log_level() {
        let cfg = DatagateConfig {
            log_level: Some("verbose".into()),
            ..Default::default()
        };
        let err = validate_config(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn load_missing_file_gives_file_not_found() {
        let err = load_config(Some(Path::new("/nonexistent/datagate.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn load_from_file_roundtrips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "engine = \"postgres\"").unwrap();
        writeln!(file, "log_level = \"trace\"").unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.engine, DatabaseEngine::Postgres);
        // The environment may override log_level; only assert when unset.
        if std::env::var("DATAGATE_LOG_LEVEL").is_err() {
            assert_eq!(cfg.log_level.as_deref(), Some("trace"));
        }
    }

    #[test]
    fn engine_from_str_accepts_aliases() {
        assert_eq!("sqlserver".parse::<DatabaseEngine>().unwrap(), DatabaseEngine::SqlServer);
        assert_eq!("mssql".parse::<DatabaseEngine>().unwrap(), DatabaseEngine::SqlServer);
        assert_eq!("postgresql".parse::<DatabaseEngine>().unwrap(), DatabaseEngine::Postgres);
        assert!("oracle".parse::<DatabaseEngine>().is_err());
    }

    #[test]
    fn engine_display_matches_wire_form() {
        assert_eq!(DatabaseEngine::SqlServer.to_string(), "sql_server");
        assert_eq!(DatabaseEngine::Postgres.to_string(), "postgres");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DatagateConfig {
            engine: DatabaseEngine::Postgres,
            log_level: Some("warn".into()),
        };
        let rendered = toml::to_string(&cfg).unwrap();
        let back = parse_toml(&rendered).unwrap();
        assert_eq!(back, cfg);
    }
}
