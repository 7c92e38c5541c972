//! TOML configuration for the processing pipeline and logging.
//!
//! The lexical tables are fixed; only the stages around the engine and the
//! default log level are configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default = "default_true")]
    pub sanitize: bool,
    #[serde(default = "default_true")]
    pub punctuation: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub format: InputFormat,
}

/// How inbound text is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// Raw transcription text
    #[default]
    Plain,
    /// Recognizer result JSON, e.g. `{"text": "..."}`
    VoskJson,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sanitize: default_true(),
            punctuation: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// `$XDG_CONFIG_HOME/ukr-punctuation/config.toml` or platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ukr-punctuation").join("config.toml"))
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| anyhow::anyhow!("Failed to expand path {}: {}", raw, e))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Load configuration, returning it with the file it came from.
///
/// An explicit path must exist and parse. Without one the default location
/// is tried, falling back to defaults when it is missing or broken.
pub fn load_config(explicit: Option<&str>) -> Result<(Config, Option<PathBuf>)> {
    if let Some(raw) = explicit {
        let path = expand_path(raw)?;
        let config = Config::from_file(&path)?;
        info!("Loaded config from {}", path.display());
        return Ok((config, Some(path)));
    }

    load_default_config(default_config_path())
}

/// Load from the default location, falling back to defaults with a warning
/// when the location is unknown or the file there cannot be used.
fn load_default_config(path: Option<PathBuf>) -> Result<(Config, Option<PathBuf>)> {
    let Some(path) = path else {
        warn!("Could not determine config directory, using defaults");
        return Ok((Config::default(), None));
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok((Config::default(), None));
    }

    match Config::from_file(&path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        Err(e) => {
            warn!("{:#}, using defaults", e);
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.pipeline.sanitize);
        assert!(config.pipeline.punctuation);
        assert_eq!(config.input.format, InputFormat::Plain);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [pipeline]
            sanitize = false

            [input]
            format = "vosk-json"
            "#,
        )
        .unwrap();

        assert!(!config.pipeline.sanitize);
        assert!(config.pipeline.punctuation);
        assert_eq!(config.input.format, InputFormat::VoskJson);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml_str("[pipeline]\nsanitize = \"yes\"").is_err());
        assert!(Config::from_toml_str("[input]\nformat = \"mp3\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.logging.level = "debug".to_string();
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"trace\"").unwrap();

        let path = file.path().to_str().unwrap();
        let (config, source) = load_config(Some(path)).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.toml"));
    }

    #[test]
    fn test_default_location_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = load_default_config(Some(dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert!(source.is_none());
    }

    #[test]
    fn test_default_location_malformed_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pipeline").unwrap();

        let (config, source) = load_default_config(Some(path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(source.is_none());
    }

    #[test]
    fn test_default_location_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[pipeline]\nsanitize = false\n").unwrap();

        let (config, source) = load_default_config(Some(path.clone())).unwrap();
        assert!(!config.pipeline.sanitize);
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_default_location_unknown() {
        let (config, source) = load_default_config(None).unwrap();
        assert_eq!(config, Config::default());
        assert!(source.is_none());
    }

    #[test]
    fn test_load_explicit_malformed_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pipeline").unwrap();
        assert!(load_config(Some(file.path().to_str().unwrap())).is_err());
    }
}
