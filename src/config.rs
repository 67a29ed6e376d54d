//! Persistent browser settings.
//!
//! Settings live in an XDG-compliant TOML file (`<config dir>/table-browser/config.toml`).
//! The `TABLE_BROWSER_CONFIG` environment variable points at an alternative file.
//! Command-line flags always take precedence over anything read here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TABLE_BROWSER_CONFIG";

/// Share of the terminal width given to the row pane when nothing is configured
pub const DEFAULT_LEFT_PANE_PERCENT: u16 = 20;

/// Errors that can occur during config operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Unable to determine config directory")]
    ConfigDirNotFound,

    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse config file
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A setting is present but unusable
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Configuration structure for persistent settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Treat the first line of every file as data rather than column names
    pub no_header: Option<bool>,

    /// Field delimiter (defaults to ',')
    pub delimiter: Option<char>,

    /// Width of the row pane as a percentage of the terminal width
    pub left_pane_percent: Option<u16>,
}

impl Config {
    /// Field delimiter as a single byte.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        delimiter_byte(self.delimiter.unwrap_or(','))
    }

    /// Row pane width percentage, clamped to a usable range.
    pub fn left_pane_percent(&self) -> u16 {
        self.left_pane_percent
            .unwrap_or(DEFAULT_LEFT_PANE_PERCENT)
            .clamp(5, 95)
    }
}

/// Convert a delimiter character to the single byte the CSV reader expects.
pub fn delimiter_byte(c: char) -> Result<u8, ConfigError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(ConfigError::InvalidValue {
            key: "delimiter",
            reason: format!("'{c}' is not a single-byte character"),
        })
    }
}

/// Get the path to the config file
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(config_dir.join("table-browser").join("config.toml"))
}

/// Load configuration from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Load configuration from a specific file
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = toml::from_str(&content)?;
    // Delimiter must be a single byte.
    config.delimiter_byte()?;
    debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.no_header.is_none());
        assert!(config.delimiter.is_none());
        assert_eq!(config.left_pane_percent(), DEFAULT_LEFT_PANE_PERCENT);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            no_header: Some(true),
            delimiter: Some(';'),
            left_pane_percent: Some(30),
        };

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_left_pane_percent_is_clamped() {
        let wide = Config {
            left_pane_percent: Some(150),
            ..Config::default()
        };
        assert_eq!(wide.left_pane_percent(), 95);

        let narrow = Config {
            left_pane_percent: Some(0),
            ..Config::default()
        };
        assert_eq!(narrow.left_pane_percent(), 5);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = delimiter_byte('§').unwrap_err();
        assert!(err.to_string().contains("delimiter"));
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
    }

    #[test]
    fn test_load_config_missing_and_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        assert_eq!(load_config_from(&path).unwrap(), Config::default());

        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_config_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "no_header = true\ndelimiter = \"|\"\nleft_pane_percent = 40\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.no_header, Some(true));
        assert_eq!(config.delimiter_byte().unwrap(), b'|');
        assert_eq!(config.left_pane_percent(), 40);
    }

    #[test]
    fn test_load_config_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "left_pane_percent = \"wide\"\n").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::ParseError(_))
        ));

        fs::write(&path, "delimiter = \"é\"\n").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    #[serial_test::serial]
    fn test_config_file_path_env_override() {
        let original = env::var(CONFIG_ENV).ok();

        env::set_var(CONFIG_ENV, "/tmp/custom-browser.toml");
        assert_eq!(
            config_file_path().unwrap(),
            PathBuf::from("/tmp/custom-browser.toml")
        );

        env::remove_var(CONFIG_ENV);
        let path = config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("table-browser"));
        assert!(path.to_string_lossy().ends_with("config.toml"));

        match original {
            Some(value) => env::set_var(CONFIG_ENV, value),
            None => env::remove_var(CONFIG_ENV),
        }
    }
}
