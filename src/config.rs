use crate::error::{NumbumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "numbump.toml";

/// Represents the complete configuration for numbump.
///
/// Contains the version field name, the default increment, backup options and output formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_field")]
    pub field: String,

    #[serde(default = "default_increment")]
    pub default_increment: f64,

    #[serde(default)]
    pub backup: BackupConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default name of the top-level version field.
fn default_field() -> String {
    "version".to_string()
}

/// Returns the increment applied when neither a value nor a delta is given.
fn default_increment() -> f64 {
    0.1
}

fn default_backup_suffix() -> String {
    "backup".to_string()
}

fn default_true() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

/// Configuration for backups taken before an in-place overwrite.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BackupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_backup_suffix")]
    pub suffix: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            enabled: true,
            suffix: default_backup_suffix(),
        }
    }
}

/// Configuration for the serialized document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            indent: default_indent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            field: default_field(),
            default_increment: default_increment(),
            backup: BackupConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `numbump.toml` in current directory
/// 3. `.numbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Path::new(LOCAL_CONFIG_FILE).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(".numbump.toml");
        if !path.exists() {
            return Ok(Config::default());
        }
        path
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        NumbumpError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| NumbumpError::config(format!("{} in {}", e, path.display())))
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.field, "version");
        assert_eq!(config.default_increment, 0.1);
        assert!(config.backup.enabled);
        assert_eq!(config.backup.suffix, "backup");
        assert_eq!(config.output.indent, 2);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
field = "release"

[backup]
suffix = "bak"
"#,
        )
        .unwrap();
        assert_eq!(config.field, "release");
        assert_eq!(config.default_increment, 0.1);
        assert!(config.backup.enabled);
        assert_eq!(config.backup.suffix, "bak");
        assert_eq!(config.output.indent, 2);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(parse_config("field = ").is_err());
        assert!(parse_config("default_increment = \"lots\"").is_err());
    }
}
