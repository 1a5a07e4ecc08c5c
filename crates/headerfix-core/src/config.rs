// Rust guideline compliant 2026-02-06

//! Configuration management for headerfix.

use crate::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file at the repository root.
pub const CONFIG_FILE_NAME: &str = ".headerfix.toml";

/// Configuration for headerfix behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Comment marker that starts the header line.
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    /// Directory names whose contents are never inspected.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Diagnostic log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file that receives diagnostics instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_comment_prefix() -> String {
    "//".to_string()
}

/// Vendored dependencies and version-control metadata.
fn default_excluded_dirs() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment_prefix: default_comment_prefix(),
            excluded_dirs: default_excluded_dirs(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<root>/.headerfix.toml`
    /// 3. Environment variables with `HEADERFIX_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_with(root, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], with environment lookups served by `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with<F>(root: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content).map_err(|e| {
                crate::Error::InvalidConfig(format!(
                    "{}: {}",
                    config_path.display(),
                    e
                ))
            })?;
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HEADERFIX_COMMENT_PREFIX` - Comment marker for the header line
    /// - `HEADERFIX_EXCLUDED_DIRS` - Comma-separated excluded directory names
    /// - `HEADERFIX_LOG_LEVEL` - Diagnostic log level
    /// - `HEADERFIX_LOG_FILE` - Diagnostic log file path
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HEADERFIX_COMMENT_PREFIX") {
            self.comment_prefix = val;
        }

        if let Some(val) = lookup("HEADERFIX_EXCLUDED_DIRS") {
            self.excluded_dirs = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(val) = lookup("HEADERFIX_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Some(val) = lookup("HEADERFIX_LOG_FILE") {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - comment_prefix is empty or contains whitespace
    /// - an excluded_dirs entry is empty or contains a path separator
    /// - log_level is not one of error, warn, info, debug
    fn validate(&self) -> Result<()> {
        if self.comment_prefix.is_empty() || self.comment_prefix.contains(char::is_whitespace) {
            return Err(crate::Error::InvalidConfig(format!(
                "comment_prefix must be non-empty without whitespace, got {:?}",
                self.comment_prefix
            )));
        }

        for dir in &self.excluded_dirs {
            if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
                return Err(crate::Error::InvalidConfig(format!(
                    "excluded_dirs entries must be single directory names, got {:?}",
                    dir
                )));
            }
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" => Ok(()),
            other => Err(crate::Error::InvalidConfig(format!(
                "log_level must be error, warn, info, or debug, got {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.comment_prefix, "//");
        assert_eq!(config.excluded_dirs, vec!["node_modules", ".git"]);
        assert_eq!(config.log_level, "warn");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = r##"
comment_prefix = "#"
excluded_dirs = ["vendor"]
log_level = "debug"
log_file = "headerfix.log"
"##;
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();

        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config.comment_prefix, "#");
        assert_eq!(config.excluded_dirs, vec!["vendor"]);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("headerfix.log")));
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "log_level = \"info\"").unwrap();

        let config = Config::load_with(temp_dir.path(), no_env).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.comment_prefix, "//");
        assert_eq!(config.excluded_dirs, vec!["node_modules", ".git"]);
    }

    #[test]
    fn test_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "comment_prefix = ").unwrap();

        let result = Config::load_with(temp_dir.path(), no_env);
        assert!(matches!(result, Err(crate::Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validation_empty_prefix() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "comment_prefix = \"\"").unwrap();

        assert!(Config::load_with(temp_dir.path(), no_env).is_err());
    }

    #[test]
    fn test_config_validation_nested_excluded_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "excluded_dirs = [\"a/b\"]",
        )
        .unwrap();

        assert!(Config::load_with(temp_dir.path(), no_env).is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let env = env_of(&[
            ("HEADERFIX_COMMENT_PREFIX", "--"),
            ("HEADERFIX_EXCLUDED_DIRS", "vendor, target,,"),
            ("HEADERFIX_LOG_LEVEL", "INFO"),
            ("HEADERFIX_LOG_FILE", "/tmp/hf.log"),
        ]);

        let config = Config::load_with(temp_dir.path(), env).unwrap();
        assert_eq!(config.comment_prefix, "--");
        assert_eq!(config.excluded_dirs, vec!["vendor", "target"]);
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/hf.log")));
    }

    #[test]
    fn test_config_env_invalid_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let env = env_of(&[("HEADERFIX_LOG_LEVEL", "verbose")]);

        assert!(Config::load_with(temp_dir.path(), env).is_err());
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "comment_prefix = \"#\"").unwrap();
        let env = env_of(&[("HEADERFIX_COMMENT_PREFIX", "//")]);

        let config = Config::load_with(temp_dir.path(), env).unwrap();
        assert_eq!(config.comment_prefix, "//");
    }
}
