//!
//! This module defines the techicon configuration file and its loading logic.
//! Configuration is read from `.techicon.toml` (or `techicon.toml`) in the
//! working directory, or from an explicit path.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::resolver::DEFAULT_ASSET_BASE_URL;

/// File names probed, in order, when no config path is given
pub const CONFIG_FILES: &[&str] = &[".techicon.toml", "techicon.toml"];

/// Represents the complete configuration loaded from .techicon.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Base URL icon assets are served from
    #[serde(default = "default_asset_base_url")]
    pub asset_base_url: String,

    /// Catalog file to use instead of the built-in devicon catalog.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_asset_base_url() -> String {
    DEFAULT_ASSET_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_base_url: default_asset_base_url(),
            catalog: None,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the TOML content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// The asset base URL is not an absolute http(s) URL
    #[error("Invalid asset-base-url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl Config {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A relative `catalog` path is anchored at the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(catalog) = config.catalog.take() {
            let anchored = match path.parent() {
                Some(dir) if catalog.is_relative() => dir.join(catalog),
                _ => catalog,
            };
            config.catalog = Some(anchored);
        }
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Find and load the first config file in `dir`.
    ///
    /// Returns `Ok(None)` when no config file exists there.
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((candidate, config)));
            }
        }
        log::debug!("No config file found in {}", dir.display());
        Ok(None)
    }

    /// Check that the asset base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url(&self.asset_base_url)
    }
}

/// Validate an asset base URL.
pub fn validate_base_url(base: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };
    let parsed = url::Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }
    Ok(())
}

/// Create a default configuration file at `path`.
///
/// Returns `true` if the file was created, or `false` if it already exists.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, generate_default_config()).map_err(|source| ConfigError::IoError {
        source,
        path: path.display().to_string(),
    })?;
    Ok(true)
}

/// Default configuration written by `techicon init`
pub fn generate_default_config() -> String {
    format!(
        r#"# techicon configuration file

# Base URL icon assets are served from
asset-base-url = "{DEFAULT_ASSET_BASE_URL}"

# Catalog file (devicon.json manifest or lookup map); defaults to the built-in catalog
# catalog = "devicon.json"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.asset_base_url, DEFAULT_ASSET_BASE_URL);
        assert!(config.catalog.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_config() {
        let toml = r#"
asset-base-url = "https://icons.example.com/devicon"
catalog = "icons/devicon.json"
"#;
        let config = Config::from_toml_str(toml).expect("Failed to parse TOML");
        assert_eq!(config.asset_base_url, "https://icons.example.com/devicon");
        assert_eq!(config.catalog, Some(PathBuf::from("icons/devicon.json")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Config::from_toml_str("asset-base = \"https://example.com\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_base_urls() {
        for url in ["not a url", "ftp://example.com/icons", "https://example.com/icons?v=1", "/icons"] {
            assert!(
                matches!(validate_base_url(url), Err(ConfigError::InvalidBaseUrl { .. })),
                "{url} should be rejected"
            );
        }
        assert!(validate_base_url("http://localhost:8080/icons").is_ok());
    }

    #[test]
    fn test_load_anchors_relative_catalog() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(".techicon.toml");
        fs::write(&path, "catalog = \"data/icons.json\"\n").expect("Failed to write config");

        let config = Config::load(&path).expect("config loads");
        assert_eq!(config.catalog, Some(dir.path().join("data/icons.json")));
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().expect("Failed to create temporary directory");
        assert!(Config::discover(dir.path()).expect("discover works").is_none());

        fs::write(dir.path().join("techicon.toml"), "asset-base-url = \"https://a.example/icons\"\n")
            .expect("Failed to write config");
        let (path, config) = Config::discover(dir.path()).expect("discover works").expect("config found");
        assert_eq!(path, dir.path().join("techicon.toml"));
        assert_eq!(config.asset_base_url, "https://a.example/icons");

        // The dotfile takes precedence
        fs::write(dir.path().join(".techicon.toml"), "").expect("Failed to write config");
        let (path, _) = Config::discover(dir.path()).expect("discover works").expect("config found");
        assert_eq!(path, dir.path().join(".techicon.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/.techicon.toml"));
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_create_default_config() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(".techicon.toml");

        assert!(create_default_config(&path).expect("config created"));
        assert!(!create_default_config(&path).expect("existing config left alone"));
        assert_eq!(Config::load(&path).expect("config loads"), Config::default());
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config = Config::from_toml_str(&generate_default_config()).expect("default config parses");
        assert_eq!(config, Config::default());
    }
}
