//! Effective settings for one CLI invocation: config file merged with flags.

use anyhow::Context;
use colored::*;
use std::borrow::Cow;
use std::path::Path;

use techicon_lib::catalog::Catalog;
use techicon_lib::config::{self, Config};
use techicon_lib::exit_codes::exit;
use techicon_lib::{AliasTable, NameResolver};

use crate::GlobalArgs;

/// Catalog and asset host the commands run against
pub struct Settings {
    pub catalog: Cow<'static, Catalog>,
    pub asset_base_url: String,
}

impl Settings {
    pub fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(&self.catalog, AliasTable::builtin()).with_asset_base(self.asset_base_url.as_str())
    }
}

/// Load settings. Precedence: CLI flags, then the config file, then defaults.
pub fn load(args: &GlobalArgs) -> anyhow::Result<Settings> {
    let config = if args.no_config {
        Config::default()
    } else if let Some(path) = args.config.as_deref() {
        Config::load(path).with_context(|| format!("Could not load config {}", path.display()))?
    } else {
        let cwd = std::env::current_dir().context("Could not determine the current directory")?;
        match Config::discover(&cwd)? {
            Some((path, config)) => {
                log::debug!("Using config {}", path.display());
                config
            }
            None => Config::default(),
        }
    };

    let asset_base_url = match args.base_url.as_deref() {
        Some(url) => {
            config::validate_base_url(url)?;
            url.to_string()
        }
        None => config.asset_base_url.clone(),
    };

    let catalog_path = args.catalog.as_deref().or(config.catalog.as_deref());
    let catalog = match catalog_path {
        Some(path) => Cow::Owned(load_catalog(path)?),
        None => Cow::Borrowed(Catalog::builtin()),
    };
    log::debug!("Catalog has {} icons; asset host {}", catalog.len(), asset_base_url);

    Ok(Settings {
        catalog,
        asset_base_url,
    })
}

fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::load(path).with_context(|| format!("Could not load catalog {}", path.display()))
}

/// Load settings, printing the error chain and exiting with the tool error
/// code on failure.
pub fn load_or_exit(args: &GlobalArgs) -> Settings {
    match load(args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let args = GlobalArgs {
            no_config: true,
            ..Default::default()
        };
        let settings = load(&args).expect("defaults load");
        assert_eq!(settings.asset_base_url, techicon_lib::DEFAULT_ASSET_BASE_URL);
        assert!(matches!(settings.catalog, Cow::Borrowed(_)));
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let config_path = dir.path().join("techicon.toml");
        fs::write(&config_path, "asset-base-url = \"https://config.example/icons\"\n").expect("write config");

        let args = GlobalArgs {
            config: Some(config_path.clone()),
            base_url: Some("https://flag.example/icons/".to_string()),
            ..Default::default()
        };
        let settings = load(&args).expect("settings load");
        assert_eq!(
            settings.resolver().build_asset_url("rust").as_deref(),
            Some("https://flag.example/icons/rust/rust-original.svg")
        );

        let args = GlobalArgs {
            config: Some(config_path),
            ..Default::default()
        };
        let settings = load(&args).expect("settings load");
        assert_eq!(settings.asset_base_url, "https://config.example/icons");
    }

    #[test]
    fn test_invalid_base_url_flag() {
        let args = GlobalArgs {
            no_config: true,
            base_url: Some("ftp://icons.example".to_string()),
            ..Default::default()
        };
        assert!(load(&args).is_err());
    }

    #[test]
    fn test_catalog_from_config() {
        let dir = tempdir().expect("Failed to create temporary directory");
        fs::write(
            dir.path().join("icons.json"),
            r#"{"zig": {"name": "Zig", "tags": ["systems"], "svgVersions": ["plain"]}}"#,
        )
        .expect("write catalog");
        let config_path = dir.path().join(".techicon.toml");
        fs::write(&config_path, "catalog = \"icons.json\"\n").expect("write config");

        let args = GlobalArgs {
            config: Some(config_path),
            ..Default::default()
        };
        let settings = load(&args).expect("settings load");
        assert_eq!(settings.catalog.len(), 1);
        assert_eq!(settings.resolver().resolve_identifier("ZIG"), Some("zig"));
    }
}
