//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.gsflow/config.toml` - User-wide defaults
//! - Project: `<workspace>/.gsflow/config.toml` - Model-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Package type overrides keyed by lower-case token.
pub type PackagesConfig = IndexMap<String, PackageOverride>;

/// Tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name file parsing settings
    pub parse: ParseConfig,

    /// Extra or overridden package types
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub packages: PackagesConfig,
}

/// Name file parsing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Report files that could not be opened (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl ParseConfig {
    /// Effective verbosity.
    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(true)
    }
}

/// A package type declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageOverride {
    /// Unit used when the name file declares unit 0
    pub reserved_unit: i32,

    /// Optional description; falls back to the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;

        // Tokens are matched case-insensitively everywhere else.
        config.packages = config
            .packages
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Ok(config)
    }

    /// Load configuration with fallback to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.parse.verbose.is_some() {
            self.parse.verbose = other.parse.verbose;
        }
        for (name, pkg) in other.packages {
            self.packages.insert(name, pkg);
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (<workspace>/.gsflow/config.toml)
/// 2. Global config (~/.gsflow/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path.filter(|p| p.exists()) {
        config.merge(Config::load_or_default(global));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config directory (~/.gsflow).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".gsflow"))
}

/// Get the global config path (~/.gsflow/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (<workspace>/.gsflow/config.toml).
pub fn project_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".gsflow").join("config.toml")
}
