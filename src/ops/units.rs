//! Implementation of `gsflow units`, `gsflow find`, and `gsflow packages`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{OpenMode, PackageRegistry, UnitKey, UnitRegistry};
use crate::namefile::{parse_name_file, ParseOptions};
use crate::util::config::{global_config_path, load_config, project_config_path, Config};
use crate::util::PathAnchor;

/// Options for loading a name file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Workspace directory; defaults to the name file's directory
    pub workspace: Option<PathBuf>,

    /// GSFLOW control file to resolve package paths against
    pub control_file: Option<PathBuf>,

    /// Force verbosity on or off, overriding configuration
    pub verbose: Option<bool>,

    /// Global config file to read instead of `~/.gsflow/config.toml`
    pub global_config: Option<PathBuf>,
}

impl LoadOptions {
    /// Path anchor for the given name file.
    pub fn anchor(&self, name_file: &Path) -> PathAnchor {
        match (&self.control_file, &self.workspace) {
            (Some(control), _) => PathAnchor::control_file(control),
            (None, Some(ws)) => PathAnchor::workspace(ws),
            (None, None) => PathAnchor::workspace(
                name_file
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new(".")),
            ),
        }
    }

    /// Global config file that applies.
    pub fn global_config_path(&self) -> Option<PathBuf> {
        self.global_config.clone().or_else(global_config_path)
    }

    /// Directory whose `.gsflow/config.toml` applies.
    pub fn project_dir(&self, name_file: &Path) -> PathBuf {
        match self.anchor(name_file) {
            PathAnchor::Workspace(ws) => ws,
            PathAnchor::ControlFile(control) => control
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Load global and project configuration for a name file.
pub fn load_model_config(name_file: &Path, opts: &LoadOptions) -> Config {
    let global = opts.global_config_path();
    let project = project_config_path(&opts.project_dir(name_file));
    load_config(global.as_deref(), &project)
}

/// The standard package set with configured overrides applied.
pub fn package_registry(config: &Config) -> PackageRegistry {
    let mut registry = PackageRegistry::with_defaults();
    registry.apply_overrides(&config.packages);
    registry
}

/// Parse a name file using configuration from its workspace.
pub fn load_units(name_file: &Path, opts: &LoadOptions) -> Result<UnitRegistry> {
    let config = load_model_config(name_file, opts);
    let packages = package_registry(&config);

    let options = ParseOptions {
        anchor: opts.anchor(name_file),
        verbose: opts.verbose.unwrap_or_else(|| config.parse.verbose()),
    };

    Ok(parse_name_file(name_file, &packages, &options)?)
}

/// One unit registry entry, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSummary {
    pub key: UnitKey,
    pub filetype: String,
    pub path: PathBuf,
    pub mode: OpenMode,
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Summarize a registry in declaration order.
pub fn summarize(registry: &UnitRegistry) -> Vec<UnitSummary> {
    registry
        .iter()
        .map(|(key, entry)| UnitSummary {
            key: key.clone(),
            filetype: entry.filetype().to_string(),
            path: entry.path().to_path_buf(),
            mode: entry.mode(),
            open: entry.is_open(),
            error: entry.open_error().map(str::to_string),
            description: entry.package().map(|p| p.description().to_string()),
        })
        .collect()
}

/// Render summaries as an aligned table.
pub fn format_units(units: &[UnitSummary]) -> String {
    let key_width = units
        .iter()
        .map(|u| u.key.to_string().len())
        .max()
        .unwrap_or(0)
        .max(4);
    let type_width = units
        .iter()
        .map(|u| u.filetype.len())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut output = format!(
        "{:<kw$}  {:<tw$}  {:<7}  PATH\n",
        "UNIT",
        "FILETYPE",
        "STATUS",
        kw = key_width,
        tw = type_width
    );

    for unit in units {
        let status = if unit.open { "open" } else { "missing" };
        output.push_str(&format!(
            "{:<kw$}  {:<tw$}  {:<7}  {}\n",
            unit.key.to_string(),
            unit.filetype,
            status,
            unit.path.display(),
            kw = key_width,
            tw = type_width
        ));
    }

    output
}

/// Look up the unit declared for each file type, in argument order.
///
/// Returns `(filetype, key)` pairs; `key` is `None` for absent types.
pub fn find_units(registry: &UnitRegistry, filetypes: &[String]) -> Vec<(String, Option<UnitKey>)> {
    filetypes
        .iter()
        .map(|ft| {
            let key = crate::namefile::find_unit_for_type(registry, ft).cloned();
            (ft.clone(), key)
        })
        .collect()
}

/// One package type, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct PackageSummary {
    pub name: String,
    pub reserved_unit: i32,
    pub description: String,
}

/// List the package types known after configuration is applied.
///
/// `global` is the global config file, if any.
pub fn list_packages(workspace: &Path, global: Option<&Path>) -> Vec<PackageSummary> {
    let config = load_config(global, &project_config_path(workspace));
    package_registry(&config)
        .iter()
        .map(|p| PackageSummary {
            name: p.name().to_string(),
            reserved_unit: p.reserved_unit(),
            description: p.description().to_string(),
        })
        .collect()
}

/// Read header attributes, with a path-bearing error.
pub fn load_header(name_file: &Path) -> Result<crate::namefile::HeaderAttributes> {
    crate::namefile::extract_header_attributes(name_file)
        .with_context(|| format!("failed to read header of {}", name_file.display()))
}
