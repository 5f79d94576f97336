//! Package type registry.
//!
//! A name file line with unit `0` asks the package type to supply its own
//! reserved unit number. The registry maps a case-insensitive type token to
//! the capability object that knows that number.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::util::config::PackagesConfig;

/// A kind of package that can appear in a name file.
pub trait PackageType: Send + Sync {
    /// Canonical lower-case token, e.g. `"wel"`.
    fn name(&self) -> &str;

    /// Unit number used when the name file declares unit `0`.
    fn reserved_unit(&self) -> i32;

    /// Human-readable description.
    fn description(&self) -> &str {
        ""
    }
}

impl fmt::Debug for dyn PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageType")
            .field("name", &self.name())
            .field("reserved_unit", &self.reserved_unit())
            .finish()
    }
}

/// A package type defined by a token and a fixed reserved unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardPackage {
    name: String,
    reserved_unit: i32,
    description: String,
}

impl StandardPackage {
    /// Create a package type. The token is stored lower-cased.
    pub fn new(name: impl AsRef<str>, reserved_unit: i32) -> Self {
        StandardPackage {
            name: name.as_ref().to_lowercase(),
            reserved_unit,
            description: String::new(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl PackageType for StandardPackage {
    fn name(&self) -> &str {
        &self.name
    }

    fn reserved_unit(&self) -> i32 {
        self.reserved_unit
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Conventional MODFLOW-2005 / MODFLOW-NWT reserved units.
const DEFAULT_PACKAGES: &[(&str, i32, &str)] = &[
    ("dis", 11, "Discretization"),
    ("bas6", 13, "Basic"),
    ("oc", 14, "Output control"),
    ("lpf", 15, "Layer-property flow"),
    ("bcf6", 15, "Block-centered flow"),
    ("sfr", 17, "Streamflow routing"),
    ("riv", 18, "River"),
    ("rch", 19, "Recharge"),
    ("uzf", 19, "Unsaturated-zone flow"),
    ("wel", 20, "Well"),
    ("drn", 21, "Drain"),
    ("evt", 22, "Evapotranspiration"),
    ("ghb", 23, "General-head boundary"),
    ("chd", 24, "Time-variant specified head"),
    ("sip", 25, "Strongly implicit procedure solver"),
    ("pcg", 27, "Preconditioned conjugate-gradient solver"),
    ("gmg", 27, "Geometric multigrid solver"),
    ("de4", 28, "Direct solver"),
    ("hfb6", 29, "Horizontal flow barrier"),
    ("lmt6", 30, "Link to MT3DMS"),
    ("upw", 31, "Upstream weighting"),
    ("nwt", 32, "Newton solver"),
    ("mnw2", 34, "Multi-node well"),
    ("hyd", 36, "HYDMOD"),
    ("hob", 39, "Head observation"),
    ("fhb", 40, "Flow and head boundary"),
    ("str", 118, "Stream"),
    ("lak", 119, "Lake"),
    ("gage", 120, "Gage"),
    ("zone", 1001, "Zone arrays"),
    ("mult", 1002, "Multiplier arrays"),
    ("pval", 1005, "Parameter values"),
];

/// Case-insensitive registry of known package types.
#[derive(Default, Clone)]
pub struct PackageRegistry {
    packages: HashMap<String, Arc<dyn PackageType>>,
}

impl PackageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        PackageRegistry {
            packages: HashMap::new(),
        }
    }

    /// Create a registry holding the standard MODFLOW package set.
    pub fn with_defaults() -> Self {
        let mut registry = PackageRegistry::new();
        for (name, unit, description) in DEFAULT_PACKAGES {
            registry.register(StandardPackage::new(name, *unit).with_description(*description));
        }
        registry
    }

    /// Register a package type, replacing any existing entry for its token.
    pub fn register(&mut self, package: impl PackageType + 'static) {
        self.register_arc(Arc::new(package));
    }

    /// Register an already shared package type.
    pub fn register_arc(&mut self, package: Arc<dyn PackageType>) {
        self.packages.insert(package.name().to_lowercase(), package);
    }

    /// Register or override entries from configuration.
    pub fn apply_overrides(&mut self, config: &PackagesConfig) {
        for (name, pkg) in config {
            let description = pkg
                .description
                .clone()
                .or_else(|| self.get(name).map(|p| p.description().to_string()))
                .unwrap_or_default();
            tracing::debug!("package `{}` reserves unit {}", name, pkg.reserved_unit);
            self.register(StandardPackage::new(name, pkg.reserved_unit).with_description(description));
        }
    }

    /// Look up a package type by token, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn PackageType>> {
        self.packages.get(&name.to_lowercase())
    }

    /// Check whether a token is known.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Reserved unit for a token, if the type is known.
    pub fn reserved_unit_for(&self, name: &str) -> Option<i32> {
        self.get(name).map(|p| p.reserved_unit())
    }

    /// All registered package types, sorted by token.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn PackageType>> + '_ {
        let mut all: Vec<_> = self.packages.values().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all.into_iter()
    }

    /// Number of registered package types.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl fmt::Debug for PackageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageRegistry")
            .field("len", &self.packages.len())
            .finish()
    }
}
