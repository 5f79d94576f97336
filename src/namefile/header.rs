//! Metadata stored in the comment header of a name file.
//!
//! Model builders write georeference information into the leading comment
//! lines, for example:
//!
//! ```text
//! # Name file for sagehen; xll:214860.0; yll:4365805.0; rotation:0.0
//! # proj4_str:+proj=utm +zone=10 +datum=NAD83; start_datetime:1/1/1980
//! LIST 7 sagehen.lst
//! ```
//!
//! Items are separated by `;` and written as `key:value` or `key=value`.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::namefile::errors::NameFileError;

/// Attributes read from a name file header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderAttributes {
    attributes: IndexMap<String, String>,
}

impl HeaderAttributes {
    /// Parse attributes from header text. Scanning stops at the first line
    /// that does not start with `#`.
    pub fn parse(text: &str) -> Self {
        let mut attributes = IndexMap::new();

        for line in text.lines().take_while(|l| l.starts_with('#')) {
            let body = line.replace('#', "");
            for item in body.split(';') {
                let Some(idx) = item.find([':', '=']) else {
                    continue;
                };
                let key = item[..idx].trim().to_lowercase();
                let value = item[idx + 1..].trim();
                if key.is_empty() || value.is_empty() {
                    continue;
                }
                attributes.insert(key, value.to_string());
            }
        }

        HeaderAttributes { attributes }
    }

    /// All attributes in the order they appear.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Raw value of an attribute; the key is matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if no attributes were found.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn float(&self, key: &str) -> Option<f64> {
        let raw = self.get(key)?;
        match raw.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("could not parse {} value `{}` in name file header", key, raw);
                None
            }
        }
    }

    /// Lower-left x coordinate.
    pub fn xll(&self) -> Option<f64> {
        self.float("xll")
    }

    /// Lower-left y coordinate.
    pub fn yll(&self) -> Option<f64> {
        self.float("yll")
    }

    /// Upper-left x coordinate.
    pub fn xul(&self) -> Option<f64> {
        self.float("xul")
    }

    /// Upper-left y coordinate.
    pub fn yul(&self) -> Option<f64> {
        self.float("yul")
    }

    /// Grid rotation in degrees, 0 when absent.
    pub fn rotation(&self) -> f64 {
        self.float("rotation").unwrap_or(0.0)
    }

    /// PROJ.4 string; the literal `none` counts as absent.
    pub fn proj4_str(&self) -> Option<&str> {
        self.get("proj4_str").filter(|s| !s.eq_ignore_ascii_case("none"))
    }

    /// Simulation start date as written.
    pub fn start_datetime(&self) -> Option<&str> {
        self.get("start_datetime").or_else(|| self.get("start"))
    }
}

/// Read the header attributes of a name file.
pub fn extract_header_attributes(path: &Path) -> Result<HeaderAttributes, NameFileError> {
    if !path.is_file() {
        return Err(NameFileError::NotFound {
            path: path.to_path_buf(),
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| NameFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(HeaderAttributes::parse(&text))
}
