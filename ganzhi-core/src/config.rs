//! Application configuration stored as TOML.
//!
//! ```toml
//! default_element = "metal"
//! default_interval = "1d"
//! data_dir = "data"
//!
//! [[assets]]
//! symbol = "MSFT"
//! name = "Microsoft"
//! sector = "Technology"      # element derived from sector when omitted
//!
//! [[assets]]
//! symbol = "AAPL"
//! element = "metal"          # overrides the built-in entry
//! ```

use crate::calendar::Element;
use crate::domain::asset::{element_for_sector, Asset, AssetCatalog, CUSTOM_SECTOR, DEFAULT_ELEMENT};
use crate::domain::Interval;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// One `[[assets]]` entry. Missing fields are filled from the built-in
/// catalog entry of the same symbol. A missing element is taken from the
/// entry's own sector first, then the built-in entry, then `default_element`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_element: Element,
    pub default_interval: Interval,
    pub data_dir: PathBuf,
    pub assets: Vec<AssetEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_element: DEFAULT_ELEMENT,
            default_interval: Interval::OneDay,
            data_dir: PathBuf::from("data"),
            assets: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `from_file` when a path is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Built-in catalog with this config's entries applied on top.
    pub fn catalog(&self) -> AssetCatalog {
        let mut catalog = AssetCatalog::builtin();
        for entry in &self.assets {
            let asset = self.resolve_entry(entry, catalog.get(&entry.symbol));
            catalog.insert(asset);
        }
        catalog
    }

    fn resolve_entry(&self, entry: &AssetEntry, existing: Option<&Asset>) -> Asset {
        let symbol = entry.symbol.trim().to_uppercase();
        let sector = entry
            .sector
            .clone()
            .or_else(|| existing.map(|a| a.sector.clone()))
            .unwrap_or_else(|| CUSTOM_SECTOR.to_string());
        let element = entry
            .element
            .or_else(|| entry.sector.as_deref().and_then(element_for_sector))
            .or_else(|| existing.map(|a| a.element))
            .unwrap_or(self.default_element);
        let name = entry
            .name
            .clone()
            .or_else(|| existing.map(|a| a.name.clone()))
            .unwrap_or_else(|| symbol.clone());
        Asset { symbol, name, sector, element }
    }
}
