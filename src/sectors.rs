//! Sector catalog: per-sector descriptive copy loaded from JSON.
//!
//! The catalog is advisory. A missing or unreadable file yields an empty
//! catalog, and a sector absent from the catalog gets generic fallback
//! copy downstream; neither case is an error.

use sectorbrief_traits::ResourceProvider;
use serde::Deserialize;
use std::collections::HashMap;

/// Copy blocks for one sector. Fields the JSON omits stay `None`/empty
/// and fall back to generic defaults when the page copy is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectorInfo {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub key_metrics: Option<Vec<String>>,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default)]
    pub risk_factors: Option<Vec<String>>,
}

/// The full sector lookup, keyed by capitalized sector name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectorCatalog {
    #[serde(default)]
    sectors: HashMap<String, SectorInfo>,
}

impl SectorCatalog {
    /// Parses a catalog from raw JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    /// Loads the catalog through a resource provider, falling back to an
    /// empty catalog when the file is missing or malformed.
    pub fn load(provider: &dyn ResourceProvider, path: &str) -> Self {
        match provider.load(path) {
            Ok(data) => match Self::from_json(&data) {
                Ok(catalog) => {
                    log::debug!("Loaded sector catalog with {} sectors", catalog.len());
                    catalog
                }
                Err(e) => {
                    log::warn!("Sector catalog '{}' is malformed ({}); using empty catalog", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Sector catalog unavailable ({}); using empty catalog", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, sector: &str) -> Option<&SectorInfo> {
        self.sectors.get(sector)
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
