//! Risk zone catalog loaded once from static configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::{RiskZone, ValidationError};

const BUNDLED_ZONES: &str = include_str!("../data/zones.json");

#[derive(Debug, Error)]
pub enum ZoneCatalogError {
    #[error("failed to read zone file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("zone file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("zone #{index} ('{id}') is invalid: {source}")]
    Invalid {
        index: usize,
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("zone id '{id}' appears more than once")]
    DuplicateId { id: String },
}

/// Validated, read-only snapshot of treaty zones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ZoneCatalog {
    zones: Vec<RiskZone>,
}

impl ZoneCatalog {
    /// Build a catalog, rejecting invalid zones and duplicate ids.
    pub fn new(zones: Vec<RiskZone>) -> Result<Self, ZoneCatalogError> {
        let mut seen = HashSet::with_capacity(zones.len());
        let mut validated = Vec::with_capacity(zones.len());

        for (index, zone) in zones.into_iter().enumerate() {
            let id = zone.id.clone();
            let zone = zone
                .validated()
                .map_err(|source| ZoneCatalogError::Invalid { index, id, source })?;
            if !seen.insert(zone.id.clone()) {
                return Err(ZoneCatalogError::DuplicateId { id: zone.id });
            }
            validated.push(zone);
        }

        Ok(Self { zones: validated })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ZoneCatalogError> {
        let zones: Vec<RiskZone> = serde_json::from_str(json)?;
        Self::new(zones)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ZoneCatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ZoneCatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), zones = catalog.len(), "loaded zone catalog");
        Ok(catalog)
    }

    /// Sample treaty book shipped with the crate.
    pub fn bundled() -> Result<Self, ZoneCatalogError> {
        Self::from_json_str(BUNDLED_ZONES)
    }

    pub fn zones(&self) -> &[RiskZone] {
        &self.zones
    }

    pub fn get(&self, id: &str) -> Option<&RiskZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn total_limit_usd(&self) -> u64 {
        self.zones
            .iter()
            .fold(0_u64, |total, zone| total.saturating_add(zone.limit_usd))
    }
}

impl AsRef<[RiskZone]> for ZoneCatalog {
    fn as_ref(&self) -> &[RiskZone] {
        &self.zones
    }
}
