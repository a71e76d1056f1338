//! Static geographic reference data consumed by the cascade resolver.
//!
//! Both collaborators are loaded once at startup and immutable afterwards:
//! province-level census statistics backing the density derivation, and the
//! nested province → district → subdistrict book backing the three dependent
//! address selectors.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Census figures for a single province.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvinceStats {
    pub population: f64,
    pub area_km2: f64,
}

impl ProvinceStats {
    pub fn density(&self) -> f64 {
        self.population / self.area_km2
    }
}

/// Read-only lookup used by the cascade resolver. `None` means no record
/// matches; derived fields stay unset rather than defaulting.
pub trait ProvinceReference: Send + Sync {
    fn stats(&self, province: &str) -> Option<ProvinceStats>;
}

/// One row of the province statistics file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProvinceRecord {
    #[serde(rename = "name-en")]
    pub name_en: String,
    pub population: f64,
    pub area_km2: f64,
}

/// In-memory directory over the province statistics file.
#[derive(Debug, Default)]
pub struct ProvinceDirectory {
    records: Vec<ProvinceRecord>,
}

impl ProvinceDirectory {
    pub fn from_records(records: Vec<ProvinceRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(raw: &str) -> Result<Self, ReferenceError> {
        let records: Vec<ProvinceRecord> = serde_json::from_str(raw)?;
        Ok(Self::from_records(records))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn records(&self) -> &[ProvinceRecord] {
        &self.records
    }
}

impl ProvinceReference for ProvinceDirectory {
    fn stats(&self, province: &str) -> Option<ProvinceStats> {
        self.records
            .iter()
            .find(|record| record.name_en == province)
            // A non-positive area would poison the density derivation;
            // treat such rows the same as a missing record.
            .filter(|record| record.area_km2 > 0.0)
            .map(|record| ProvinceStats {
                population: record.population,
                area_km2: record.area_km2,
            })
    }
}

/// Nested province → district → subdistrict lookup book.
#[derive(Debug, Default)]
pub struct AddressBook {
    regions: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl AddressBook {
    pub fn from_json(raw: &str) -> Result<Self, ReferenceError> {
        let regions = serde_json::from_str(raw)?;
        Ok(Self { regions })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn provinces(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    pub fn districts(&self, province: &str) -> Vec<&str> {
        self.regions
            .get(province)
            .map(|districts| districts.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn subdistricts(&self, province: &str, district: &str) -> Vec<&str> {
        self.regions
            .get(province)
            .and_then(|districts| districts.get(district))
            .map(|subdistricts| subdistricts.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Failure loading or parsing reference data. Raised once at startup;
/// malformed reference data is a defect, not a runtime condition.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("unable to read reference data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed reference data: {0}")]
    Malformed(#[from] serde_json::Error),
}
