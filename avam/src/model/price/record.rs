use crate::util::fs::{self, FileError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// real estate price data for one municipality. `chf_per_m2` is the
/// canonical buy price consumed by the scoring engine; the remaining fields
/// are provenance and context. values from sources that lost the priority
/// merge land in `secondary` under a `<tag>_chf_per_m2` key, which `flatten`
/// keeps at the top level of the serialized record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chf_per_m2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent_chf_m2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_max: Option<f64>,
    #[serde(flatten)]
    pub secondary: BTreeMap<String, serde_json::Value>,
}

impl PriceRecord {
    /// a record is usable when it carries a positive price. zero and
    /// negative values are scraper artifacts.
    pub fn usable(&self) -> bool {
        self.chf_per_m2.map(|v| v > 0.0).unwrap_or(false)
    }
}

/// price records keyed by municipality id, the `prices.json` contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCatalog {
    records: BTreeMap<String, PriceRecord>,
}

impl PriceCatalog {
    pub fn new(records: BTreeMap<String, PriceRecord>) -> PriceCatalog {
        PriceCatalog { records }
    }

    pub fn from_file(path: &Path) -> Result<PriceCatalog, FileError> {
        fs::read_json(path)
    }

    pub fn from_file_or_empty(path: &Path) -> Result<PriceCatalog, FileError> {
        fs::read_json_or_default(path)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), FileError> {
        fs::write_json(self, path, true)
    }

    pub fn get(&self, municipality_id: &str) -> Option<&PriceRecord> {
        self.records.get(municipality_id)
    }

    pub fn insert(&mut self, municipality_id: String, record: PriceRecord) {
        self.records.insert(municipality_id, record);
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, PriceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// number of municipalities with a usable price, ignoring scraper
    /// bookkeeping keys (leading underscore).
    pub fn available(&self) -> usize {
        self.records
            .iter()
            .filter(|(id, record)| !id.starts_with('_') && record.usable())
            .count()
    }
}
