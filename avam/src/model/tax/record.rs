use crate::util::fs::{self, FileError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// the income tax position of one municipality. `multiplier` is the total
/// Steuerfuss in percent, the sum of whatever rates are present; a zero
/// rate is a value and contributes, only absence yields null. nulls are
/// serialized explicitly since they are the signal downstream consumers
/// filter on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxRecord {
    pub name: String,
    pub canton: String,
    pub multiplier: Option<f64>,
    pub canton_rate: Option<f64>,
    pub commune_rate: Option<f64>,
}

/// tax records keyed by municipality id, the `taxes.json` contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxCatalog {
    records: BTreeMap<String, TaxRecord>,
}

impl TaxCatalog {
    pub fn from_file_or_empty(path: &Path) -> Result<TaxCatalog, FileError> {
        fs::read_json_or_default(path)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), FileError> {
        fs::write_json(self, path, true)
    }

    pub fn get(&self, municipality_id: &str) -> Option<&TaxRecord> {
        self.records.get(municipality_id)
    }

    pub fn insert(&mut self, municipality_id: String, record: TaxRecord) {
        self.records.insert(municipality_id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
