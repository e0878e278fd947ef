use crate::util::fs::{self, FileError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// one Swiss municipality as published in the BFS register, keyed by its
/// BFS number serialized as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Municipality {
    pub id: String,
    pub name: String,
    pub canton: String,
    pub canton_code: String,
    #[serde(default)]
    pub district: String,
    pub lat: f64,
    pub lon: f64,
}

/// the municipality register. preserves file order for deterministic
/// enumeration and keeps an id lookup for joins.
#[derive(Debug, Clone, Default)]
pub struct MunicipalityCatalog {
    records: Vec<Municipality>,
    index: HashMap<String, usize>,
}

impl MunicipalityCatalog {
    pub fn new(records: Vec<Municipality>) -> MunicipalityCatalog {
        let mut catalog = MunicipalityCatalog {
            records: Vec::with_capacity(records.len()),
            index: HashMap::with_capacity(records.len()),
        };
        for record in records.into_iter() {
            if catalog.index.contains_key(&record.id) {
                log::warn!(
                    "duplicate municipality id {} ({}) in catalog, keeping first occurrence",
                    record.id,
                    record.name
                );
                continue;
            }
            catalog.index.insert(record.id.clone(), catalog.records.len());
            catalog.records.push(record);
        }
        catalog
    }

    pub fn from_file(path: &Path) -> Result<MunicipalityCatalog, FileError> {
        let records: Vec<Municipality> = fs::read_json(path)?;
        Ok(MunicipalityCatalog::new(records))
    }

    pub fn get(&self, id: &str) -> Option<&Municipality> {
        self.index.get(id).map(|idx| &self.records[*idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Municipality> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
