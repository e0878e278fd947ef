use super::TravelMode;
use crate::util::fs::{self, FileError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// per-destination durations in whole seconds. null marks a destination the
/// source could not produce a value for; it is carried, never defaulted.
pub type CityDurations = BTreeMap<String, Option<u32>>;

/// the travel time matrix file: per mode, a map from location id (BFS
/// number, PLZ code or settlement uuid) to per-city durations. ordered maps
/// keep serialization deterministic so reruns over identical inputs produce
/// identical files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeMatrix {
    #[serde(default)]
    pub driving: BTreeMap<String, CityDurations>,
    #[serde(default)]
    pub public_transport: BTreeMap<String, CityDurations>,
}

impl TravelTimeMatrix {
    pub fn from_file(path: &Path) -> Result<TravelTimeMatrix, FileError> {
        fs::read_json(path)
    }

    /// loads a matrix, treating a missing file as empty. the scoring stage
    /// tolerates absent modes by design, so this is a warning rather than
    /// an error.
    pub fn from_file_or_empty(path: &Path) -> Result<TravelTimeMatrix, FileError> {
        fs::read_json_or_default(path)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), FileError> {
        fs::write_json(self, path, true)
    }

    pub fn mode(&self, mode: TravelMode) -> &BTreeMap<String, CityDurations> {
        match mode {
            TravelMode::Driving => &self.driving,
            TravelMode::PublicTransport => &self.public_transport,
        }
    }

    pub fn mode_mut(&mut self, mode: TravelMode) -> &mut BTreeMap<String, CityDurations> {
        match mode {
            TravelMode::Driving => &mut self.driving,
            TravelMode::PublicTransport => &mut self.public_transport,
        }
    }

    /// per-city durations for one location and mode, if the matrix has an
    /// entry for it at all.
    pub fn get(&self, mode: TravelMode, location_id: &str) -> Option<&CityDurations> {
        self.mode(mode).get(location_id)
    }

    /// number of locations present in either mode.
    pub fn len(&self) -> usize {
        let mut ids = self.driving.keys().collect::<std::collections::BTreeSet<_>>();
        ids.extend(self.public_transport.keys());
        ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.driving.is_empty() && self.public_transport.is_empty()
    }
}
