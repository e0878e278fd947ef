mod municipality_model;
mod point_model;

pub use municipality_model::MunicipalityResolution;
pub use point_model::PointResolution;

use crate::model::score::{ScoreError, ScoringUnit};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the granularity a scoring run operates at. one scored feature per
/// municipality, per postal code, or per settlement point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Municipality,
    #[default]
    Plz,
    Settlement,
}

impl Resolution {
    /// output feature id for a location id at this resolution. prefixes
    /// keep ids unambiguous when consumers mix files from different runs.
    pub fn feature_id(&self, point_id: &str) -> String {
        match self {
            Resolution::Municipality => point_id.to_string(),
            Resolution::Plz => format!("plz_{}", point_id),
            Resolution::Settlement => format!("settlement_{}", point_id),
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Municipality => write!(f, "municipality"),
            Resolution::Plz => write!(f, "plz"),
            Resolution::Settlement => write!(f, "settlement"),
        }
    }
}

/// the outcome of unit enumeration: units in deterministic input order,
/// plus the count of records dropped for structural reasons.
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub units: Vec<ScoringUnit>,
    pub orphaned: usize,
}

/// a strategy for turning input catalogs into scoring units. implementors
/// decide what a "point" is, which municipality it belongs to, and whether
/// its travel times are its own or inherited.
pub trait ResolutionModel {
    fn resolution(&self) -> Resolution;

    /// enumerates scoring units in deterministic input order. orphaned
    /// records are dropped and counted, never scored.
    fn units(&self) -> Result<Enumeration, ScoreError>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_feature_id_prefixes() {
        assert_eq!(Resolution::Municipality.feature_id("0261"), "0261");
        assert_eq!(Resolution::Plz.feature_id("8001"), "plz_8001");
        assert_eq!(
            Resolution::Settlement.feature_id("abc-123"),
            "settlement_abc-123"
        );
    }
}
