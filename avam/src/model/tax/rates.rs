use super::{TaxCatalog, TaxRecord};
use crate::util::stats::round2;
use serde::Deserialize;

/// one row of the ESTV income tax rates CSV export.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxRateRow {
    #[serde(default)]
    pub canton_id: Option<u32>,
    #[serde(default)]
    pub canton: String,
    pub bfs_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub canton_rate: Option<f64>,
    #[serde(default)]
    pub commune_rate: Option<f64>,
}

/// builds the tax catalog from rates rows. rows without a parseable BFS
/// number are skipped and counted. keys are zero-padded to four digits to
/// match the municipality register format; the ESTV export ships bare
/// integers, which would otherwise never join.
pub fn build_tax_catalog(rows: &[TaxRateRow]) -> (TaxCatalog, usize) {
    let mut catalog = TaxCatalog::default();
    let mut skipped = 0usize;
    for row in rows.iter() {
        let Ok(bfs) = row.bfs_id.trim().parse::<u32>() else {
            skipped += 1;
            continue;
        };
        let canton_rate = row.canton_rate.map(round2);
        let commune_rate = row.commune_rate.map(round2);
        let multiplier = match (canton_rate, commune_rate) {
            (Some(canton), Some(commune)) => Some(round2(canton + commune)),
            (Some(canton), None) => Some(canton),
            (None, Some(commune)) => Some(commune),
            (None, None) => None,
        };
        catalog.insert(
            format!("{:04}", bfs),
            TaxRecord {
                name: row.name.clone(),
                canton: row.canton.clone(),
                multiplier,
                canton_rate,
                commune_rate,
            },
        );
    }
    (catalog, skipped)
}
