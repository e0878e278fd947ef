use super::{PriceCatalog, PriceRecord};
use serde::Deserialize;
use std::collections::BTreeMap;

/// one municipality's entry in a raw scraped price dump. field presence
/// varies with which portals the scraper reached.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapedPriceRecord {
    #[serde(default)]
    pub buy_apartment_chf_m2: Option<f64>,
    #[serde(default)]
    pub buy_house_chf_m2: Option<f64>,
    #[serde(default)]
    pub homegate_buy_apartment_chf_m2: Option<f64>,
    #[serde(default)]
    pub immoscout24_buy_apartment_chf_m2: Option<f64>,
    #[serde(default)]
    pub rent_apartment_chf_m2: Option<f64>,
    #[serde(default)]
    pub buy_apartment_min: Option<f64>,
    #[serde(default)]
    pub buy_apartment_max: Option<f64>,
    #[serde(default)]
    pub source: Option<String>,
}

impl ScrapedPriceRecord {
    /// canonical buy price, preferring the aggregate apartment figure and
    /// degrading to houses and then portal-specific fields.
    fn canonical_price(&self) -> Option<f64> {
        self.buy_apartment_chf_m2
            .or(self.buy_house_chf_m2)
            .or(self.homegate_buy_apartment_chf_m2)
            .or(self.immoscout24_buy_apartment_chf_m2)
    }
}

/// converts a raw scraped dump into the canonical price catalog. entries
/// without a positive price are dropped and counted; prices are rounded to
/// whole CHF.
pub fn convert_scraped_prices(
    scraped: &BTreeMap<String, ScrapedPriceRecord>,
) -> (PriceCatalog, usize) {
    let mut catalog = PriceCatalog::default();
    let mut skipped = 0usize;
    for (municipality_id, raw) in scraped.iter() {
        match raw.canonical_price().filter(|price| *price > 0.0) {
            None => skipped += 1,
            Some(price) => {
                let record = PriceRecord {
                    chf_per_m2: Some(price.round()),
                    source: Some(
                        raw.source
                            .clone()
                            .unwrap_or_else(|| String::from("scraped")),
                    ),
                    rent_chf_m2: raw.rent_apartment_chf_m2,
                    buy_min: raw.buy_apartment_min,
                    buy_max: raw.buy_apartment_max,
                    secondary: BTreeMap::new(),
                };
                catalog.insert(municipality_id.clone(), record);
            }
        }
    }
    (catalog, skipped)
}
