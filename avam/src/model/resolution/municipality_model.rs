use super::{Enumeration, Resolution, ResolutionModel};
use crate::model::municipality::MunicipalityCatalog;
use crate::model::price::PriceCatalog;
use crate::model::score::{ScoreError, ScoringUnit};
use crate::model::tax::TaxCatalog;
use crate::model::travel_time::{TravelMode, TravelTimeMatrix};
use itertools::Itertools;

/// coarse resolution: every register municipality is one scoring unit and
/// owns its travel times directly. municipalities absent from the matrix
/// are still emitted, with all-null durations, so the output covers the
/// whole register.
pub struct MunicipalityResolution<'a> {
    municipalities: &'a MunicipalityCatalog,
    travel_times: &'a TravelTimeMatrix,
    prices: &'a PriceCatalog,
    taxes: &'a TaxCatalog,
}

impl<'a> MunicipalityResolution<'a> {
    pub fn new(
        municipalities: &'a MunicipalityCatalog,
        travel_times: &'a TravelTimeMatrix,
        prices: &'a PriceCatalog,
        taxes: &'a TaxCatalog,
    ) -> MunicipalityResolution<'a> {
        MunicipalityResolution {
            municipalities,
            travel_times,
            prices,
            taxes,
        }
    }
}

impl ResolutionModel for MunicipalityResolution<'_> {
    fn resolution(&self) -> Resolution {
        Resolution::Municipality
    }

    fn units(&self) -> Result<Enumeration, ScoreError> {
        let units = self
            .municipalities
            .iter()
            .map(|muni| ScoringUnit {
                feature_id: self.resolution().feature_id(&muni.id),
                point_id: muni.id.clone(),
                municipality_id: muni.id.clone(),
                name: muni.name.clone(),
                canton: muni.canton.clone(),
                canton_code: muni.canton_code.clone(),
                lat: muni.lat,
                lon: muni.lon,
                driving: self
                    .travel_times
                    .get(TravelMode::Driving, &muni.id)
                    .cloned()
                    .unwrap_or_default(),
                transit: self
                    .travel_times
                    .get(TravelMode::PublicTransport, &muni.id)
                    .cloned()
                    .unwrap_or_default(),
                chf_per_m2: self.prices.get(&muni.id).and_then(|r| r.chf_per_m2),
                tax_multiplier: self.taxes.get(&muni.id).and_then(|r| r.multiplier),
            })
            .collect_vec();
        Ok(Enumeration { units, orphaned: 0 })
    }
}
