use super::{Enumeration, Resolution, ResolutionModel};
use crate::model::municipality::MunicipalityCatalog;
use crate::model::point::PointCatalog;
use crate::model::price::PriceCatalog;
use crate::model::score::{ScoreError, ScoringUnit};
use crate::model::tax::TaxCatalog;
use crate::model::travel_time::{CityDurations, TravelMode, TravelTimeMatrix};
use kdam::tqdm;

/// fine-grained resolution: one scoring unit per catalog point. a point
/// owns its travel times where the point matrix has a non-empty entry and
/// inherits the primary municipality's times per mode otherwise; price,
/// tax and identity always come from the primary municipality.
///
/// orphans are dropped and counted: points with an empty membership list,
/// a primary municipality missing from the register, or no resolvable
/// coordinate cannot be scored honestly.
pub struct PointResolution<'a> {
    resolution: Resolution,
    points: &'a PointCatalog,
    municipalities: &'a MunicipalityCatalog,
    point_times: &'a TravelTimeMatrix,
    fallback_times: &'a TravelTimeMatrix,
    prices: &'a PriceCatalog,
    taxes: &'a TaxCatalog,
}

impl<'a> PointResolution<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resolution: Resolution,
        points: &'a PointCatalog,
        municipalities: &'a MunicipalityCatalog,
        point_times: &'a TravelTimeMatrix,
        fallback_times: &'a TravelTimeMatrix,
        prices: &'a PriceCatalog,
        taxes: &'a TaxCatalog,
    ) -> Result<PointResolution<'a>, ScoreError> {
        if resolution == Resolution::Municipality {
            return Err(ScoreError::ConfigurationError(String::from(
                "municipality resolution does not enumerate points",
            )));
        }
        Ok(PointResolution {
            resolution,
            points,
            municipalities,
            point_times,
            fallback_times,
            prices,
            taxes,
        })
    }

    /// the point's own durations when present and non-empty, else the
    /// primary municipality's. an empty map means the fetcher skipped the
    /// point, not that every city is unreachable.
    fn resolve_times(&self, mode: TravelMode, point_id: &str, municipality_id: &str) -> CityDurations {
        match self.point_times.get(mode, point_id) {
            Some(durations) if !durations.is_empty() => durations.clone(),
            _ => self
                .fallback_times
                .get(mode, municipality_id)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl ResolutionModel for PointResolution<'_> {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn units(&self) -> Result<Enumeration, ScoreError> {
        let mut units = Vec::with_capacity(self.points.len());
        let mut orphaned = 0usize;
        for point in tqdm!(
            self.points.iter(),
            total = self.points.len(),
            desc = "resolve scoring units"
        ) {
            let Some(primary) = point.primary_municipality() else {
                log::debug!("point {} has no municipality membership", point.point_id);
                orphaned += 1;
                continue;
            };
            let Some(muni) = self.municipalities.get(primary) else {
                log::debug!(
                    "point {} maps to municipality {} not in the register",
                    point.point_id,
                    primary
                );
                orphaned += 1;
                continue;
            };
            let Some((lat, lon)) = point.coordinate() else {
                log::debug!("point {} has no resolvable coordinate", point.point_id);
                orphaned += 1;
                continue;
            };
            units.push(ScoringUnit {
                feature_id: self.resolution.feature_id(&point.point_id),
                point_id: point.point_id.clone(),
                municipality_id: muni.id.clone(),
                name: muni.name.clone(),
                canton: muni.canton.clone(),
                canton_code: muni.canton_code.clone(),
                lat,
                lon,
                driving: self.resolve_times(TravelMode::Driving, &point.point_id, &muni.id),
                transit: self.resolve_times(
                    TravelMode::PublicTransport,
                    &point.point_id,
                    &muni.id,
                ),
                chf_per_m2: self.prices.get(&muni.id).and_then(|r| r.chf_per_m2),
                tax_multiplier: self.taxes.get(&muni.id).and_then(|r| r.multiplier),
            });
        }
        Ok(Enumeration { units, orphaned })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::municipality::Municipality;
    use crate::model::point::PointRecord;
    use serde_json::json;

    struct Fixture {
        points: PointCatalog,
        municipalities: MunicipalityCatalog,
        point_times: TravelTimeMatrix,
        fallback_times: TravelTimeMatrix,
        prices: PriceCatalog,
        taxes: TaxCatalog,
    }

    fn fixture() -> Fixture {
        let points = PointCatalog::new(vec![
            PointRecord {
                point_id: String::from("8001"),
                name: String::from("Zürich"),
                lat: Some(47.37),
                lon: Some(8.54),
                e_lv95: None,
                n_lv95: None,
                municipality_ids: vec![String::from("0261")],
            },
            PointRecord {
                point_id: String::from("8105"),
                name: String::from("Regensdorf"),
                lat: Some(47.43),
                lon: Some(8.46),
                e_lv95: None,
                n_lv95: None,
                municipality_ids: vec![String::from("0096"), String::from("0261")],
            },
            PointRecord {
                point_id: String::from("9999"),
                name: String::from("Nirgendwo"),
                lat: Some(46.0),
                lon: Some(9.0),
                e_lv95: None,
                n_lv95: None,
                municipality_ids: vec![String::from("7777")],
            },
        ]);
        let records: Vec<Municipality> = serde_json::from_value(json!([
            {"id": "0261", "name": "Zürich", "canton": "Zürich", "canton_code": "ZH", "lat": 47.37, "lon": 8.54},
            {"id": "0096", "name": "Regensdorf", "canton": "Zürich", "canton_code": "ZH", "lat": 47.43, "lon": 8.46}
        ]))
        .expect("register fixture should deserialize");
        let municipalities = MunicipalityCatalog::new(records);
        let point_times: TravelTimeMatrix = serde_json::from_value(json!({
            "driving": {"8001": {"bern": 4980}, "8105": {}}
        }))
        .expect("point matrix should deserialize");
        let fallback_times: TravelTimeMatrix = serde_json::from_value(json!({
            "driving": {"0096": {"bern": 5400}},
            "public_transport": {"0261": {"bern": 3420}}
        }))
        .expect("fallback matrix should deserialize");
        let prices: PriceCatalog =
            serde_json::from_value(json!({"0261": {"chf_per_m2": 13500}}))
                .expect("prices fixture should deserialize");
        Fixture {
            points,
            municipalities,
            point_times,
            fallback_times,
            prices,
            taxes: TaxCatalog::default(),
        }
    }

    fn enumerate(f: &Fixture) -> Enumeration {
        PointResolution::new(
            Resolution::Plz,
            &f.points,
            &f.municipalities,
            &f.point_times,
            &f.fallback_times,
            &f.prices,
            &f.taxes,
        )
        .expect("model construction should succeed")
        .units()
        .expect("enumeration should succeed")
    }

    #[test]
    fn test_own_times_win_over_fallback() {
        let f = fixture();
        let enumeration = enumerate(&f);
        let zurich = &enumeration.units[0];
        assert_eq!(zurich.feature_id, "plz_8001");
        assert_eq!(zurich.driving.get("bern"), Some(&Some(4980)));
        assert_eq!(
            zurich.transit.get("bern"),
            Some(&Some(3420)),
            "fallback should apply per mode, not all-or-nothing"
        );
    }

    #[test]
    fn test_empty_point_entry_falls_back() {
        let f = fixture();
        let enumeration = enumerate(&f);
        let regensdorf = &enumeration.units[1];
        assert_eq!(
            regensdorf.driving.get("bern"),
            Some(&Some(5400)),
            "an empty point entry means unfetched, so the municipality's times apply"
        );
    }

    #[test]
    fn test_identity_comes_from_primary_municipality() {
        let f = fixture();
        let enumeration = enumerate(&f);
        let regensdorf = &enumeration.units[1];
        assert_eq!(regensdorf.municipality_id, "0096");
        assert_eq!(regensdorf.name, "Regensdorf");
        assert_eq!(
            regensdorf.chf_per_m2, None,
            "price joins through the primary municipality only"
        );
    }

    #[test]
    fn test_orphans_are_dropped_and_counted() {
        let f = fixture();
        let enumeration = enumerate(&f);
        assert_eq!(enumeration.units.len(), 2);
        assert_eq!(
            enumeration.orphaned, 1,
            "a point whose municipality is not in the register is an orphan"
        );
    }

    #[test]
    fn test_municipality_resolution_is_rejected() {
        let f = fixture();
        let result = PointResolution::new(
            Resolution::Municipality,
            &f.points,
            &f.municipalities,
            &f.point_times,
            &f.fallback_times,
            &f.prices,
            &f.taxes,
        );
        assert!(result.is_err());
    }
}
