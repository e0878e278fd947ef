use super::{
    accessibility_gain_per_city, combine_components, inherent_attractiveness,
    mean_accessibility_gain, normalize_scores, status_quo_access, ScoreError, ScoredPoint,
    ScoringConfig, ScoringUnit,
};
use crate::model::travel_time::CityDurations;
use crate::util::stats::round1;
use itertools::{izip, Itertools};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// the scoring engine. scoring is a whole-collection operation: raw values
/// are computed per unit independently, but the normalization that turns
/// them into 0–100 sub-scores ranges over the entire run, so units can only
/// be scored together.
pub struct ScoringEngine {
    config: ScoringConfig,
}

/// phase-one output for one unit, before any cross-unit operation.
struct RawScores {
    gain_per_city: BTreeMap<String, Option<f64>>,
    accessibility_gain: Option<f64>,
    status_quo: Option<f64>,
    attractiveness: Option<f64>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Result<ScoringEngine, ScoreError> {
        if config.cities.is_empty() {
            return Err(ScoreError::ConfigurationError(String::from(
                "reference city table is empty",
            )));
        }
        Ok(ScoringEngine { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// scores a collection of units. the raw phase runs in parallel and
    /// preserves unit order; normalization and combination are sequential
    /// and cheap.
    pub fn score(&self, units: &[ScoringUnit]) -> Vec<ScoredPoint> {
        let raw = units
            .par_iter()
            .map(|unit| self.raw_scores(unit))
            .collect::<Vec<_>>();
        let gain_scores = normalize_scores(
            &raw.iter().map(|r| r.accessibility_gain).collect_vec(),
            false,
        );
        let attractiveness_scores =
            normalize_scores(&raw.iter().map(|r| r.attractiveness).collect_vec(), false);
        izip!(units, raw, gain_scores, attractiveness_scores)
            .map(|(unit, raw, gain, attractiveness)| self.assemble(unit, raw, gain, attractiveness))
            .collect_vec()
    }

    fn raw_scores(&self, unit: &ScoringUnit) -> RawScores {
        let gain_per_city = accessibility_gain_per_city(
            &unit.driving,
            &unit.transit,
            &self.config.cities,
            &self.config.comfort,
        );
        let accessibility_gain = mean_accessibility_gain(&gain_per_city);
        let status_quo = status_quo_access(
            &unit.driving,
            &unit.transit,
            &self.config.cities,
            &self.config.comfort,
        );
        let attractiveness = inherent_attractiveness(unit.chf_per_m2, status_quo);
        RawScores {
            gain_per_city,
            accessibility_gain,
            status_quo,
            attractiveness,
        }
    }

    fn assemble(
        &self,
        unit: &ScoringUnit,
        raw: RawScores,
        score_accessibility: Option<f64>,
        score_attractiveness: Option<f64>,
    ) -> ScoredPoint {
        let weights = &self.config.weights;
        let autonomy_score = combine_components(&[
            (weights.accessibility_gain, score_accessibility),
            (weights.inherent_attractiveness, score_attractiveness),
        ]);

        // best city by strict greatest unrounded gain; earlier configured
        // cities win ties
        let mut best_city: Option<String> = None;
        let mut best_gain = f64::NEG_INFINITY;
        for city in self.config.cities.iter() {
            if let Some(gain) = raw.gain_per_city.get(&city.id).copied().flatten() {
                if gain > best_gain {
                    best_gain = gain;
                    best_city = Some(city.id.clone());
                }
            }
        }

        let drive_times = self.complete(&unit.driving);
        let pt_times = self.complete(&unit.transit);
        let min_drive_s = drive_times.values().copied().flatten().min();
        let min_pt_s = pt_times.values().copied().flatten().min();

        ScoredPoint {
            id: unit.feature_id.clone(),
            point_id: unit.point_id.clone(),
            municipality_id: unit.municipality_id.clone(),
            name: unit.name.clone(),
            canton: unit.canton.clone(),
            canton_code: unit.canton_code.clone(),
            lat: unit.lat,
            lon: unit.lon,
            drive_times,
            pt_times,
            min_drive_s,
            min_pt_s,
            gain_per_city: raw
                .gain_per_city
                .iter()
                .map(|(city, gain)| (city.clone(), gain.map(round1)))
                .collect(),
            best_city,
            chf_per_m2: unit.chf_per_m2,
            tax_multiplier: unit.tax_multiplier,
            status_quo_access: raw.status_quo.map(round1),
            inherent_attractiveness_raw: raw.attractiveness.map(round1),
            score_accessibility,
            score_attractiveness,
            autonomy_score,
        }
    }

    /// re-keys a duration map over the full configured city list so every
    /// output point carries every city, null where unknown.
    fn complete(&self, durations: &CityDurations) -> CityDurations {
        self.config
            .cities
            .iter()
            .map(|city| (city.id.clone(), durations.get(&city.id).copied().flatten()))
            .collect()
    }
}
