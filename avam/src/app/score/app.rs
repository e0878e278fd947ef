use crate::app::app_error::AppError;
use crate::app::filenames;
use crate::model::municipality::MunicipalityCatalog;
use crate::model::output::scored_feature_collection;
use crate::model::point::PointCatalog;
use crate::model::price::PriceCatalog;
use crate::model::resolution::{
    MunicipalityResolution, PointResolution, Resolution, ResolutionModel,
};
use crate::model::score::{ScoredPoint, ScoringConfig, ScoringEngine};
use crate::model::tax::TaxCatalog;
use crate::model::travel_time::TravelTimeMatrix;
use crate::util::{fs, stats};
use itertools::Itertools;
use std::path::Path;

/// runs the scoring stage end to end: load the processed artifacts from
/// `data_dir`, enumerate scoring units at the requested resolution, score
/// them, and write the frontend feature collection.
///
/// only the municipality register is required. travel times, prices, and
/// taxes degrade to empty catalogs with a warning, so a partial pipeline
/// still produces a (sparsely scored) output.
pub fn run(
    data_dir: &Path,
    output_filepath: &Path,
    config_filepath: Option<&Path>,
    resolution: Resolution,
) -> Result<(), AppError> {
    let config = load_config(config_filepath)?;
    let municipalities =
        MunicipalityCatalog::from_file(&data_dir.join(filenames::MUNICIPALITIES))?;
    let prices = PriceCatalog::from_file_or_empty(&data_dir.join(filenames::PRICES))?;
    let taxes = TaxCatalog::from_file_or_empty(&data_dir.join(filenames::TAXES))?;
    let fallback_times =
        TravelTimeMatrix::from_file_or_empty(&data_dir.join(filenames::TRAVEL_TIMES))?;
    log::info!("municipalities: {}", municipalities.len());
    log::info!(
        "prices: {} ({} with a usable value)",
        prices.len(),
        prices.available()
    );
    log::info!("taxes: {}", taxes.len());
    log::info!("municipality travel time rows: {}", fallback_times.len());

    let enumeration = match resolution {
        Resolution::Municipality => {
            MunicipalityResolution::new(&municipalities, &fallback_times, &prices, &taxes)
                .units()?
        }
        Resolution::Plz | Resolution::Settlement => {
            let points = PointCatalog::from_file(&data_dir.join(points_filename(resolution)))?;
            let point_times = TravelTimeMatrix::from_file_or_empty(
                &data_dir.join(point_times_filename(resolution)),
            )?;
            log::info!("{} points: {}", resolution, points.len());
            log::info!("{} travel time rows: {}", resolution, point_times.len());
            PointResolution::new(
                resolution,
                &points,
                &municipalities,
                &point_times,
                &fallback_times,
                &prices,
                &taxes,
            )?
            .units()?
        }
    };
    if enumeration.orphaned > 0 {
        log::warn!(
            "{} records dropped before scoring: no municipality membership, unknown municipality, or no coordinate",
            enumeration.orphaned
        );
    }

    let engine = ScoringEngine::new(config)?;
    let scored = engine.score(&enumeration.units);
    let collection = scored_feature_collection(&scored, engine.config(), resolution, false)?;
    fs::write_json(&collection, output_filepath, false)?;
    log::info!(
        "saved scored feature collection to {}",
        output_filepath.display()
    );
    log_summary(&scored);
    Ok(())
}

/// loads the scoring configuration, falling back to the built-in Swiss
/// defaults when no file is given.
pub fn load_config(config_filepath: Option<&Path>) -> Result<ScoringConfig, AppError> {
    match config_filepath {
        Some(path) => {
            let config = ScoringConfig::from_file(path)?;
            log::info!("loaded scoring configuration from {}", path.display());
            Ok(config)
        }
        None => {
            log::info!("no configuration file given, using the built-in defaults");
            Ok(ScoringConfig::default())
        }
    }
}

/// logs the distribution of a finished run: score spread and how many
/// municipalities the features cover.
pub fn log_summary(scored: &[ScoredPoint]) {
    let scores = scored
        .iter()
        .filter_map(|point| point.autonomy_score)
        .collect_vec();
    log::info!("  {} features, {} scored", scored.len(), scores.len());
    if let (Some(lo), Some(hi)) = (
        scores.iter().copied().reduce(f64::min),
        scores.iter().copied().reduce(f64::max),
    ) {
        log::info!("  score range: {:.1} - {:.1}", lo, hi);
    }
    if let Some(median) = stats::median(&scores) {
        log::info!("  score median: {:.1}", median);
    }
    if let Some(mean) = stats::mean(&scores) {
        log::info!("  score mean: {:.1}", mean);
    }
    let covered = scored
        .iter()
        .map(|point| point.municipality_id.as_str())
        .unique()
        .count();
    log::info!("  covering {} municipalities", covered);
}

fn points_filename(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Municipality => filenames::MUNICIPALITIES,
        Resolution::Plz => filenames::PLZ_POINTS,
        Resolution::Settlement => filenames::SETTLEMENT_POINTS,
    }
}

fn point_times_filename(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Municipality => filenames::TRAVEL_TIMES,
        Resolution::Plz => filenames::PLZ_TRAVEL_TIMES,
        Resolution::Settlement => filenames::SETTLEMENT_TRAVEL_TIMES,
    }
}
