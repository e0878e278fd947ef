use super::synthesize;
use crate::app::app_error::AppError;
use crate::app::filenames;
use crate::app::score::{load_config, log_summary};
use crate::model::municipality::MunicipalityCatalog;
use crate::model::output::scored_feature_collection;
use crate::model::price::PriceCatalog;
use crate::model::resolution::{MunicipalityResolution, Resolution, ResolutionModel};
use crate::model::score::ScoringEngine;
use crate::model::tax::TaxCatalog;
use crate::util::fs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// scores every municipality against synthetic travel times so frontend
/// work can start before the fetch stages have run. real prices and taxes
/// are used when present; missing prices are synthesized too. the output
/// is shaped exactly like a real scoring run and tagged `demo` in its
/// metadata.
pub fn run(
    data_dir: &Path,
    output_filepath: &Path,
    config_filepath: Option<&Path>,
    seed: u64,
) -> Result<(), AppError> {
    let config = load_config(config_filepath)?;
    let municipalities =
        MunicipalityCatalog::from_file(&data_dir.join(filenames::MUNICIPALITIES))?;
    let taxes = TaxCatalog::from_file_or_empty(&data_dir.join(filenames::TAXES))?;
    let mut prices = PriceCatalog::from_file_or_empty(&data_dir.join(filenames::PRICES))?;

    let mut rng = StdRng::seed_from_u64(seed);
    if prices.available() == 0 {
        log::info!("no usable price data found, synthesizing demo prices");
        prices = synthesize::synthetic_prices(&municipalities, &config.cities, &taxes, &mut rng);
    }
    log::info!(
        "generating demo travel times for {} municipalities (seed {})",
        municipalities.len(),
        seed
    );
    let travel_times =
        synthesize::synthetic_travel_times(&municipalities, &config.cities, &mut rng);

    let enumeration =
        MunicipalityResolution::new(&municipalities, &travel_times, &prices, &taxes).units()?;
    let engine = ScoringEngine::new(config)?;
    let scored = engine.score(&enumeration.units);
    let collection =
        scored_feature_collection(&scored, engine.config(), Resolution::Municipality, true)?;
    fs::write_json(&collection, output_filepath, false)?;
    log::info!(
        "saved demo feature collection to {}",
        output_filepath.display()
    );
    log_summary(&scored);
    Ok(())
}
