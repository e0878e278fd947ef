use crate::app::app_error::AppError;
use crate::model::price::{convert_scraped_prices, ScrapedPriceRecord};
use crate::util::fs;
use std::collections::BTreeMap;
use std::path::Path;

/// converts a raw scraped price dump into the canonical catalog shape
/// consumed by the merge and scoring stages. combining the result with
/// other catalogs is the merge stage's job.
pub fn run(scraped_filepath: &Path, output_filepath: &Path) -> Result<(), AppError> {
    let scraped: BTreeMap<String, ScrapedPriceRecord> = fs::read_json(scraped_filepath)?;
    let total = scraped.len();
    let (catalog, skipped) = convert_scraped_prices(&scraped);
    catalog.to_file(output_filepath)?;
    log::info!(
        "converted {} of {} scraped records ({} without a usable buy price)",
        catalog.len(),
        total,
        skipped
    );
    log::info!("saved converted prices to {}", output_filepath.display());
    Ok(())
}
