use crate::app::app_error::AppError;
use crate::model::tax::{build_tax_catalog, TaxRateRow};
use crate::util::fs;
use std::path::Path;

/// builds the tax multiplier catalog from the cantonal income rates CSV
/// export.
pub fn run(rates_filepath: &Path, output_filepath: &Path) -> Result<(), AppError> {
    let rows: Vec<TaxRateRow> = fs::read_csv(rates_filepath)?;
    let (catalog, skipped) = build_tax_catalog(&rows);
    if skipped > 0 {
        log::warn!("{} rows skipped: municipality id not parseable", skipped);
    }
    catalog.to_file(output_filepath)?;
    log::info!(
        "saved {} tax records from {} rows to {}",
        catalog.len(),
        rows.len(),
        output_filepath.display()
    );
    Ok(())
}
