use crate::app::app_error::AppError;
use crate::model::municipality::MunicipalityCatalog;
use crate::model::price::{merge_price_sources, PriceCatalog, PriceSource};
use crate::util::stats;
use itertools::Itertools;
use std::path::Path;

/// merges per-source price catalogs into the canonical `prices.json`.
/// sources are `tag=file` arguments; argument order is priority order, so
/// the first source wins wherever it carries a usable price.
pub fn run(
    municipalities_filepath: &Path,
    source_args: &[String],
    output_filepath: &Path,
) -> Result<(), AppError> {
    if source_args.is_empty() {
        return Err(AppError::InvalidArgument(String::from(
            "at least one tag=file price source is required",
        )));
    }
    let municipalities = MunicipalityCatalog::from_file(municipalities_filepath)?;
    let sources = source_args
        .iter()
        .map(|arg| parse_source(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let (merged, summary) = merge_price_sources(&municipalities, &sources);
    merged.to_file(output_filepath)?;

    log::info!("total municipalities: {}", summary.municipalities);
    for (tag, available, used) in summary.sources.iter() {
        log::info!("  {}: {} available, {} used as winner", tag, available, used);
    }
    let coverage = if summary.municipalities > 0 {
        100.0 * summary.with_price as f64 / summary.municipalities as f64
    } else {
        0.0
    };
    log::info!(
        "merged: {} with a price ({:.1}%), {} still missing",
        summary.with_price,
        coverage,
        summary.municipalities - summary.with_price
    );
    let values = merged
        .iter()
        .filter_map(|(_, record)| record.chf_per_m2)
        .collect_vec();
    if let (Some(median), Some(mean)) = (stats::median(&values), stats::mean(&values)) {
        log::info!("CHF/m²: median {:.0}, mean {:.0}", median, mean);
    }
    log::info!("saved merged prices to {}", output_filepath.display());
    Ok(())
}

fn parse_source(arg: &str) -> Result<PriceSource, AppError> {
    let Some((tag, filepath)) = arg.split_once('=') else {
        return Err(AppError::InvalidArgument(format!(
            "price source '{}' is not in tag=file form",
            arg
        )));
    };
    let catalog = PriceCatalog::from_file(Path::new(filepath))?;
    Ok(PriceSource {
        tag: tag.to_string(),
        catalog,
    })
}
