use crate::app::app_error::AppError;
use crate::app::score::load_config;
use crate::model::point::PointCatalog;
use crate::model::travel_time::{
    aggregate_to_municipalities, AggregationMethod, TravelTimeMatrix,
};
use std::path::Path;

/// folds a point-keyed travel time matrix up to municipality level. the
/// output follows the same nested-mapping contract as the input, so it can
/// serve as the fallback matrix of a finer-grained scoring run.
pub fn run(
    points_filepath: &Path,
    matrix_filepath: &Path,
    output_filepath: &Path,
    config_filepath: Option<&Path>,
    method: AggregationMethod,
) -> Result<(), AppError> {
    let config = load_config(config_filepath)?;
    let points = PointCatalog::from_file(points_filepath)?;
    let matrix = TravelTimeMatrix::from_file(matrix_filepath)?;
    log::info!("points: {}", points.len());
    log::info!("point travel time rows: {}", matrix.len());

    let aggregated = aggregate_to_municipalities(&points, &matrix, &config.cities, method);
    aggregated.to_file(output_filepath)?;
    log::info!(
        "aggregated {} point rows into {} municipality rows ({} policy), saved to {}",
        matrix.len(),
        aggregated.len(),
        method,
        output_filepath.display()
    );
    Ok(())
}
