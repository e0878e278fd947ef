use crate::app::app_error::AppError;
use crate::app::score::load_config;
use crate::model::municipality::MunicipalityCatalog;
use crate::model::point::PointCatalog;
use crate::model::travel_time::{
    estimate_public_transport, EstimateSite, TravelMode, TravelTimeMatrix,
};
use std::path::Path;

/// fills the public transport half of a travel time matrix from its driving
/// half using the distance-calibrated estimation model. for runs where no
/// transit routing source covers the location set.
///
/// `locations_filepath` names the catalog the matrix is keyed by: the
/// municipality register by default, or a point catalog with `points`.
pub fn run(
    locations_filepath: &Path,
    matrix_filepath: &Path,
    output_filepath: &Path,
    config_filepath: Option<&Path>,
    points: bool,
) -> Result<(), AppError> {
    let config = load_config(config_filepath)?;
    let mut matrix = TravelTimeMatrix::from_file(matrix_filepath)?;
    let sites = if points {
        point_sites(locations_filepath)?
    } else {
        municipality_sites(locations_filepath)?
    };

    let existing = matrix.mode(TravelMode::PublicTransport).len();
    if existing > 0 {
        log::warn!(
            "matrix already carries {} public transport rows, replacing them with estimates",
            existing
        );
    }
    let estimated =
        estimate_public_transport(&sites, matrix.mode(TravelMode::Driving), &config.cities);
    log::info!(
        "estimated public transport durations for {} locations from {} driving rows",
        sites.len(),
        matrix.mode(TravelMode::Driving).len()
    );
    *matrix.mode_mut(TravelMode::PublicTransport) = estimated;
    matrix.to_file(output_filepath)?;
    log::info!("saved estimated matrix to {}", output_filepath.display());
    Ok(())
}

fn municipality_sites(path: &Path) -> Result<Vec<EstimateSite>, AppError> {
    let catalog = MunicipalityCatalog::from_file(path)?;
    Ok(catalog
        .iter()
        .map(|muni| EstimateSite {
            id: muni.id.clone(),
            lat: muni.lat,
            lon: muni.lon,
        })
        .collect())
}

/// point records without a usable coordinate cannot be estimated and are
/// skipped with a warning.
fn point_sites(path: &Path) -> Result<Vec<EstimateSite>, AppError> {
    let catalog = PointCatalog::from_file(path)?;
    let mut sites = Vec::with_capacity(catalog.len());
    for record in catalog.iter() {
        match record.coordinate() {
            Some((lat, lon)) => sites.push(EstimateSite {
                id: record.point_id.clone(),
                lat,
                lon,
            }),
            None => log::warn!(
                "point {} has no usable coordinate, skipping estimation",
                record.point_id
            ),
        }
    }
    Ok(sites)
}
