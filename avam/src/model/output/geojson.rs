use crate::model::resolution::Resolution;
use crate::model::score::{ScoredPoint, ScoringConfig};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};

/// assembles the published feature collection: one point feature per scored
/// unit, with every scored field except the coordinates carried as a
/// property, plus a top-level metadata member recording the configuration
/// the run was scored under so the file is self-describing.
pub fn scored_feature_collection(
    scored: &[ScoredPoint],
    config: &ScoringConfig,
    resolution: Resolution,
    demo: bool,
) -> Result<FeatureCollection, serde_json::Error> {
    let features = scored
        .iter()
        .map(to_feature)
        .collect::<Result<Vec<_>, _>>()?;

    let mut cities = JsonObject::new();
    for city in config.cities.iter() {
        cities.insert(
            city.id.clone(),
            serde_json::Value::String(city.name.clone()),
        );
    }

    let mut metadata = JsonObject::new();
    metadata.insert(String::from("cities"), serde_json::Value::Object(cities));
    metadata.insert(
        String::from("scoring_weights"),
        serde_json::to_value(&config.weights)?,
    );
    metadata.insert(
        String::from("comfort_factors"),
        serde_json::to_value(&config.comfort)?,
    );
    metadata.insert(
        String::from("resolution"),
        serde_json::to_value(resolution)?,
    );
    if demo {
        metadata.insert(String::from("demo"), serde_json::Value::Bool(true));
    }

    let mut foreign_members = JsonObject::new();
    foreign_members.insert(String::from("metadata"), serde_json::Value::Object(metadata));

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    })
}

fn to_feature(point: &ScoredPoint) -> Result<Feature, serde_json::Error> {
    let mut properties = match serde_json::to_value(point)? {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    // the coordinates live on the geometry, not the properties
    properties.remove("lat");
    properties.remove("lon");

    let geometry = Geometry::new(geojson::Value::Point(vec![point.lon, point.lat]));

    Ok(Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
