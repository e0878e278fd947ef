mod geojson;

pub use self::geojson::scored_feature_collection;
