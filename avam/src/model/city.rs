use serde::{Deserialize, Serialize};

/// one reference destination, anchored at its main railway station. the
/// order of the configured city list is the canonical iteration order for
/// every per-city aggregate, which keeps runs deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCity {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl ReferenceCity {
    pub fn new(id: &str, name: &str, lat: f64, lon: f64) -> ReferenceCity {
        ReferenceCity {
            id: String::from(id),
            name: String::from(name),
            lat,
            lon,
        }
    }

    /// the ten largest Swiss employment centers, the default destination set.
    pub fn default_set() -> Vec<ReferenceCity> {
        vec![
            ReferenceCity::new("zurich", "Zürich HB", 47.3769, 8.5417),
            ReferenceCity::new("bern", "Bern HB", 46.9490, 7.4395),
            ReferenceCity::new("basel", "Basel SBB", 47.5476, 7.5891),
            ReferenceCity::new("luzern", "Luzern Bf", 47.0502, 8.3093),
            ReferenceCity::new("geneve", "Genève Cornavin", 46.2100, 6.1426),
            ReferenceCity::new("lausanne", "Lausanne Gare", 46.5168, 6.6294),
            ReferenceCity::new("stgallen", "St. Gallen HB", 47.4233, 9.3696),
            ReferenceCity::new("lugano", "Lugano Bf", 46.0054, 8.9468),
            ReferenceCity::new("winterthur", "Winterthur HB", 47.5001, 8.7237),
            ReferenceCity::new("biel", "Biel/Bienne", 47.1326, 7.2474),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_set_has_ten_unique_cities() {
        let cities = ReferenceCity::default_set();
        assert_eq!(cities.len(), 10);
        let mut ids = cities.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10, "city ids should be unique");
    }

    #[test]
    fn test_default_set_starts_with_zurich() {
        let cities = ReferenceCity::default_set();
        assert_eq!(cities[0].id, "zurich");
    }
}
