use super::{ComfortFactors, ScoringWeights};
use crate::model::city::ReferenceCity;
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// the full scoring parameterization: destination cities, sub-score
/// weights, and comfort factors. the default reproduces the published
/// Swiss setup; a TOML file overrides any subset of fields and inherits
/// the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub cities: Vec<ReferenceCity>,
    pub weights: ScoringWeights,
    pub comfort: ComfortFactors,
}

impl Default for ScoringConfig {
    fn default() -> ScoringConfig {
        ScoringConfig {
            cities: ReferenceCity::default_set(),
            weights: ScoringWeights::default(),
            comfort: ComfortFactors::default(),
        }
    }
}

impl ScoringConfig {
    pub fn from_file(path: &Path) -> Result<ScoringConfig, config::ConfigError> {
        let config = Config::builder()
            .add_source(config::File::new(
                &path.display().to_string(),
                FileFormat::Toml,
            ))
            .build()?;
        config.try_deserialize::<ScoringConfig>()
    }

    /// renders the configuration as a TOML template, the `init-config`
    /// output users start from.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_parameterization() {
        let config = ScoringConfig::default();
        assert_eq!(config.cities.len(), 10);
        assert_eq!(config.weights.accessibility_gain, 0.5);
        assert_eq!(config.comfort.av_factor, 0.7);
    }

    #[test]
    fn test_partial_toml_inherits_defaults() {
        let path = std::env::temp_dir().join("avam_partial_config.toml");
        std::fs::write(&path, "[comfort]\nav_factor = 0.5\n")
            .expect("write should succeed");
        let config = ScoringConfig::from_file(&path).expect("config should load");
        assert_eq!(config.comfort.av_factor, 0.5);
        assert_eq!(
            config.comfort.oev_sitting_factor, 0.7,
            "unspecified comfort factors should keep their defaults"
        );
        assert_eq!(config.cities.len(), 10);
        std::fs::remove_file(&path).expect("test file should be removable");
    }

    #[test]
    fn test_template_round_trip() {
        let path = std::env::temp_dir().join("avam_template_config.toml");
        let template = ScoringConfig::default()
            .to_toml()
            .expect("template should serialize");
        std::fs::write(&path, template).expect("write should succeed");
        let config = ScoringConfig::from_file(&path).expect("template should load back");
        assert_eq!(config, ScoringConfig::default());
        std::fs::remove_file(&path).expect("test file should be removable");
    }
}
