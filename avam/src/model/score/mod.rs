mod attractiveness;
mod combine;
mod comfort;
mod config;
mod engine;
mod gain;
mod normalize;
mod score_error;
mod scored_point;
mod status_quo;
mod unit;
mod weights;

pub use attractiveness::inherent_attractiveness;
pub use combine::combine_components;
pub use comfort::{comfort_minutes, ComfortFactors, ComfortMode};
pub use config::ScoringConfig;
pub use engine::ScoringEngine;
pub use gain::{accessibility_gain_per_city, mean_accessibility_gain};
pub use normalize::normalize_scores;
pub use score_error::ScoreError;
pub use scored_point::ScoredPoint;
pub use status_quo::status_quo_access;
pub use unit::ScoringUnit;
pub use weights::ScoringWeights;
