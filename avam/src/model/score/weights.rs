use serde::{Deserialize, Serialize};

/// relative weights of the two sub-scores in the combined score. they are
/// renormalized over whichever sub-scores are present per point, so they
/// need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub accessibility_gain: f64,
    pub inherent_attractiveness: f64,
}

impl Default for ScoringWeights {
    fn default() -> ScoringWeights {
        ScoringWeights {
            accessibility_gain: 0.5,
            inherent_attractiveness: 0.5,
        }
    }
}
