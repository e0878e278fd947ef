use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the travel modes the pipeline carries matrices for. serialized names
/// double as the top-level keys of the travel time file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    PublicTransport,
}

impl TravelMode {
    pub const ALL: [TravelMode; 2] = [TravelMode::Driving, TravelMode::PublicTransport];
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelMode::Driving => write!(f, "driving"),
            TravelMode::PublicTransport => write!(f, "public_transport"),
        }
    }
}
