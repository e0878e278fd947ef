use serde::{Deserialize, Serialize};
use uom::si::f64::Time;
use uom::si::time::{minute, second};

/// perceived-burden weighting per travel situation. a comfort factor below
/// one means time in that situation counts for less than the clock says:
/// a passenger who can work or rest does not experience the full duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortFactors {
    /// scales driving time when the vehicle drives itself
    pub av_factor: f64,
    /// scales in-vehicle transit time, assuming a seat
    pub oev_sitting_factor: f64,
    /// scales time spent waiting for a connection
    pub wait_penalty_factor: f64,
    /// flat perceived cost per transfer, in minutes
    pub transfer_penalty_min: f64,
    /// scales walking legs of a transit trip
    pub walk_factor: f64,
}

impl Default for ComfortFactors {
    fn default() -> ComfortFactors {
        ComfortFactors {
            av_factor: 0.7,
            oev_sitting_factor: 0.7,
            wait_penalty_factor: 2.0,
            transfer_penalty_min: 10.0,
            walk_factor: 1.75,
        }
    }
}

/// the travel situations the comfort model distinguishes. manual driving is
/// the unweighted baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortMode {
    DrivingAv,
    DrivingManual,
    PublicTransport,
}

/// converts a raw duration into comfort-weighted minutes for one mode.
pub fn comfort_minutes(raw_seconds: u32, mode: ComfortMode, factors: &ComfortFactors) -> f64 {
    let minutes = Time::new::<second>(raw_seconds as f64).get::<minute>();
    let factor = match mode {
        ComfortMode::DrivingAv => factors.av_factor,
        ComfortMode::DrivingManual => 1.0,
        ComfortMode::PublicTransport => factors.oev_sitting_factor,
    };
    minutes * factor
}
