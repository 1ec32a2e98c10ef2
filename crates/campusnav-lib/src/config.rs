//! Navigation settings shared by the graph builder and route summaries.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geodesic::GeodesicFormula;

/// Default maximum geodesic length (meters) of a directly walkable edge.
pub const DEFAULT_THRESHOLD_METERS: f64 = 10_000.0;

/// Default walking speed in meters per second.
pub const DEFAULT_WALKING_SPEED_MPS: f64 = 1.4;

/// Default average step length in meters.
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.8;

/// How edge weights are derived from geodesic distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPrecision {
    /// Truncate every edge to whole meters before it is summed.
    #[default]
    WholeMeters,
    /// Keep full-precision weights and truncate only reported totals.
    Exact,
}

impl WeightPrecision {
    /// Apply the precision rule to a raw geodesic distance.
    pub fn apply(self, meters: f64) -> f64 {
        match self {
            WeightPrecision::WholeMeters => meters.trunc(),
            WeightPrecision::Exact => meters,
        }
    }
}

/// Pedestrian parameters used to derive walking time and step count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingProfile {
    pub speed_mps: f64,
    pub step_length_m: f64,
}

impl Default for WalkingProfile {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_WALKING_SPEED_MPS,
            step_length_m: DEFAULT_STEP_LENGTH_M,
        }
    }
}

impl WalkingProfile {
    /// Minutes needed to walk `meters` at the configured speed.
    pub fn walking_time_minutes(&self, meters: f64) -> f64 {
        meters / self.speed_mps / 60.0
    }

    /// Whole steps needed to cover `meters`.
    pub fn step_count(&self, meters: f64) -> u64 {
        (meters / self.step_length_m).floor() as u64
    }
}

/// Top-level configuration for a navigation session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    pub threshold_meters: f64,
    pub walking: WalkingProfile,
    pub precision: WeightPrecision,
    #[serde(default)]
    pub formula: GeodesicFormula,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            threshold_meters: DEFAULT_THRESHOLD_METERS,
            walking: WalkingProfile::default(),
            precision: WeightPrecision::default(),
            formula: GeodesicFormula::default(),
        }
    }
}

impl NavConfig {
    /// Reject settings that would make distances or derived metrics meaningless.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("threshold", self.threshold_meters)?;
        ensure_positive("walking speed", self.walking.speed_mps)?;
        ensure_positive("step length", self.walking.step_length_m)?;
        Ok(())
    }
}

fn ensure_positive(label: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            message: format!("{label} must be a positive finite number, got {value}"),
        })
    }
}
