//! Measured survey types: stations in, trajectory points out

use serde::{Deserialize, Serialize};

use super::units::Degrees;

// ============================================================================
// Inputs
// ============================================================================

/// One surveyed station.
///
/// Stations are expected in non-decreasing MD order; a station whose MD does
/// not advance past the previous one is skipped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyStation {
    /// Measured depth along hole
    pub md: f64,
    /// Inclination from vertical (degrees)
    pub inclination_deg: f64,
    /// Azimuth from grid north (degrees)
    pub azimuth_deg: f64,
}

impl SurveyStation {
    pub fn new(md: f64, inclination_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            md,
            inclination_deg,
            azimuth_deg,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.md.is_finite() && self.inclination_deg.is_finite() && self.azimuth_deg.is_finite()
    }

    pub fn inclination(&self) -> Degrees {
        Degrees(self.inclination_deg)
    }

    pub fn azimuth(&self) -> Degrees {
        Degrees(self.azimuth_deg)
    }
}

/// Wellhead origin. `x` is easting, `y` northing, `z` depth (positive down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WellHead {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WellHead {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// A computed position along the wellbore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Easting
    pub x: f64,
    /// Northing
    pub y: f64,
    /// Depth, positive down
    pub z: f64,
    pub md: f64,
    pub inclination_deg: f64,
    pub azimuth_deg: f64,
}

impl TrajectoryPoint {
    /// The first point of every trajectory: the wellhead with MD, inclination
    /// and azimuth all zero.
    pub fn wellhead(head: &WellHead) -> Self {
        Self {
            x: head.x,
            y: head.y,
            z: head.z,
            md: 0.0,
            inclination_deg: 0.0,
            azimuth_deg: 0.0,
        }
    }
}

/// Why a station was left out of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// MD, inclination or azimuth was NaN or infinite
    NonFiniteValue,
    /// MD did not advance past the previous accepted station
    NonIncreasingDepth,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NonFiniteValue => write!(f, "Non-finite value"),
            SkipReason::NonIncreasingDepth => write!(f, "Non-increasing depth"),
        }
    }
}

/// A station dropped from the run. Not fatal; the caller decides what to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Index into the caller's station slice
    pub index: usize,
    pub reason: SkipReason,
    pub message: String,
}

impl std::fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "station {}: {} ({})", self.index, self.reason, self.message)
    }
}

/// Result of a minimum-curvature run: the points that could be computed plus
/// every station that was skipped on the way.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectoryRun {
    pub points: Vec<TrajectoryPoint>,
    pub skipped: Vec<SkippedRecord>,
}

impl TrajectoryRun {
    /// True when no station was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn final_point(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }
}
