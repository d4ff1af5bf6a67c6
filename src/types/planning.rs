//! Planning types: segment designs, running survey state and build-hold
//! targets

use serde::{Deserialize, Serialize};

use super::qa::QaReport;

// ============================================================================
// Forward Survey Planning
// ============================================================================

/// Surface location of a planned well.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceLocation {
    /// Grid northing
    pub north: f64,
    /// Grid easting
    pub east: f64,
    /// Elevation of the depth datum (kelly bushing) above sea level
    pub kb: f64,
}

impl SurfaceLocation {
    pub fn new(north: f64, east: f64, kb: f64) -> Self {
        Self { north, east, kb }
    }

    pub fn is_finite(&self) -> bool {
        self.north.is_finite() && self.east.is_finite() && self.kb.is_finite()
    }
}

/// Geographic coordinates returned by the caller's projector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoords {
    pub lat: f64,
    pub lon: f64,
}

/// One planned segment. Rates are degrees per course length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentDesign {
    /// Measured length of the segment
    pub length: f64,
    /// Inclination change rate (deg / course length); negative drops angle
    pub build_rate: f64,
    /// Azimuth change rate (deg / course length); negative turns left
    pub turn_rate: f64,
}

impl SegmentDesign {
    pub fn new(length: f64, build_rate: f64, turn_rate: f64) -> Self {
        Self {
            length,
            build_rate,
            turn_rate,
        }
    }

    /// Tangent section: no build, no turn.
    pub fn hold(length: f64) -> Self {
        Self::new(length, 0.0, 0.0)
    }

    pub fn build(length: f64, build_rate: f64) -> Self {
        Self::new(length, build_rate, 0.0)
    }
}

/// Full survey state at one station.
///
/// `north`/`east` are grid coordinates (surface location plus offset). TVD is
/// measured down from the depth datum and TVDSS below sea level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyState {
    pub md: f64,
    pub inclination_deg: f64,
    /// Azimuth in [0°, 360°)
    pub azimuth_deg: f64,
    pub tvd: f64,
    pub north: f64,
    pub east: f64,
    /// Dogleg severity of the segment ending here (deg / course length)
    pub dls: f64,
    /// Vertical section, `MD · cos(inc)`
    pub vertical_section: f64,
    /// Horizontal distance from the surface location
    pub closure_distance: f64,
    /// Direction from the surface location, [0°, 360°)
    pub closure_azimuth_deg: f64,
    pub tvdss: f64,
    /// Projected position, when a projector was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoords>,
}

/// Planned stations (surface tie-in first) with their QA report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardSurvey {
    pub stations: Vec<SurveyState>,
    pub qa: QaReport,
}

impl ForwardSurvey {
    pub fn final_station(&self) -> Option<&SurveyState> {
        self.stations.last()
    }

    /// Render as pretty JSON for the UI and persistence layers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// Build-Hold Targeting
// ============================================================================

/// Start of a build-hold profile in the vertical-section plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionStart {
    pub vertical_section: f64,
    pub tvd: f64,
    /// Must be vertical (0°); any other value is rejected
    pub inclination_deg: f64,
}

/// Target in the vertical-section plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionTarget {
    pub vertical_section: f64,
    pub tvd: f64,
}

/// How a build-hold plan was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStrategy {
    /// Tangent-to-circle closed form
    ClosedForm,
    /// Fixed-step inclination scan
    BoundedScan,
}

impl std::fmt::Display for SolveStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStrategy::ClosedForm => write!(f, "Closed form"),
            SolveStrategy::BoundedScan => write!(f, "Bounded scan"),
        }
    }
}

/// A solved build-then-hold profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildHoldPlan {
    /// Measured length of the build arc
    pub build_length: f64,
    /// Measured length of the tangent hold section
    pub hold_length: f64,
    /// Inclination held after the build (degrees)
    pub max_inclination_deg: f64,
    /// Radius of curvature of the build arc
    pub radius: f64,
    pub strategy: SolveStrategy,
}

/// Flat build-hold result for callers that surface `error` directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetSolution {
    pub build_length: f64,
    pub hold_length: f64,
    /// Degrees
    pub max_inclination: f64,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
