//! Unit-tagged angles and the course-length convention
//!
//! Lengths (MD, TVD, offsets) stay plain `f64` in whatever unit the caller
//! surveys in; feet and meters are never mixed inside one calculation. The
//! course-length divisor ties build/turn rates and DLS to that unit:
//! degrees per 100 ft for imperial work, degrees per 30 m for metric.
//!
//! Angles cross the API as degrees and are converted to radians exactly once
//! before any trigonometry.

use serde::{Deserialize, Serialize};

use crate::survey_engine::TrajectoryError;

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl Degrees {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    /// Wrap into [0°, 360°).
    pub fn normalized(self) -> Self {
        Self(normalize_azimuth(self.0))
    }
}

impl Radians {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }
}

impl From<Degrees> for Radians {
    fn from(value: Degrees) -> Self {
        value.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(value: Radians) -> Self {
        value.to_degrees()
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

/// Wrap an azimuth in degrees into [0°, 360°).
pub fn normalize_azimuth(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

// ============================================================================
// Course Length
// ============================================================================

/// Course length over which build, turn and dogleg rates are expressed.
///
/// Always positive and finite; construct with [`CourseLength::new`] or use
/// one of the conventional constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CourseLength(f64);

impl CourseLength {
    /// Degrees per 30 m.
    pub const METRIC: Self = Self(30.0);
    /// Degrees per 100 ft.
    pub const IMPERIAL: Self = Self(100.0);

    pub fn new(value: f64) -> Result<Self, TrajectoryError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(TrajectoryError::InvalidInput(format!(
                "course length must be a positive finite number, got {value}"
            )))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Angle swept over `length` at `rate_deg` degrees per course length.
    pub fn angle_over(self, rate_deg: f64, length: f64) -> Degrees {
        Degrees(rate_deg * length / self.0)
    }

    /// Express an angle swept over `length` as degrees per course length.
    ///
    /// `length` must be positive; callers reject zero-length intervals first.
    pub fn rate_of(self, angle: Degrees, length: f64) -> f64 {
        angle.0 * self.0 / length
    }
}

impl TryFrom<f64> for CourseLength {
    type Error = TrajectoryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CourseLength> for f64 {
    fn from(value: CourseLength) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_azimuth_wraps_both_directions() {
        assert_eq!(normalize_azimuth(370.0), 10.0);
        assert_eq!(normalize_azimuth(-90.0), 270.0);
        assert_eq!(normalize_azimuth(360.0), 0.0);
        assert_eq!(normalize_azimuth(0.0), 0.0);
        assert!(normalize_azimuth(-1e-20) < 360.0);
    }

    #[test]
    fn test_degree_radian_conversion() {
        let r: Radians = Degrees(180.0).into();
        assert!((r.value() - std::f64::consts::PI).abs() < 1e-12);
        let d: Degrees = Radians(std::f64::consts::FRAC_PI_2).into();
        assert!((d.value() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_course_length_rejects_non_positive() {
        assert!(CourseLength::new(0.0).is_err());
        assert!(CourseLength::new(-30.0).is_err());
        assert!(CourseLength::new(f64::NAN).is_err());
        assert_eq!(CourseLength::new(30.0).ok(), Some(CourseLength::METRIC));
    }

    #[test]
    fn test_course_length_rate_conversions() {
        let cl = CourseLength::IMPERIAL;
        // 3°/100ft over 300 ft is 9°
        assert!((cl.angle_over(3.0, 300.0).value() - 9.0).abs() < 1e-12);
        // 9° over 300 ft normalizes back to 3°/100ft
        assert!((cl.rate_of(Degrees(9.0), 300.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_course_length_deserialize_validates() {
        let ok: Result<CourseLength, _> = serde_json::from_str("30.0");
        assert_eq!(ok.ok(), Some(CourseLength::METRIC));
        let bad: Result<CourseLength, _> = serde_json::from_str("0.0");
        assert!(bad.is_err());
    }
}
