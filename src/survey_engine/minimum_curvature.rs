//! Minimum curvature method
//!
//! Models the hole between two surveyed stations as a circular arc tangent to
//! both station directions. Per pair:
//!
//! - Dogleg: `β = acos(cos(I₂−I₁) − sin I₁·sin I₂·(1 − cos(A₂−A₁)))`
//! - Ratio factor: `RF = (2/β)·tan(β/2)`, or 1 when β is too small to divide by
//! - Increments: `ΔMD/2 · RF` times the summed sine/cosine projections of both
//!   station directions
//!
//! The primitives are public because forward planning steps through the same
//! arc model from design rates instead of measured angles.

use tracing::{debug, warn};

use super::forward_planner::state_at;
use super::TrajectoryError;
use crate::config::{self, SurveyConfig};
use crate::types::{
    CourseLength, Degrees, Radians, SkipReason, SkippedRecord, SurfaceLocation, SurveyState,
    SurveyStation, TrajectoryPoint, TrajectoryRun, WellHead,
};

// ============================================================================
// Arc Primitives
// ============================================================================

/// Hole direction at a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    pub inclination: Radians,
    pub azimuth: Radians,
}

impl Attitude {
    pub fn from_degrees(inclination: Degrees, azimuth: Degrees) -> Self {
        Self {
            inclination: inclination.to_radians(),
            azimuth: azimuth.to_radians(),
        }
    }

    pub fn of_station(station: &SurveyStation) -> Self {
        Self::from_degrees(station.inclination(), station.azimuth())
    }

    fn of_point(point: &TrajectoryPoint) -> Self {
        Self::from_degrees(Degrees(point.inclination_deg), Degrees(point.azimuth_deg))
    }
}

/// Position change across one course, in the caller's length unit.
/// `vertical` is positive downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    pub north: f64,
    pub east: f64,
    pub vertical: f64,
}

impl Displacement {
    /// Straight-line (chord) length.
    pub fn length(&self) -> f64 {
        (self.north * self.north + self.east * self.east + self.vertical * self.vertical).sqrt()
    }
}

impl std::ops::Add for Displacement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            north: self.north + rhs.north,
            east: self.east + rhs.east,
            vertical: self.vertical + rhs.vertical,
        }
    }
}

/// Everything minimum curvature derives for one course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureStep {
    pub dogleg: Radians,
    pub ratio_factor: f64,
    pub displacement: Displacement,
}

/// Total angular change between two station directions.
pub fn dogleg_angle(from: &Attitude, to: &Attitude) -> Radians {
    let (i1, i2) = (from.inclination.value(), to.inclination.value());
    let delta_azimuth = to.azimuth.value() - from.azimuth.value();
    let cos_dogleg = (i2 - i1).cos() - i1.sin() * i2.sin() * (1.0 - delta_azimuth.cos());
    // Round-off can push the argument a hair past ±1
    Radians(cos_dogleg.clamp(-1.0, 1.0).acos())
}

/// Ratio factor for a dogleg; 1 at or below `straight_threshold_rad`.
pub fn ratio_factor(dogleg: Radians, straight_threshold_rad: f64) -> f64 {
    let beta = dogleg.value();
    if beta > straight_threshold_rad {
        (2.0 / beta) * (beta / 2.0).tan()
    } else {
        1.0
    }
}

/// North/east/vertical increments across `delta_md`.
pub fn displacement(from: &Attitude, to: &Attitude, delta_md: f64, ratio_factor: f64) -> Displacement {
    let scale = delta_md / 2.0 * ratio_factor;
    let (i1, a1) = (from.inclination.value(), from.azimuth.value());
    let (i2, a2) = (to.inclination.value(), to.azimuth.value());

    Displacement {
        north: scale * (i1.sin() * a1.cos() + i2.sin() * a2.cos()),
        east: scale * (i1.sin() * a1.sin() + i2.sin() * a2.sin()),
        vertical: scale * (i1.cos() + i2.cos()),
    }
}

/// Dogleg, ratio factor and displacement for one course.
pub fn curvature_step(
    from: &Attitude,
    to: &Attitude,
    delta_md: f64,
    straight_threshold_rad: f64,
) -> CurvatureStep {
    let dogleg = dogleg_angle(from, to);
    let rf = ratio_factor(dogleg, straight_threshold_rad);
    CurvatureStep {
        dogleg,
        ratio_factor: rf,
        displacement: displacement(from, to, delta_md, rf),
    }
}

// ============================================================================
// Trajectory From Measured Stations
// ============================================================================

/// Compute trajectory points from measured stations using the global config.
///
/// See [`compute_trajectory_with`].
pub fn compute_trajectory(
    stations: &[SurveyStation],
    well_head: &WellHead,
) -> Result<TrajectoryRun, TrajectoryError> {
    compute_trajectory_with(stations, well_head, &config::get().survey)
}

/// Compute trajectory points from measured stations.
///
/// The first valid station is the tie-in and sits at the wellhead, so the
/// output always starts with the wellhead point and has one more point for
/// every station that advanced MD. Stations must already be MD-ascending;
/// nothing is sorted. Non-finite stations and stations that do not advance
/// MD are skipped and reported in [`TrajectoryRun::skipped`].
pub fn compute_trajectory_with(
    stations: &[SurveyStation],
    well_head: &WellHead,
    cfg: &SurveyConfig,
) -> Result<TrajectoryRun, TrajectoryError> {
    if !well_head.is_finite() {
        return Err(TrajectoryError::InvalidInput(format!(
            "well head coordinates must be finite, got ({}, {}, {})",
            well_head.x, well_head.y, well_head.z
        )));
    }
    if stations.is_empty() {
        return Err(TrajectoryError::InvalidInput(
            "at least one survey station is required".to_string(),
        ));
    }

    let mut cursor = TrajectoryPoint::wellhead(well_head);
    let mut points = Vec::with_capacity(stations.len());
    points.push(cursor);

    let mut skipped = Vec::new();
    let mut previous: Option<&SurveyStation> = None;

    for (index, station) in stations.iter().enumerate() {
        if !station.is_finite() {
            skipped.push(skip(
                index,
                SkipReason::NonFiniteValue,
                format!(
                    "md={}, inc={}, azm={}",
                    station.md, station.inclination_deg, station.azimuth_deg
                ),
            ));
            continue;
        }

        let Some(from) = previous else {
            previous = Some(station);
            continue;
        };

        let delta_md = station.md - from.md;
        if delta_md <= 0.0 {
            skipped.push(skip(
                index,
                SkipReason::NonIncreasingDepth,
                format!("md {} does not advance past {}", station.md, from.md),
            ));
            continue;
        }

        let step = curvature_step(
            &Attitude::of_station(from),
            &Attitude::of_station(station),
            delta_md,
            cfg.straight_hole_dogleg_rad,
        );
        let d = step.displacement;

        cursor = TrajectoryPoint {
            x: cursor.x + d.east,
            y: cursor.y + d.north,
            z: cursor.z + d.vertical,
            md: station.md,
            inclination_deg: station.inclination_deg,
            azimuth_deg: station.azimuth_deg,
        };
        debug!(
            index,
            md = station.md,
            dogleg_deg = step.dogleg.to_degrees().value(),
            rf = step.ratio_factor,
            "Minimum curvature step"
        );

        points.push(cursor);
        previous = Some(station);
    }

    if !skipped.is_empty() {
        warn!(
            skipped = skipped.len(),
            computed = points.len() - 1,
            "Trajectory computed with skipped stations"
        );
    }

    Ok(TrajectoryRun { points, skipped })
}

fn skip(index: usize, reason: SkipReason, message: String) -> SkippedRecord {
    let record = SkippedRecord {
        index,
        reason,
        message,
    };
    warn!(index, reason = %record.reason, detail = %record.message, "Skipping survey station");
    record
}

/// Expand computed trajectory points into full survey states.
///
/// The first point is taken as the surface location; `kb` is the datum
/// elevation used for TVDSS. DLS is derived from consecutive points, so the
/// listing assumes a surface tie-in (first station at MD 0, vertical), which
/// is what [`compute_trajectory`] produces for ordinary surveys. No
/// projection is applied, so `geo` is `None`.
///
/// The result can be handed straight to [`super::evaluate`].
pub fn survey_listing(
    points: &[TrajectoryPoint],
    course_length: CourseLength,
    kb: f64,
) -> Vec<SurveyState> {
    let Some(origin) = points.first() else {
        return Vec::new();
    };
    let surface = SurfaceLocation::new(origin.y, origin.x, kb);

    let mut listing = Vec::with_capacity(points.len());
    let mut previous: Option<&TrajectoryPoint> = None;

    for point in points {
        let dls = match previous {
            Some(prev) if point.md > prev.md => {
                let dogleg = dogleg_angle(&Attitude::of_point(prev), &Attitude::of_point(point));
                course_length.rate_of(dogleg.to_degrees(), point.md - prev.md)
            }
            _ => 0.0,
        };
        let offset = Displacement {
            north: point.y - origin.y,
            east: point.x - origin.x,
            vertical: point.z - origin.z,
        };

        listing.push(state_at(
            &surface,
            point.md,
            point.inclination_deg,
            point.azimuth_deg,
            &offset,
            dls,
        ));
        previous = Some(point);
    }

    listing
}
