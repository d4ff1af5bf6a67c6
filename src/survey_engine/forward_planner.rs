//! Forward survey planning
//!
//! Steps a planned well forward from its surface location one segment at a
//! time. Each segment's build and turn rates become an inclination/azimuth
//! change over its length; the minimum-curvature arc between the old and new
//! direction gives the position change. The finished station list is run
//! through the QA guards before it is returned.

use tracing::{debug, info, warn};

use super::minimum_curvature::{curvature_step, Attitude, Displacement};
use super::{qa_guards, TrajectoryError};
use crate::config::{self, TrajectoryConfig};
use crate::types::{
    normalize_azimuth, CourseLength, Degrees, ForwardSurvey, GeoCoords, SegmentDesign,
    SurfaceLocation, SurveyState,
};

/// Map projection supplied by the caller.
///
/// The planner never projects coordinates itself. It hands each station's
/// grid easting/northing to this collaborator and stores what comes back.
/// Any `Fn(f64, f64) -> GeoCoords` closure works.
pub trait GeoProjector {
    fn project(&self, east: f64, north: f64) -> GeoCoords;
}

impl<F> GeoProjector for F
where
    F: Fn(f64, f64) -> GeoCoords,
{
    fn project(&self, east: f64, north: f64) -> GeoCoords {
        self(east, north)
    }
}

/// Plan a forward survey using the global config.
///
/// See [`plan_forward_survey_with`].
pub fn plan_forward_survey<P: GeoProjector + ?Sized>(
    surface: &SurfaceLocation,
    segments: &[SegmentDesign],
    course_length: CourseLength,
    projector: &P,
) -> Result<ForwardSurvey, TrajectoryError> {
    plan_forward_survey_with(surface, segments, course_length, projector, config::get())
}

/// Plan a forward survey from segment designs.
///
/// The station list starts with the surface tie-in (MD 0, vertical) and has
/// one more station per segment. Any invalid segment rejects the whole plan
/// with its index in the message; nothing is partially planned.
pub fn plan_forward_survey_with<P: GeoProjector + ?Sized>(
    surface: &SurfaceLocation,
    segments: &[SegmentDesign],
    course_length: CourseLength,
    projector: &P,
    cfg: &TrajectoryConfig,
) -> Result<ForwardSurvey, TrajectoryError> {
    if !surface.is_finite() {
        return Err(TrajectoryError::InvalidInput(format!(
            "surface location must be finite, got north={}, east={}, kb={}",
            surface.north, surface.east, surface.kb
        )));
    }

    let mut state = state_at(surface, 0.0, 0.0, 0.0, &Displacement::default(), 0.0);
    state.geo = Some(projector.project(state.east, state.north));

    let mut stations = Vec::with_capacity(segments.len() + 1);
    stations.push(state.clone());

    for (index, segment) in segments.iter().enumerate() {
        state = next_state(
            &state,
            segment,
            surface,
            course_length,
            cfg.survey.straight_hole_dogleg_rad,
        )
        .map_err(|e| {
            warn!(segment = index, error = %e, "Rejected segment design");
            match e {
                TrajectoryError::InvalidInput(msg) => {
                    TrajectoryError::InvalidInput(format!("segment {index}: {msg}"))
                }
                other => other,
            }
        })?;
        state.geo = Some(projector.project(state.east, state.north));

        debug!(
            segment = index,
            md = state.md,
            inc = state.inclination_deg,
            azm = state.azimuth_deg,
            dls = state.dls,
            "Planned station"
        );
        stations.push(state.clone());
    }

    let qa = qa_guards::evaluate_with(&stations, &cfg.qa);
    if qa.passed() {
        info!(
            stations = stations.len(),
            max_dls = qa.max_dls,
            "Forward survey planned"
        );
    } else {
        warn!(
            stations = stations.len(),
            monotonic_md = qa.guards.monotonic_md.pass,
            physical_bound = qa.guards.physical_bound.pass,
            length_sanity = qa.guards.length_sanity.pass,
            "Forward survey failed QA"
        );
    }

    Ok(ForwardSurvey { stations, qa })
}

/// Advance one segment from `prev`.
///
/// Pure: the new state depends only on `prev`, the segment and the fixed
/// context (surface location, course length, straight-hole threshold). The
/// returned state has no projection; the planner attaches it.
pub fn next_state(
    prev: &SurveyState,
    segment: &SegmentDesign,
    surface: &SurfaceLocation,
    course_length: CourseLength,
    straight_threshold_rad: f64,
) -> Result<SurveyState, TrajectoryError> {
    validate_segment(segment)?;

    let built = prev.inclination_deg
        + course_length.angle_over(segment.build_rate, segment.length).value();
    // Build-then-drop back to vertical can land a few ulps below zero
    let inclination = if built.abs() < 1e-9 { 0.0 } else { built };
    if !(0.0..=180.0).contains(&inclination) {
        return Err(TrajectoryError::InvalidInput(format!(
            "inclination would reach {inclination:.2}°, outside 0-180°"
        )));
    }
    let azimuth = normalize_azimuth(
        prev.azimuth_deg + course_length.angle_over(segment.turn_rate, segment.length).value(),
    );

    let from = Attitude::from_degrees(Degrees(prev.inclination_deg), Degrees(prev.azimuth_deg));
    let to = Attitude::from_degrees(Degrees(inclination), Degrees(azimuth));
    let step = curvature_step(&from, &to, segment.length, straight_threshold_rad);

    let offset = Displacement {
        north: prev.north - surface.north,
        east: prev.east - surface.east,
        vertical: prev.tvd,
    } + step.displacement;
    let dls = course_length.rate_of(step.dogleg.to_degrees(), segment.length);

    Ok(state_at(
        surface,
        prev.md + segment.length,
        inclination,
        azimuth,
        &offset,
        dls,
    ))
}

fn validate_segment(segment: &SegmentDesign) -> Result<(), TrajectoryError> {
    if segment.length == 0.0 {
        return Err(TrajectoryError::InvalidInput(
            "zero-length segment, dogleg severity is undefined".to_string(),
        ));
    }
    if !segment.length.is_finite() || segment.length < 0.0 {
        return Err(TrajectoryError::InvalidInput(format!(
            "segment length must be a positive finite number, got {}",
            segment.length
        )));
    }
    if !segment.build_rate.is_finite() || !segment.turn_rate.is_finite() {
        return Err(TrajectoryError::InvalidInput(format!(
            "build/turn rates must be finite, got build={}, turn={}",
            segment.build_rate, segment.turn_rate
        )));
    }
    Ok(())
}

/// Derive a full survey state from a position relative to the surface.
///
/// `offset.vertical` is TVD below the datum.
pub(crate) fn state_at(
    surface: &SurfaceLocation,
    md: f64,
    inclination_deg: f64,
    azimuth_deg: f64,
    offset: &Displacement,
    dls: f64,
) -> SurveyState {
    let closure_distance = offset.north.hypot(offset.east);
    let closure_azimuth_deg = if closure_distance > 0.0 {
        normalize_azimuth(offset.east.atan2(offset.north).to_degrees())
    } else {
        0.0
    };

    SurveyState {
        md,
        inclination_deg,
        azimuth_deg: normalize_azimuth(azimuth_deg),
        tvd: offset.vertical,
        north: surface.north + offset.north,
        east: surface.east + offset.east,
        dls,
        vertical_section: md * inclination_deg.to_radians().cos(),
        closure_distance,
        closure_azimuth_deg,
        tvdss: offset.vertical - surface.kb,
        geo: None,
    }
}
