//! Build-hold (J-profile) target solver
//!
//! Works in the vertical-section plane: horizontal axis is vertical section,
//! vertical axis is TVD, both measured from the kickoff point. The build arc
//! has radius `R = CL / build_rate` (rate in radians per course length). The
//! hold is the tangent from that circle to the target.
//!
//! The tangent closed form is tried first and re-derived to its end point.
//! If that check fails, or the angle lands outside 0-90°, a fixed-step scan
//! over candidate inclinations picks the best-aligned one. A verified closed
//! form is also compared against the scan when WARN logging is on.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::{debug, info, warn, Level};

use super::TrajectoryError;
use crate::config::{self, defaults, SolverConfig};
use crate::types::{
    BuildHoldPlan, CourseLength, SectionStart, SectionTarget, SolveStrategy, TargetSolution,
};

/// Solve a build-hold profile, flattening any failure into the record.
///
/// On failure all lengths are zero, `success` is false and `error` carries
/// the message.
pub fn solve_build_hold(
    start: &SectionStart,
    target: &SectionTarget,
    build_rate: f64,
    course_length: CourseLength,
) -> TargetSolution {
    try_solve_build_hold(start, target, build_rate, course_length).into()
}

/// Solve with the global solver settings.
pub fn try_solve_build_hold(
    start: &SectionStart,
    target: &SectionTarget,
    build_rate: f64,
    course_length: CourseLength,
) -> Result<BuildHoldPlan, TrajectoryError> {
    try_solve_build_hold_with(start, target, build_rate, course_length, &config::get().solver)
}

/// Solve a build-hold profile from a vertical start.
///
/// `build_rate` is degrees per `course_length`. A target behind the start
/// (negative vertical-section offset) is solved in the mirrored plane, so
/// the lengths and inclination are those of building toward it.
///
/// # Errors
/// - `InvalidInput` for non-finite values or a non-positive build rate
/// - `UnsupportedConfiguration` when the start is not vertical
/// - `UnreachableTarget` when the target is at or above the start, inside the
///   build circle, or beyond what a build of at most 90° can reach
pub fn try_solve_build_hold_with(
    start: &SectionStart,
    target: &SectionTarget,
    build_rate: f64,
    course_length: CourseLength,
    cfg: &SolverConfig,
) -> Result<BuildHoldPlan, TrajectoryError> {
    validate_inputs(start, target, build_rate)?;

    if start.inclination_deg.abs() > cfg.vertical_start_tolerance_deg {
        return Err(TrajectoryError::UnsupportedConfiguration(format!(
            "Build-hold solving requires a vertical start; start inclination is {:.2}°",
            start.inclination_deg
        )));
    }

    let dh = (target.vertical_section - start.vertical_section).abs();
    let dv = target.tvd - start.tvd;
    if dv <= 0.0 {
        return Err(TrajectoryError::UnreachableTarget(
            "Target is above or at start depth".to_string(),
        ));
    }

    let radius = course_length.value() / build_rate.to_radians();
    let center_distance = (dh - radius).hypot(dv);
    if center_distance < radius {
        return Err(TrajectoryError::UnreachableTarget(
            "Cannot reach target with given build rate".to_string(),
        ));
    }

    let (inclination_deg, hold_length, strategy) =
        match closed_form(dh, dv, radius, center_distance, cfg.closed_form_tolerance) {
            Some((theta, hold)) => {
                if tracing::enabled!(Level::WARN) {
                    cross_check(theta.to_degrees(), dh, dv, radius, cfg);
                }
                (theta.to_degrees(), hold, SolveStrategy::ClosedForm)
            }
            None => {
                warn!(dh, dv, radius, "Closed-form build-hold failed verification, scanning");
                let candidate = bounded_scan(dh, dv, radius, cfg).ok_or_else(|| {
                    TrajectoryError::UnreachableTarget(format!(
                        "No build-hold solution between {}° and {}° inclination",
                        cfg.scan_start_deg, cfg.scan_end_deg
                    ))
                })?;
                (candidate.inclination_deg, candidate.hold, SolveStrategy::BoundedScan)
            }
        };

    let plan = BuildHoldPlan {
        build_length: inclination_deg / build_rate * course_length.value(),
        hold_length,
        max_inclination_deg: inclination_deg,
        radius,
        strategy,
    };
    info!(
        build = plan.build_length,
        hold = plan.hold_length,
        inc = plan.max_inclination_deg,
        strategy = %plan.strategy,
        "Build-hold solved"
    );
    Ok(plan)
}

fn validate_inputs(
    start: &SectionStart,
    target: &SectionTarget,
    build_rate: f64,
) -> Result<(), TrajectoryError> {
    let values = [
        ("start vertical section", start.vertical_section),
        ("start TVD", start.tvd),
        ("start inclination", start.inclination_deg),
        ("target vertical section", target.vertical_section),
        ("target TVD", target.tvd),
        ("build rate", build_rate),
    ];
    if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
        return Err(TrajectoryError::InvalidInput(format!(
            "{name} must be finite, got {value}"
        )));
    }
    if build_rate <= 0.0 {
        return Err(TrajectoryError::InvalidInput(format!(
            "build rate must be positive, got {build_rate}"
        )));
    }
    Ok(())
}

/// End point of a build to `theta` followed by a hold of `hold`.
fn end_point(radius: f64, theta: f64, hold: f64) -> (f64, f64) {
    (
        radius * (1.0 - theta.cos()) + hold * theta.sin(),
        radius * theta.sin() + hold * theta.cos(),
    )
}

/// Tangent from the build circle to the target.
///
/// Returns (inclination in radians, hold length) only when the angle is a
/// real build (0-90°) and the re-derived end point lands on the target.
fn closed_form(
    dh: f64,
    dv: f64,
    radius: f64,
    center_distance: f64,
    tolerance: f64,
) -> Option<(f64, f64)> {
    let hold = (center_distance * center_distance - radius * radius).sqrt();
    let phi = dv.atan2(dh - radius);
    let theta = PI - hold.atan2(radius) - phi;

    if !(0.0..=FRAC_PI_2).contains(&theta) {
        debug!(theta_deg = theta.to_degrees(), "Closed-form angle outside 0-90°");
        return None;
    }

    let (h, v) = end_point(radius, theta, hold);
    let miss = (h - dh).hypot(v - dv) / dh.hypot(dv);
    if miss < tolerance {
        Some((theta, hold))
    } else {
        debug!(miss, "Closed-form end point misses target");
        None
    }
}

#[derive(Debug, Clone, Copy)]
struct ScanCandidate {
    inclination_deg: f64,
    hold: f64,
    misalignment_deg: f64,
}

/// Fixed-step scan over candidate inclinations.
///
/// For each inclination the build ends at a known point; the candidate whose
/// heading best points from there at the target wins, provided it is within
/// the configured misalignment and the hold runs forward. Never more than
/// `defaults::MAX_SCAN_ITERATIONS` candidates, whatever the config says.
fn bounded_scan(dh: f64, dv: f64, radius: f64, cfg: &SolverConfig) -> Option<ScanCandidate> {
    let steps = cfg
        .scan_steps()
        .min(cfg.max_scan_iterations)
        .min(defaults::MAX_SCAN_ITERATIONS);
    let mut best: Option<ScanCandidate> = None;

    for k in 0..steps {
        let inclination_deg = cfg.scan_start_deg + k as f64 * cfg.scan_step_deg;
        let theta = inclination_deg.to_radians();
        let (bh, bv) = end_point(radius, theta, 0.0);
        let (rh, rv) = (dh - bh, dv - bv);

        let hold = rh * theta.sin() + rv * theta.cos();
        if hold <= 0.0 {
            continue;
        }
        let misalignment_deg = (rh.atan2(rv).to_degrees() - inclination_deg).abs();

        let better = match &best {
            Some(b) => misalignment_deg < b.misalignment_deg,
            None => true,
        };
        if better {
            best = Some(ScanCandidate {
                inclination_deg,
                hold,
                misalignment_deg,
            });
        }
    }

    debug!(steps, best = ?best, "Build-hold scan finished");
    best.filter(|c| c.misalignment_deg <= cfg.fallback_max_misalignment_deg)
}

/// Compare a closed-form inclination against the scan. Disagreement beyond
/// two scan steps is logged, the closed form is kept.
fn cross_check(inclination_deg: f64, dh: f64, dv: f64, radius: f64, cfg: &SolverConfig) {
    match bounded_scan(dh, dv, radius, cfg) {
        Some(c) if (c.inclination_deg - inclination_deg).abs() > 2.0 * cfg.scan_step_deg => {
            warn!(
                closed_form = inclination_deg,
                scan = c.inclination_deg,
                "Build-hold closed form disagrees with scan"
            );
        }
        Some(_) => {}
        None => debug!(inclination_deg, "No scan candidate to cross-check against"),
    }
}

impl From<Result<BuildHoldPlan, TrajectoryError>> for TargetSolution {
    fn from(result: Result<BuildHoldPlan, TrajectoryError>) -> Self {
        match result {
            Ok(plan) => TargetSolution {
                build_length: plan.build_length,
                hold_length: plan.hold_length,
                max_inclination: plan.max_inclination_deg,
                success: true,
                error: None,
            },
            Err(e) => TargetSolution {
                success: false,
                error: Some(e.to_string()),
                ..TargetSolution::default()
            },
        }
    }
}
