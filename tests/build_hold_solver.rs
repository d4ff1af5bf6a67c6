//! Build-Hold Solver Integration Tests
//!
//! J-profile targeting through the public API, including feeding a solved
//! plan back through the forward planner to confirm it lands on target.

use well_trajectory::config::{SolverConfig, TrajectoryConfig};
use well_trajectory::survey_engine::{plan_forward_survey_with, try_solve_build_hold_with};
use well_trajectory::{
    solve_build_hold, CourseLength, GeoCoords, SectionStart, SectionTarget, SegmentDesign,
    SurfaceLocation, TrajectoryError,
};

fn surface_start() -> SectionStart {
    SectionStart {
        vertical_section: 0.0,
        tvd: 0.0,
        inclination_deg: 0.0,
    }
}

#[test]
fn reachable_target_solves() {
    let solution = solve_build_hold(
        &surface_start(),
        &SectionTarget {
            vertical_section: 1000.0,
            tvd: 3000.0,
        },
        3.0,
        CourseLength::IMPERIAL,
    );

    assert!(solution.success, "{:?}", solution.error);
    assert!(solution.build_length > 0.0);
    assert!(solution.hold_length > 0.0);
    assert!(solution.max_inclination > 0.0 && solution.max_inclination < 90.0);
    assert!(solution.error.is_none());
}

#[test]
fn target_at_start_depth_fails_with_reason() {
    let solution = solve_build_hold(
        &surface_start(),
        &SectionTarget {
            vertical_section: 1000.0,
            tvd: 0.0,
        },
        3.0,
        CourseLength::IMPERIAL,
    );

    assert!(!solution.success);
    assert_eq!(solution.build_length, 0.0);
    assert_eq!(solution.hold_length, 0.0);
    let error = solution.error.unwrap_or_default();
    assert!(error.contains("above or at start depth"), "{error}");
}

#[test]
fn tight_target_is_unreachable() {
    let err = try_solve_build_hold_with(
        &surface_start(),
        &SectionTarget {
            vertical_section: 1500.0,
            tvd: 400.0,
        },
        3.0,
        CourseLength::IMPERIAL,
        &SolverConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        TrajectoryError::UnreachableTarget("Cannot reach target with given build rate".into())
    );
}

#[test]
fn inclined_start_is_rejected_not_guessed() {
    let start = SectionStart {
        inclination_deg: 12.0,
        ..surface_start()
    };
    let solution = solve_build_hold(
        &start,
        &SectionTarget {
            vertical_section: 1000.0,
            tvd: 3000.0,
        },
        3.0,
        CourseLength::IMPERIAL,
    );
    assert!(!solution.success);
    assert!(solution.error.unwrap_or_default().contains("vertical start"));
}

#[test]
fn deeper_kickoff_offsets_cancel() {
    let cfg = SolverConfig::default();
    let from_surface = try_solve_build_hold_with(
        &surface_start(),
        &SectionTarget {
            vertical_section: 1000.0,
            tvd: 3000.0,
        },
        3.0,
        CourseLength::IMPERIAL,
        &cfg,
    )
    .unwrap();
    let from_kickoff = try_solve_build_hold_with(
        &SectionStart {
            vertical_section: 250.0,
            tvd: 1500.0,
            inclination_deg: 0.0,
        },
        &SectionTarget {
            vertical_section: 1250.0,
            tvd: 4500.0,
        },
        3.0,
        CourseLength::IMPERIAL,
        &cfg,
    )
    .unwrap();

    assert!((from_surface.build_length - from_kickoff.build_length).abs() < 1e-9);
    assert!((from_surface.hold_length - from_kickoff.hold_length).abs() < 1e-9);
}

#[test]
fn solved_plan_lands_on_target_when_planned() {
    let plan = try_solve_build_hold_with(
        &surface_start(),
        &SectionTarget {
            vertical_section: 1000.0,
            tvd: 3000.0,
        },
        3.0,
        CourseLength::IMPERIAL,
        &SolverConfig::default(),
    )
    .unwrap();

    let survey = plan_forward_survey_with(
        &SurfaceLocation::default(),
        &[
            SegmentDesign::build(plan.build_length, 3.0),
            SegmentDesign::hold(plan.hold_length),
        ],
        CourseLength::IMPERIAL,
        &|_east: f64, _north: f64| GeoCoords::default(),
        &TrajectoryConfig::default(),
    )
    .unwrap();

    assert!(survey.qa.passed(), "{:?}", survey.qa.guards);
    let end = survey.final_station().unwrap();
    assert!((end.inclination_deg - plan.max_inclination_deg).abs() < 1e-9);
    assert!((end.north - 1000.0).abs() < 1e-3, "north {}", end.north);
    assert!((end.tvd - 3000.0).abs() < 1e-3, "tvd {}", end.tvd);
    assert!(end.east.abs() < 1e-9);
}
