//! Well Trajectory: directional drilling geometry
//!
//! Deterministic survey calculations for well planning and survey QA.
//!
//! ## Components
//!
//! - **Minimum Curvature**: 3D positions from measured (MD, inclination, azimuth) stations
//! - **Forward Planner**: survey states from build/turn segment designs
//! - **QA Guards**: monotonic MD, physical bound and length sanity checks with DLS statistics
//! - **Target Solver**: build-then-hold profile to reach a (vertical section, TVD) target
//!
//! All calculations are pure functions. Tunables live in [`TrajectoryConfig`],
//! loaded once per process via [`config::init`] or left at defaults.

pub mod config;
pub mod survey_engine;
pub mod telemetry;
pub mod types;

// Re-export configuration
pub use config::{ConfigError, TrajectoryConfig};

// Re-export engine entry points
pub use survey_engine::{
    compute_trajectory, evaluate, plan_forward_survey, solve_build_hold, survey_listing,
    try_solve_build_hold, GeoProjector, TrajectoryError,
};

// Re-export commonly used types
pub use types::{
    BuildHoldPlan, CourseLength, ForwardSurvey, GeoCoords, QaReport, SectionStart,
    SectionTarget, SegmentDesign, SkippedRecord, SurfaceLocation, SurveyState, SurveyStation,
    TargetSolution, TrajectoryPoint, TrajectoryRun, WellHead,
};
