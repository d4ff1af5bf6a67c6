//! Survey Engine Module
//!
//! Deterministic directional-drilling geometry. Everything here is a pure
//! function of its inputs: no I/O, no shared mutable state, no randomness.
//!
//! ## Components
//! - `compute_trajectory()` - Minimum-curvature positions from measured stations
//! - `plan_forward_survey()` - Survey states from build/turn segment designs, with QA
//! - `evaluate()` - QA guards over any finished station sequence
//! - `solve_build_hold()` - Build-then-hold (J-profile) parameters to reach a target

pub mod forward_planner;
pub mod minimum_curvature;
pub mod qa_guards;
pub mod target_solver;

pub use forward_planner::{next_state, plan_forward_survey, plan_forward_survey_with, GeoProjector};
pub use minimum_curvature::{
    compute_trajectory, compute_trajectory_with, curvature_step, dogleg_angle, displacement,
    ratio_factor, survey_listing, Attitude, CurvatureStep, Displacement,
};
pub use qa_guards::{evaluate, evaluate_with};
pub use target_solver::{solve_build_hold, try_solve_build_hold, try_solve_build_hold_with};

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Why a calculation was rejected.
///
/// The message is written for the end user and can be shown unchanged.
/// Individual bad stations are not errors; they come back as
/// [`SkippedRecord`](crate::types::SkippedRecord)s next to the partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// Malformed wellhead, stations, segments or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The target cannot be reached with the requested geometry
    #[error("{0}")]
    UnreachableTarget(String),

    /// The request is well-formed but outside what the solver handles
    #[error("{0}")]
    UnsupportedConfiguration(String),
}
