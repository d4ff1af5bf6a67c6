//! Shared data structures for directional survey calculations
//!
//! - `survey`: measured stations in, trajectory points out
//! - `planning`: segment designs, survey state, build-hold targets
//! - `qa`: guard results and the QA report
//! - `units`: unit-tagged angles and the course-length convention

mod planning;
mod qa;
mod survey;
pub mod units;

pub use planning::*;
pub use qa::*;
pub use survey::*;
pub use units::{normalize_azimuth, CourseLength, Degrees, Radians};
