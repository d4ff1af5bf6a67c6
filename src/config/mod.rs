//! Trajectory Configuration Module
//!
//! Numeric tolerances of the survey engine, loaded from TOML so operators can
//! tighten or relax QA limits without a rebuild.
//!
//! ## Loading Order
//!
//! 1. `TRAJECTORY_CONFIG` environment variable (path to TOML file)
//! 2. `trajectory_config.toml` in the current working directory
//! 3. Built-in defaults (see `defaults`)
//!
//! ## Usage
//!
//! A host application calls `config::init()` once at startup; the engine
//! reads it through `config::get()`:
//!
//! ```ignore
//! config::init(TrajectoryConfig::load());
//!
//! let tolerance = config::get().qa.length_sanity_max_relative_error;
//! ```
//!
//! Every engine entry point also has a `_with` variant taking the config
//! section explicitly, which is what the tests use.

mod trajectory_config;
pub mod defaults;
pub mod validation;

pub use trajectory_config::*;

use std::sync::OnceLock;

/// Global trajectory configuration, written at most once.
static TRAJECTORY_CONFIG: OnceLock<TrajectoryConfig> = OnceLock::new();

/// Install the global configuration.
///
/// Only the first call takes effect; later calls (or a call after `get()`
/// already fell back to defaults) are logged and ignored.
pub fn init(config: TrajectoryConfig) {
    if TRAJECTORY_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called after configuration was fixed, ignoring");
    }
}

/// Get the global configuration.
///
/// Falls back to built-in defaults when `init()` was never called, so the
/// engine works as a plain library without any setup.
pub fn get() -> &'static TrajectoryConfig {
    TRAJECTORY_CONFIG.get_or_init(|| {
        tracing::debug!("config::get() before init(), using built-in defaults");
        TrajectoryConfig::default()
    })
}
