//! Configuration error taxonomy.
//!
//! Every variant here is fatal and surfaces before any search executes.
//! Expected non-fatal conditions (no path found, stagnation, ceiling) are
//! reported as data by `gr-search` and `gr-sim`, never as errors.

use thiserror::Error;

use crate::Cell;

/// Fatal configuration errors detected by [`PlannerConfig::validate`].
///
/// [`PlannerConfig::validate`]: crate::PlannerConfig::validate
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions {rows}x{cols} describe an empty grid")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("{role} cell {cell} is outside the {rows}x{cols} grid")]
    AnchorOutOfBounds {
        role: &'static str,
        cell: Cell,
        rows: u32,
        cols: u32,
    },

    #[error("obstacle density {0} is outside [0, 1)")]
    DensityOutOfRange(f64),

    #[error("no source cells configured")]
    NoSources,

    #[error("no destination cells configured")]
    NoDestinations,

    #[error("step ceiling must be positive")]
    ZeroStepCeiling,

    #[error("stagnation limit must be positive")]
    ZeroStagnationLimit,
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
