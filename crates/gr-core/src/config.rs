//! Run configuration.
//!
//! `PlannerConfig` carries every construction input of a planning run.
//! Applications typically fill it from CLI flags or a config file and hand it
//! to `PlannerBuilder`; the builder calls [`PlannerConfig::validate`] before
//! anything else runs, so every configuration error of the taxonomy surfaces
//! up front rather than mid-run.

use crate::error::{ConfigError, ConfigResult};
use crate::Cell;

// ── Vocabulary enums ─────────────────────────────────────────────────────────

/// Neighbor connectivity of the occupancy grid, fixed at construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Axis-aligned neighbors only: up, down, left, right.
    Four,
    /// The four axis neighbors plus the four diagonals.
    Eight,
}

/// Whether obstacles hold still or take a random-walk step every tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleMode {
    Static,
    Dynamic,
}

// ── PlannerConfig ────────────────────────────────────────────────────────────

/// Top-level configuration of one planning run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Grid height in cells.  Must be positive.
    pub rows: u32,
    /// Grid width in cells.  Must be positive.
    pub cols: u32,

    pub connectivity:  Connectivity,
    pub obstacle_mode: ObstacleMode,

    /// Fraction of grid cells to fill with obstacles, in `[0, 1)`.
    /// The placed count is `trunc(rows * cols * density)`.
    pub obstacle_density: f64,

    /// Route start cells.  Must be non-empty and in bounds.
    pub sources: Vec<Cell>,
    /// Route goal cells.  Must be non-empty and in bounds.
    pub destinations: Vec<Cell>,

    /// Hard upper bound on the tick counter.  The run terminates `Ceiled`
    /// when the horizon reaches this value without converging or stagnating.
    pub step_ceiling: u64,

    /// Consecutive no-progress ticks tolerated before the run terminates
    /// `Stagnated`.
    pub stagnation_limit: u32,

    /// Master RNG seed.  The same seed always produces identical obstacle
    /// placement, movement, and therefore identical path history.
    pub seed: u64,
}

impl PlannerConfig {
    /// Safe upper bound for very complex scenarios.
    pub const DEFAULT_STEP_CEILING: u64 = 2048;
    pub const DEFAULT_STAGNATION_LIMIT: u32 = 50;

    /// Total number of grid cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Number of obstacles a run of this configuration places, truncated
    /// toward zero.
    #[inline]
    pub fn obstacle_target(&self) -> usize {
        (self.cell_count() as f64 * self.obstacle_density) as usize
    }

    /// `true` if `cell` lies inside the configured grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Check every fatal configuration error before a run starts.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid { rows: self.rows, cols: self.cols });
        }
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        if self.destinations.is_empty() {
            return Err(ConfigError::NoDestinations);
        }
        for &cell in &self.sources {
            if !self.in_bounds(cell) {
                return Err(ConfigError::AnchorOutOfBounds {
                    role: "source",
                    cell,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        for &cell in &self.destinations {
            if !self.in_bounds(cell) {
                return Err(ConfigError::AnchorOutOfBounds {
                    role: "destination",
                    cell,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        // NaN fails the range check too: `contains` is false for NaN.
        if !(0.0..1.0).contains(&self.obstacle_density) {
            return Err(ConfigError::DensityOutOfRange(self.obstacle_density));
        }
        if self.step_ceiling == 0 {
            return Err(ConfigError::ZeroStepCeiling);
        }
        if self.stagnation_limit == 0 {
            return Err(ConfigError::ZeroStagnationLimit);
        }
        Ok(())
    }
}
