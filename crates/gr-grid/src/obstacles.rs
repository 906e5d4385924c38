//! Obstacle placement and movement.
//!
//! Two placement policies, selected by [`ObstacleMode`]:
//!
//! - **Static** — rejection-sample distinct free cells until the target count
//!   is reached.  Flags are written as placement proceeds so the "not already
//!   an obstacle" check holds against the grid itself.
//! - **Dynamic** — sample the target count without de-duplication; the same
//!   cell may host several obstacles.
//!
//! Source and destination cells are excluded at every placement and at every
//! update.  Placement attempts are capped; a configuration whose free cells
//! run out fails with [`GridError::PlacementExhausted`] instead of looping.

use gr_core::{Cell, ObstacleMode, RunRng, Tick};

use crate::{GridError, GridResult, OccupancyGrid};

/// Overall sampling-attempt budget, as a multiple of the grid's cell count.
const ATTEMPTS_PER_CELL: usize = 64;

// ── ObstacleLogEntry ─────────────────────────────────────────────────────────

/// The externally observable output of one placement or update: the tick it
/// happened on and the obstacle set it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleLogEntry {
    pub tick: Tick,
    pub positions: Vec<Cell>,
}

// ── ObstacleField ────────────────────────────────────────────────────────────

/// The obstacle set of one run, together with the anchor cells it must never
/// touch.
///
/// The field owns the authoritative obstacle positions; the grid's flags are
/// a projection of them, rewritten by [`advance`][Self::advance] each tick in
/// dynamic mode.
pub struct ObstacleField {
    mode: ObstacleMode,
    cells: Vec<Cell>,
    sources: Vec<Cell>,
    destinations: Vec<Cell>,
}

impl ObstacleField {
    /// Place `target` obstacles on `grid` and record them in a new field.
    ///
    /// Static mode produces exactly `target` distinct cells; dynamic mode
    /// permits duplicates.  Neither ever occupies a source or destination.
    pub fn place(
        grid:         &mut OccupancyGrid,
        mode:         ObstacleMode,
        target:       usize,
        sources:      &[Cell],
        destinations: &[Cell],
        rng:          &mut RunRng,
    ) -> GridResult<Self> {
        let budget = ATTEMPTS_PER_CELL * grid.cell_count();
        let mut attempts = 0usize;
        let mut cells = Vec::with_capacity(target);

        while cells.len() < target {
            if attempts >= budget {
                return Err(GridError::PlacementExhausted {
                    requested: target,
                    placed:    cells.len(),
                });
            }
            attempts += 1;

            let cell = Cell::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
            if sources.contains(&cell) || destinations.contains(&cell) {
                continue;
            }
            match mode {
                ObstacleMode::Static => {
                    if grid.is_obstacle(cell)? {
                        continue;
                    }
                    // Flag immediately so the next sample's distinctness
                    // check sees this cell.
                    grid.set_obstacles(std::slice::from_ref(&cell), sources, destinations);
                    cells.push(cell);
                }
                ObstacleMode::Dynamic => {
                    cells.push(cell);
                }
            }
        }

        if mode == ObstacleMode::Dynamic {
            grid.set_obstacles(&cells, sources, destinations);
        }

        Ok(Self {
            mode,
            cells,
            sources: sources.to_vec(),
            destinations: destinations.to_vec(),
        })
    }

    /// Build a field from a known obstacle set, applying it to `grid`.
    ///
    /// Anchor cells in `cells` are skipped by the grid flags exactly as in
    /// random placement.  Useful for deterministic scenarios and tests.
    pub fn with_cells(
        grid:         &mut OccupancyGrid,
        mode:         ObstacleMode,
        cells:        Vec<Cell>,
        sources:      &[Cell],
        destinations: &[Cell],
    ) -> Self {
        grid.set_obstacles(&cells, sources, destinations);
        Self {
            mode,
            cells,
            sources: sources.to_vec(),
            destinations: destinations.to_vec(),
        }
    }

    /// Current obstacle positions, in placement order.
    #[inline]
    pub fn positions(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn mode(&self) -> ObstacleMode {
        self.mode
    }

    /// Advance every obstacle by one random-walk step and re-apply the set
    /// to `grid`.  Dynamic mode only.
    ///
    /// Each obstacle's candidate moves are its grid neighbors (in-bounds,
    /// not currently an obstacle) minus the anchor cells; an obstacle with no
    /// candidates stays in place.  All moves are computed against the
    /// tick-start grid before any flag changes, so the update is synchronous
    /// across the whole set.  Two obstacles may land on the same cell.
    pub fn advance(&mut self, grid: &mut OccupancyGrid, rng: &mut RunRng) -> &[Cell] {
        debug_assert_eq!(self.mode, ObstacleMode::Dynamic);

        let mut next = Vec::with_capacity(self.cells.len());
        for &cell in &self.cells {
            let candidates: Vec<Cell> = grid
                .neighbors(cell)
                .into_iter()
                .filter(|c| !self.sources.contains(c) && !self.destinations.contains(c))
                .collect();
            match rng.choose(&candidates) {
                Some(&chosen) => next.push(chosen),
                None => next.push(cell),
            }
        }

        grid.clear_obstacles(&self.cells);
        grid.set_obstacles(&next, &self.sources, &self.destinations);
        self.cells = next;
        &self.cells
    }

    /// Build the log entry for the current positions at `tick`.
    pub fn log_entry(&self, tick: Tick) -> ObstacleLogEntry {
        ObstacleLogEntry {
            tick,
            positions: self.cells.clone(),
        }
    }
}
