//! The `Planner` struct and its tick loop.

use rustc_hash::FxHashSet;

use gr_core::{Cell, Horizon, ObstacleMode, PlannerConfig, RouteKey, RunRng, Tick};
use gr_grid::{ObstacleField, ObstacleLogEntry, OccupancyGrid};
use gr_search::{bounded_search, CostModel, PathRecord, SearchRequest};

use crate::{HistoryEntry, PlanObserver, RunReport, Termination};

/// The orchestration state machine.
///
/// `Planner<C>` owns the grid, the obstacle field, the run RNG, and all
/// completion bookkeeping, and drives the four-phase tick protocol described
/// in the [crate docs](crate).  Create via
/// [`PlannerBuilder`][crate::PlannerBuilder].
///
/// Searches within one tick only read the grid; obstacle flags move strictly
/// between ticks, so the per-route searches of phase ② are free of data races
/// whether they run serially or on Rayon.
pub struct Planner<C: CostModel> {
    /// Validated run configuration.
    pub config: PlannerConfig,

    /// The occupancy grid.  Flags are rewritten by phase ① each tick in
    /// dynamic mode.
    pub grid: OccupancyGrid,

    /// The obstacle set and its movement policy.
    pub obstacles: ObstacleField,

    /// Transition-cost strategy shared by every search.
    pub cost: C,

    pub(crate) rng: RunRng,
    pub(crate) tick: Tick,

    /// Every (source, destination) × direction slot, in fixed query order.
    pub(crate) routes: Vec<RouteKey>,

    pub(crate) completed_keys: FxHashSet<RouteKey>,
    pub(crate) completed_destinations: FxHashSet<Cell>,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) obstacle_log: Vec<ObstacleLogEntry>,
    pub(crate) stagnant_ticks: u32,
}

impl<C: CostModel> Planner<C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the tick loop to a terminal state and hand back everything the
    /// run produced.
    pub fn run<O: PlanObserver>(mut self, observer: &mut O) -> RunReport {
        loop {
            if let Some(termination) = self.step(observer) {
                return RunReport {
                    termination,
                    final_tick:   self.tick,
                    history:      self.history,
                    obstacle_log: self.obstacle_log,
                };
            }
        }
    }

    /// Advance the run by exactly one tick.
    ///
    /// Returns `Some(termination)` when this tick fired a terminal state.
    /// Useful for incremental stepping and tests; [`run`][Self::run] loops
    /// this to completion.
    pub fn step<O: PlanObserver>(&mut self, observer: &mut O) -> Option<Termination> {
        self.tick = self.tick + 1;
        let tick = self.tick;
        observer.on_tick_start(tick);

        // ── Phase 1: obstacle update ──────────────────────────────────────
        //
        // Dynamic obstacles take their random-walk step before any search
        // runs, so every search this tick sees the tick's configuration.
        if self.config.obstacle_mode == ObstacleMode::Dynamic {
            self.obstacles.advance(&mut self.grid, &mut self.rng);
            self.obstacle_log.push(self.obstacles.log_entry(tick));
            observer.on_obstacles_moved(tick, self.obstacles.positions());
        }

        // ── Phase 2: per-route searches at horizon = tick ─────────────────
        let results = self.run_searches(Horizon::Bounded(tick.0));

        // ── Phase 3: reconcile in query order ─────────────────────────────
        //
        // A completed record whose slot already completed on a prior tick is
        // discarded — one completion per route identity, ever.  Everything
        // else is appended and counts as progress.
        let mut appended = 0usize;
        for (i, record) in results.into_iter().enumerate() {
            let Some(record) = record else { continue };
            let key = self.routes[i];
            if record.completed {
                if self.completed_keys.contains(&key) {
                    continue;
                }
                self.completed_keys.insert(key);
                self.completed_destinations.insert(key.destination);
                observer.on_route_completed(tick, &key);
            }
            self.history.push(HistoryEntry { tick, key, record });
            appended += 1;
        }
        observer.on_tick_end(tick, appended);

        // ── Phase 4: terminal checks ──────────────────────────────────────
        if self
            .config
            .destinations
            .iter()
            .all(|d| self.completed_destinations.contains(d))
        {
            return self.finish(observer, Termination::Converged);
        }

        if appended > 0 {
            self.stagnant_ticks = 0;
        } else {
            self.stagnant_ticks += 1;
            if self.stagnant_ticks >= self.config.stagnation_limit {
                return self.finish(observer, Termination::Stagnated);
            }
        }

        if tick.0 >= self.config.step_ceiling {
            return self.finish(observer, Termination::Ceiled);
        }

        None
    }

    /// The tick the planner last processed (`T0` before any stepping).
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Records appended so far, across all ticks.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Obstacle log so far (placement entry plus one entry per dynamic tick).
    #[inline]
    pub fn obstacle_log(&self) -> &[ObstacleLogEntry] {
        &self.obstacle_log
    }

    /// Route slots marked completed so far.
    #[inline]
    pub fn completed_route_count(&self) -> usize {
        self.completed_keys.len()
    }

    /// Consecutive no-progress ticks accumulated so far.
    #[inline]
    pub fn stagnant_ticks(&self) -> u32 {
        self.stagnant_ticks
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn finish<O: PlanObserver>(
        &mut self,
        observer: &mut O,
        termination: Termination,
    ) -> Option<Termination> {
        observer.on_run_end(self.tick, termination);
        Some(termination)
    }

    fn request_for(&self, key: RouteKey, horizon: Horizon) -> SearchRequest {
        SearchRequest {
            source:      key.source,
            destination: key.destination,
            direction:   key.direction,
            horizon,
        }
    }

    /// Run every route's search for this tick, results in query order.
    #[cfg(not(feature = "parallel"))]
    fn run_searches(&self, horizon: Horizon) -> Vec<Option<PathRecord>> {
        self.routes
            .iter()
            .map(|&key| bounded_search(&self.grid, &self.request_for(key, horizon), &self.cost))
            .collect()
    }

    /// Parallel variant: searches fan out across Rayon's pool; `collect`
    /// preserves query order, so reconciliation is identical to the serial
    /// build.
    #[cfg(feature = "parallel")]
    fn run_searches(&self, horizon: Horizon) -> Vec<Option<PathRecord>> {
        use rayon::prelude::*;

        self.routes
            .par_iter()
            .map(|&key| bounded_search(&self.grid, &self.request_for(key, horizon), &self.cost))
            .collect()
    }
}
