//! Builder for constructing a [`Planner`].

use rustc_hash::FxHashSet;

use gr_core::{Direction, PlannerConfig, RouteKey, RunRng, Tick};
use gr_grid::{ObstacleField, OccupancyGrid};
use gr_search::{CostModel, EuclideanCost};

use crate::{Planner, PlanResult};

/// Validates a [`PlannerConfig`], places obstacles, and assembles a
/// ready-to-run [`Planner`].
///
/// Every fatal configuration error surfaces from [`build`][Self::build]
/// before any search executes; a planner that builds successfully can only
/// terminate through the three expected terminal states.
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(config)
///     .cost_model(UnitCost)
///     .build()?;
/// let report = planner.run(&mut NoopObserver);
/// ```
pub struct PlannerBuilder<C: CostModel> {
    config: PlannerConfig,
    cost:   C,
}

impl PlannerBuilder<EuclideanCost> {
    /// Create a builder with the canonical Euclidean transition cost.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config, cost: EuclideanCost }
    }
}

impl<C: CostModel> PlannerBuilder<C> {
    /// Swap in a different transition-cost strategy.
    pub fn cost_model<D: CostModel>(self, cost: D) -> PlannerBuilder<D> {
        PlannerBuilder { config: self.config, cost }
    }

    /// Validate, place obstacles, and return a ready [`Planner`].
    pub fn build(self) -> PlanResult<Planner<C>> {
        let config = self.config;
        config.validate()?;

        let mut grid = OccupancyGrid::new(config.rows, config.cols, config.connectivity)?;
        let mut rng = RunRng::new(config.seed);

        let obstacles = ObstacleField::place(
            &mut grid,
            config.obstacle_mode,
            config.obstacle_target(),
            &config.sources,
            &config.destinations,
            &mut rng,
        )?;
        // The placement itself is the tick-0 log entry.
        let obstacle_log = vec![obstacles.log_entry(Tick::ZERO)];

        // Fixed query order: source-major, then destination, forward before
        // backward.  Reconciliation and the parallel fan-out both follow it.
        let mut routes =
            Vec::with_capacity(config.sources.len() * config.destinations.len() * 2);
        for &source in &config.sources {
            for &destination in &config.destinations {
                routes.push(RouteKey::new(source, destination, Direction::Forward));
                routes.push(RouteKey::new(source, destination, Direction::Backward));
            }
        }

        Ok(Planner {
            config,
            grid,
            obstacles,
            cost: self.cost,
            rng,
            tick: Tick::ZERO,
            routes,
            completed_keys: FxHashSet::default(),
            completed_destinations: FxHashSet::default(),
            history: Vec::new(),
            obstacle_log,
            stagnant_ticks: 0,
        })
    }
}
