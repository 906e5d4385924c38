//! Run observer trait for progress reporting.

use gr_core::{Cell, RouteKey, Tick};

use crate::Termination;

/// Callbacks invoked by [`Planner::run`][crate::Planner::run] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl PlanObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, new_records: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {new_records} new records");
///         }
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called at the very start of each tick, before the obstacle update.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a dynamic obstacle update, with the moved positions.
    fn on_obstacles_moved(&mut self, _tick: Tick, _positions: &[Cell]) {}

    /// Called when a route slot completes for the first time.
    fn on_route_completed(&mut self, _tick: Tick, _key: &RouteKey) {}

    /// Called at the end of each tick's reconciliation.
    ///
    /// `new_records` is the number of records appended to the history this
    /// tick; zero feeds the stagnation counter.
    fn on_tick_end(&mut self, _tick: Tick, _new_records: usize) {}

    /// Called once when a terminal state fires.
    fn on_run_end(&mut self, _final_tick: Tick, _termination: Termination) {}
}

/// A [`PlanObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
