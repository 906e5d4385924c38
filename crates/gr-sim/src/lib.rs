//! `gr-sim` — tick loop orchestrator for the gridroute planner.
//!
//! # Per-tick protocol
//!
//! ```text
//! for tick in 1..=config.step_ceiling:
//!   ① Obstacles  — dynamic mode only: advance every obstacle one random-walk
//!                  step and re-apply the set to the grid, so this tick's
//!                  searches see this tick's obstacle configuration.
//!   ② Search     — for every (source, destination) pair, run a forward and a
//!                  backward bounded search at horizon = tick (parallel with
//!                  the `parallel` feature).
//!   ③ Reconcile  — in fixed query order: drop records whose route slot was
//!                  already completed, append the rest to the history, mark
//!                  fresh completions.
//!   ④ Terminal   — Converged (every destination has a completed route) →
//!                  Stagnated (no new record for `stagnation_limit` ticks) →
//!                  Ceiled (tick reached `step_ceiling`).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs phase ② on Rayon's thread pool.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gr_sim::{NoopObserver, PlannerBuilder};
//!
//! let planner = PlannerBuilder::new(config).build()?;
//! let report = planner.run(&mut NoopObserver);
//! println!("{}: {} completed routes", report.termination, report.completed_count());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;
pub mod report;


pub use builder::PlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::Planner;
pub use report::{HistoryEntry, RunReport, Termination};
