//! `gr-core` — foundational types for the `gridroute` planning framework.
//!
//! This crate is a dependency of every other `gr-*` crate.  It intentionally
//! has no `gr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`cell`]    | `Cell` grid coordinate, distance helpers              |
//! | [`time`]    | `Tick`, `Horizon`                                     |
//! | [`route`]   | `Direction`, `RouteKey` (stable path identity)        |
//! | [`config`]  | `Connectivity`, `ObstacleMode`, `PlannerConfig`       |
//! | [`rng`]     | `RunRng` (seeded, injectable)                         |
//! | [`error`]   | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;
pub mod route;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{Connectivity, ObstacleMode, PlannerConfig};
pub use error::{ConfigError, ConfigResult};
pub use rng::RunRng;
pub use route::{Direction, RouteKey};
pub use time::{Horizon, Tick};
