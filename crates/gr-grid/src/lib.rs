//! `gr-grid` — occupancy grid and obstacle model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`grid`]      | `OccupancyGrid` — flags, bounds, ordered neighbors      |
//! | [`obstacles`] | `ObstacleField`, `ObstacleLogEntry` — placement, walk   |
//! | [`error`]     | `GridError`, `GridResult<T>`                            |
//!
//! # Mutation discipline
//!
//! Obstacle flags change only through `OccupancyGrid::set_obstacles` /
//! `clear_obstacles`, and only between ticks: the planner applies the
//! obstacle update before launching any search for a tick, and no search
//! runs while flags move.  Search code holds `&OccupancyGrid` and cannot
//! mutate anything.

pub mod error;
pub mod grid;
pub mod obstacles;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::OccupancyGrid;
pub use obstacles::{ObstacleField, ObstacleLogEntry};
