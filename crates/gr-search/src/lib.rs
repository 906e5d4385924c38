//! `gr-search` — the bounded search engine.
//!
//! One [`bounded_search`] call connects one anchor cell to one target cell
//! under a step horizon, returning a best-effort [`PathRecord`] that may be
//! partial (frozen at the horizon) or absent (frontier exhausted).  The
//! orchestrator in `gr-sim` drives these calls with a growing horizon; this
//! crate knows nothing about ticks, obstacles moving, or convergence.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`cost`]   | `CostModel` trait, `EuclideanCost`, `UnitCost`      |
//! | [`record`] | `PathRecord`                                        |
//! | [`search`] | `SearchRequest`, `bounded_search`                   |

pub mod cost;
pub mod record;
pub mod search;

#[cfg(test)]
mod tests;

pub use cost::{CostModel, EuclideanCost, UnitCost};
pub use record::PathRecord;
pub use search::{bounded_search, SearchRequest};
