//! `gr-output` — run artifact writers for the gridroute planner.
//!
//! A finished run serializes to four artifacts in one output directory:
//!
//! | File                     | Contents                                     |
//! |--------------------------|----------------------------------------------|
//! | `dynamic_paths.csv`      | every tick-tagged path record                |
//! | `dynamic_obstacles.csv`  | obstacle positions per logged tick           |
//! | `final_ranked_paths.csv` | the ranked completed subset                  |
//! | `results.json`           | terminal state and headline counts           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gr_output::{CsvReporter, RunSummary, write_summary_json};
//!
//! let mut reporter = CsvReporter::new(dir)?;
//! reporter.write_run(&report, &ranked)?;
//! reporter.finish()?;
//! write_summary_json(&dir.join("results.json"), &RunSummary::new(&report, elapsed))?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;


pub use csv::CsvReporter;
pub use error::{OutputError, OutputResult};
pub use json::write_summary_json;
pub use row::{ObstacleRow, PathRow, RankedRow, RunSummary};
