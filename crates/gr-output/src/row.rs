//! Plain data rows written by the reporters.
//!
//! The column sets and the bracketed cell-list text are a compatibility
//! surface: downstream CSV/plot tooling parses these fields as-is, so the
//! shapes here change only with that tooling.

use gr_core::Cell;
use gr_grid::ObstacleLogEntry;
use gr_sim::{HistoryEntry, RunReport};

/// Render a cell sequence as `[(r, c), (r, c), …]`.
pub fn fmt_cells(cells: &[Cell]) -> String {
    let mut out = String::with_capacity(cells.len() * 8 + 2);
    out.push('[');
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&cell.to_string());
    }
    out.push(']');
    out
}

// ── PathRow ──────────────────────────────────────────────────────────────────

/// One history entry, flattened for `dynamic_paths.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRow {
    pub time_step: u64,
    pub path_id:   String,
    pub nodes:     String,
    pub cost:      f64,
    pub time:      u64,
    pub completed: bool,
}

impl PathRow {
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            time_step: entry.tick.0,
            path_id:   entry.key.to_string(),
            nodes:     fmt_cells(&entry.record.nodes),
            cost:      entry.record.cost,
            time:      entry.record.time,
            completed: entry.record.completed,
        }
    }
}

// ── ObstacleRow ──────────────────────────────────────────────────────────────

/// One obstacle log entry, flattened for `dynamic_obstacles.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleRow {
    pub time_step: u64,
    pub positions: String,
}

impl ObstacleRow {
    pub fn from_entry(entry: &ObstacleLogEntry) -> Self {
        Self {
            time_step: entry.tick.0,
            positions: fmt_cells(&entry.positions),
        }
    }
}

// ── RankedRow ────────────────────────────────────────────────────────────────

/// One ranked completed route, flattened for `final_ranked_paths.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    /// 1-based position in the ranking.
    pub rank:       usize,
    pub path_id:    String,
    pub start_node: String,
    pub end_node:   String,
    pub nodes:      String,
    pub cost:       f64,
    pub time:       u64,
}

impl RankedRow {
    pub fn from_entry(rank: usize, entry: &HistoryEntry) -> Self {
        Self {
            rank,
            path_id:    entry.key.to_string(),
            start_node: entry.record.start().to_string(),
            end_node:   entry.record.end().to_string(),
            nodes:      fmt_cells(&entry.record.nodes),
            cost:       entry.record.cost,
            time:       entry.record.time,
        }
    }
}

// ── RunSummary ───────────────────────────────────────────────────────────────

/// Headline numbers for `results.json`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    pub termination:            String,
    pub ticks:                  u64,
    pub completed_paths:        usize,
    pub execution_time_seconds: f64,
}

impl RunSummary {
    pub fn new(report: &RunReport, execution_time_seconds: f64) -> Self {
        Self {
            termination: report.termination.label().to_owned(),
            ticks: report.final_tick.0,
            completed_paths: report.completed_count(),
            execution_time_seconds,
        }
    }
}
