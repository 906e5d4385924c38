//! Terminal states and the run report.

use std::fmt;

use gr_core::{RouteKey, Tick};
use gr_grid::ObstacleLogEntry;
use gr_search::PathRecord;

// ── Termination ──────────────────────────────────────────────────────────────

/// Why a run stopped.  Exactly one of these is reported; none is an error —
/// callers decide whether an incomplete run is acceptable.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Termination {
    /// Every destination has at least one completed route.
    Converged,
    /// `stagnation_limit` consecutive ticks produced no new record.
    Stagnated,
    /// The tick counter reached `step_ceiling` first.
    Ceiled,
}

impl Termination {
    pub fn label(self) -> &'static str {
        match self {
            Termination::Converged => "converged",
            Termination::Stagnated => "stagnated",
            Termination::Ceiled => "ceiled",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── HistoryEntry ─────────────────────────────────────────────────────────────

/// One tick-tagged path record, keyed by its stable route identity.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub tick:   Tick,
    pub key:    RouteKey,
    pub record: PathRecord,
}

// ── RunReport ────────────────────────────────────────────────────────────────

/// Everything a finished run produced.
///
/// `history` holds every record ever appended across all ticks, partial and
/// completed alike; the completed-only subset is what the ranker consumes.
#[derive(Debug, PartialEq)]
pub struct RunReport {
    pub termination:  Termination,
    /// The tick the terminal state fired on.
    pub final_tick:   Tick,
    pub history:      Vec<HistoryEntry>,
    /// Obstacle positions at placement (tick 0) and after every dynamic
    /// update.  Static runs carry only the placement entry.
    pub obstacle_log: Vec<ObstacleLogEntry>,
}

impl RunReport {
    /// The completed-route subset of the history, in append order.
    pub fn completed_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().filter(|e| e.record.completed)
    }

    /// Owned clone of the completed subset, ready for ranking.
    pub fn completed(&self) -> Vec<HistoryEntry> {
        self.completed_entries().cloned().collect()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_entries().count()
    }
}
