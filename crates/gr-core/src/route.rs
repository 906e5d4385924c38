//! Route identity.
//!
//! A planning run launches one search per (source, destination, direction)
//! combination per tick.  `RouteKey` is the content-derived identifier of
//! that combination: it stays stable across ticks no matter how the set of
//! in-flight searches grows or shrinks, so a logical route can never be
//! counted as newly completed twice.

use std::fmt;

use crate::Cell;

// ── Direction ────────────────────────────────────────────────────────────────

/// Which anchor a bounded search expands from.
///
/// `Forward` expands source→destination; `Backward` expands
/// destination→source and reverses its node sequence before returning, so a
/// `PathRecord`'s `nodes` always read source-first either way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── RouteKey ─────────────────────────────────────────────────────────────────

/// Stable identity of one logical route: one slot per
/// (source, destination, direction) combination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteKey {
    pub source:      Cell,
    pub destination: Cell,
    pub direction:   Direction,
}

impl RouteKey {
    #[inline]
    pub fn new(source: Cell, destination: Cell, direction: Direction) -> Self {
        Self { source, destination, direction }
    }
}

impl fmt::Display for RouteKey {
    /// Prints `(r, c)->(r, c)/direction` — the `path_id` column of the
    /// external path record format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}/{}", self.source, self.destination, self.direction)
    }
}
