//! Planner time model.
//!
//! One `Tick` is one iteration of the orchestration loop.  The search horizon
//! grows with the tick counter: searches run at tick `t` may take at most `t`
//! edge-traversal steps, so the loop explores incrementally deeper as time
//! advances and dynamic obstacles move.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute planner tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Horizon ──────────────────────────────────────────────────────────────────

/// Step budget for one bounded-search call.
///
/// `Bounded(h)` allows at most `h` edge traversals before the search is
/// forced to return a (possibly incomplete) result.  `Unbounded` runs the
/// search to completion.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Horizon {
    Bounded(u64),
    Unbounded,
}

impl Horizon {
    /// `true` if an entry that has taken `steps` traversals overshot the
    /// budget and must be discarded without finalization.
    #[inline]
    pub fn exceeded_by(self, steps: u64) -> bool {
        match self {
            Horizon::Bounded(h) => steps > h,
            Horizon::Unbounded => false,
        }
    }

    /// `true` if an entry sits exactly on the budget and must be frozen into
    /// a best-effort result.
    #[inline]
    pub fn reached_by(self, steps: u64) -> bool {
        match self {
            Horizon::Bounded(h) => steps == h,
            Horizon::Unbounded => false,
        }
    }
}
