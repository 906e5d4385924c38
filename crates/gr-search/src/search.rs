//! Horizon-bounded uniform-cost search.
//!
//! # Algorithm
//!
//! Dijkstra-style expansion with lazy deletion: the frontier may hold many
//! stale entries for one cell, and only the first pop for a cell is
//! authoritative.  An explicit step horizon turns the search incremental —
//! an entry sitting exactly on the horizon is frozen into a best-effort
//! partial record instead of being expanded, so the caller can re-run the
//! same request with a larger horizon next tick and pick up deeper.
//!
//! # Determinism
//!
//! Frontier entries order by accumulated cost first, then by the accumulated
//! cell sequence (lexicographic in the grid's neighbor-enumeration order),
//! then by step count.  Equal-cost expansions therefore pop in one fixed
//! order and results are reproducible run to run.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use gr_core::{Cell, Direction, Horizon};
use gr_grid::OccupancyGrid;

use crate::{CostModel, PathRecord};

// ── SearchRequest ────────────────────────────────────────────────────────────

/// One search invocation, with direction carried explicitly.
///
/// `source` and `destination` keep their roles in both directions: a
/// `Backward` request still names the route's source as `source` — the
/// search internally anchors at the destination and walks toward the source,
/// then reverses its node sequence before returning.
#[derive(Copy, Clone, Debug)]
pub struct SearchRequest {
    pub source:      Cell,
    pub destination: Cell,
    pub direction:   Direction,
    pub horizon:     Horizon,
}

// ── Frontier internals ───────────────────────────────────────────────────────

/// A frontier entry: the path walked so far and its accumulated cost.
struct FrontierEntry {
    cost:  f64,
    path:  Vec<Cell>,
    steps: u64,
}

impl FrontierEntry {
    /// The cell this entry currently stands on.  `path` is non-empty by
    /// construction.
    #[inline]
    fn head(&self) -> Cell {
        self.path[self.path.len() - 1]
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.steps.cmp(&other.steps))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// ── bounded_search ───────────────────────────────────────────────────────────

/// Run one horizon-bounded search over `grid`.
///
/// Returns `None` when the frontier empties without reaching the target or
/// the horizon — "no path found" is an expected outcome, not an error.
/// Otherwise the returned record is completed iff the target was reached.
///
/// # Preconditions
///
/// Both anchors must be in bounds; the planner builder validates this before
/// any search runs.
pub fn bounded_search<C: CostModel>(
    grid:    &OccupancyGrid,
    request: &SearchRequest,
    cost:    &C,
) -> Option<PathRecord> {
    debug_assert!(grid.contains(request.source));
    debug_assert!(grid.contains(request.destination));

    let (anchor, target) = match request.direction {
        Direction::Forward => (request.source, request.destination),
        Direction::Backward => (request.destination, request.source),
    };

    // visited[cell] = finalized during this call.  Membership is by cell
    // identity only; cost never participates.
    let mut visited = vec![false; grid.cell_count()];

    // Min-heap via Reverse, as BinaryHeap is a max-heap.
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        cost:  0.0,
        path:  vec![anchor],
        steps: 0,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = entry.head();

        // Lazy deletion: stale entries for an already-finalized cell.
        if visited[grid.index(current)] {
            continue;
        }
        // Overshot the horizon: discard without finalizing.
        if request.horizon.exceeded_by(entry.steps) {
            continue;
        }

        visited[grid.index(current)] = true;

        let completed = current == target;
        if completed || request.horizon.reached_by(entry.steps) {
            return Some(freeze(entry, completed, request.direction));
        }

        for next in grid.neighbors(current) {
            if visited[grid.index(next)] {
                continue;
            }
            let edge = match request.direction {
                Direction::Forward => cost.edge_cost(current, next),
                Direction::Backward => cost.edge_cost(next, current),
            };
            let mut path = entry.path.clone();
            path.push(next);
            frontier.push(Reverse(FrontierEntry {
                cost:  entry.cost + edge,
                path,
                steps: entry.steps + 1,
            }));
        }
    }

    None
}

/// Turn a finalized frontier entry into a `PathRecord`, restoring
/// source-first node order for backward searches.
fn freeze(entry: FrontierEntry, completed: bool, direction: Direction) -> PathRecord {
    let mut nodes = entry.path;
    if direction == Direction::Backward {
        nodes.reverse();
    }
    PathRecord {
        nodes,
        cost: entry.cost,
        time: entry.steps,
        completed,
    }
}
