//! The occupancy grid.
//!
//! # Data layout
//!
//! Obstacle flags live in one flat row-major `Vec<bool>`; a cell's flag sits
//! at `row * cols + col`.  Iterating a cell's neighbors touches at most eight
//! adjacent flags, so the search inner loop stays on contiguous memory.
//!
//! # Neighbor order
//!
//! `neighbors` returns candidates in a fixed order — up, down, left, right,
//! then NW, NE, SW, SE under eight-connectivity.  Downstream search code uses
//! the accumulated cell sequence as a deterministic tie-break, so this order
//! is part of the grid's contract, not an implementation detail.

use gr_core::{Cell, Connectivity};

use crate::{GridError, GridResult};

/// Offsets in contract order.  The first four are the axis moves; the
/// diagonal four apply only under [`Connectivity::Eight`].
const OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A fixed-size 2-D obstacle map with a connectivity policy.
///
/// Dimensions and connectivity are fixed for the grid's lifetime.  Obstacle
/// flags are mutated only by the placement/update operations in
/// [`obstacles`][crate::obstacles], never by search code.
pub struct OccupancyGrid {
    rows: u32,
    cols: u32,
    connectivity: Connectivity,
    blocked: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an obstacle-free grid.
    pub fn new(rows: u32, cols: u32, connectivity: Connectivity) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            connectivity,
            blocked: vec![false; rows as usize * cols as usize],
        })
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// `true` if `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Flat index of an in-bounds cell.
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row as usize * self.cols as usize + cell.col as usize
    }

    /// Bounds-checked obstacle query.
    ///
    /// Passing an out-of-range cell is a programmer error and yields
    /// [`GridError::OutOfBounds`]; internal callers reach cells through
    /// [`neighbors`][Self::neighbors], which has already bounds-checked them.
    pub fn is_obstacle(&self, cell: Cell) -> GridResult<bool> {
        if !self.contains(cell) {
            return Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.blocked[self.index(cell)])
    }

    /// Every cell one connectivity step from `cell` that is in bounds and
    /// not currently an obstacle, in contract order.
    ///
    /// Never includes `cell` itself.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let take = match self.connectivity {
            Connectivity::Four => 4,
            Connectivity::Eight => 8,
        };
        let mut out = Vec::with_capacity(take);
        for &(dr, dc) in &OFFSETS[..take] {
            let row = cell.row as i64 + dr;
            let col = cell.col as i64 + dc;
            if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
                continue;
            }
            let next = Cell::new(row as u32, col as u32);
            if !self.blocked[self.index(next)] {
                out.push(next);
            }
        }
        out
    }

    /// Mark every cell in `cells` as an obstacle, silently skipping any that
    /// appears in `sources` or `destinations`.
    ///
    /// Idempotent: re-applying the same set leaves the flags unchanged.
    pub fn set_obstacles(&mut self, cells: &[Cell], sources: &[Cell], destinations: &[Cell]) {
        for &cell in cells {
            debug_assert!(self.contains(cell));
            if sources.contains(&cell) || destinations.contains(&cell) {
                continue;
            }
            let idx = self.index(cell);
            self.blocked[idx] = true;
        }
    }

    /// Unmark every cell in `cells`.  The inverse of
    /// [`set_obstacles`][Self::set_obstacles], used when a dynamic update
    /// re-applies a moved obstacle set.
    pub fn clear_obstacles(&mut self, cells: &[Cell]) {
        for &cell in cells {
            debug_assert!(self.contains(cell));
            let idx = self.index(cell);
            self.blocked[idx] = false;
        }
    }

    /// Number of cells currently flagged as obstacles.
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}
