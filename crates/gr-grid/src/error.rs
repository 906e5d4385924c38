//! Grid-subsystem error type.

use thiserror::Error;

use gr_core::Cell;

/// Errors produced by `gr-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: u32, cols: u32 },

    #[error("grid dimensions {rows}x{cols} describe an empty grid")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("placed {placed} of {requested} obstacles before exhausting the attempt budget")]
    PlacementExhausted { requested: usize, placed: usize },
}

pub type GridResult<T> = Result<T, GridError>;
