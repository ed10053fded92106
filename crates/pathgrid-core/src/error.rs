//! Errors raised while building or editing a [`Grid`](crate::Grid).

use std::fmt;

use crate::cell::CellState;
use crate::geom::Pos;

/// Errors that can occur when building, parsing or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row.
    ZeroRows,
    /// The position lies outside the grid.
    OutOfBounds { pos: Pos, rows: i32 },
    /// The edit would overwrite the start or end cell.
    Occupied { pos: Pos, state: CellState },
    /// A start cell is already placed elsewhere.
    DuplicateStart { existing: Pos },
    /// An end cell is already placed elsewhere.
    DuplicateEnd { existing: Pos },
    /// Layout text is not a square block of equal-width lines.
    NotSquare { line: usize, width: usize, rows: usize },
    /// Layout text contains a character with no cell-state meaning.
    InvalidChar { ch: char, pos: Pos },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRows => write!(f, "grid must have at least one row"),
            Self::OutOfBounds { pos, rows } => {
                write!(f, "position {pos} is outside the {rows}x{rows} grid")
            }
            Self::Occupied { pos, state } => {
                write!(f, "cell {pos} is occupied by {state:?}")
            }
            Self::DuplicateStart { existing } => {
                write!(f, "start is already placed at {existing}")
            }
            Self::DuplicateEnd { existing } => write!(f, "end is already placed at {existing}"),
            Self::NotSquare { line, width, rows } => write!(
                f,
                "layout: line {line} has width {width}, expected {rows} for a square grid"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
