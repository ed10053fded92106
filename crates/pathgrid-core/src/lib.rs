//! **pathgrid-core** — grid model for the pathgrid shortest-path finder.
//!
//! This crate provides the types every other pathgrid crate builds on:
//! positions, cells with their traversal-state tags, the square [`Grid`]
//! with its editing primitives and neighbour derivation, and a text layout
//! format for building grids by hand.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod scatter;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use geom::{Pos, Range};
pub use grid::{Grid, Neighbors};

/// Build an all-`Empty` square grid with `rows` rows and columns.
pub fn build_grid(rows: i32) -> Result<Grid, GridError> {
    Grid::new(rows)
}
