//! Text layouts for grids.
//!
//! A layout is a square block of characters, one per cell:
//!
//! | char | state |
//! |---|---|
//! | `.` | Empty |
//! | `#` | Barrier |
//! | `S` | Start |
//! | `E` | End |
//! | `o` | Frontier |
//! | `x` | Visited |
//! | `*` | Path |
//!
//! Leading and trailing whitespace around the whole block is ignored, as is
//! trailing whitespace on each line. [`Grid`]'s `Display` writes the same
//! format back, so layouts double as readable snapshots in tests.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Pos;
use crate::grid::Grid;

impl Grid {
    /// Build a grid from a text layout.
    ///
    /// Start and end go through the regular editing primitives, so a layout
    /// with two `S` or two `E` is rejected.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        let rows = lines.len();
        let mut grid = Grid::new(rows as i32)?;

        for (r, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != rows {
                return Err(GridError::NotSquare {
                    line: r,
                    width,
                    rows,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                let state = CellState::from_char(ch).ok_or(GridError::InvalidChar { ch, pos })?;
                match state {
                    CellState::Empty => {}
                    CellState::Barrier => grid.set_barrier(pos)?,
                    CellState::Start => grid.set_start(pos)?,
                    CellState::End => grid.set_end(pos)?,
                    marker => {
                        grid.mark(pos, marker);
                    }
                }
            }
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows() as usize;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 && i % rows == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", cell.state.to_char())?;
        }
        Ok(())
    }
}
