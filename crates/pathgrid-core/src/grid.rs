//! The [`Grid`] type — a square matrix of [`Cell`]s.
//!
//! Cells are stored row-major in a flat buffer. Editing primitives keep the
//! start/end invariants: at most one `Start`, at most one `End`, and neither
//! of them ever overwritten by a barrier.

use smallvec::SmallVec;

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Pos, Range};

/// Passable orthogonal neighbours of a cell, in search order.
pub type Neighbors = SmallVec<[Pos; 4]>;

/// A `rows`×`rows` grid of cells.
///
/// Two grids are equal when they have the same size and every cell has the
/// same state.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new all-`Empty` grid with `rows` rows and `rows` columns.
    pub fn new(rows: i32) -> Result<Self, GridError> {
        if rows <= 0 {
            return Err(GridError::ZeroRows);
        }
        let cells = Range::square(rows).iter().map(Cell::new).collect();
        Ok(Self { rows, cells })
    }

    /// Side length of the grid.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.rows)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds().contains(p)
    }

    /// Convert a position to its flat row-major index.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.rows as usize + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let rows = self.rows as usize;
        Pos::new((idx / rows) as i32, (idx % rows) as i32)
    }

    /// The cell at `p`, if in bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The state of the cell at `p`, if in bounds.
    #[inline]
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.at(p).map(|c| c.state)
    }

    /// Row-major iterator over every cell.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Positions of all cells currently in `state`.
    pub fn find(&self, state: CellState) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .filter(move |c| c.state == state)
            .map(Cell::pos)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.find(state).count()
    }

    /// Position of the start cell, if placed.
    pub fn start(&self) -> Option<Pos> {
        self.find(CellState::Start).next()
    }

    /// Position of the end cell, if placed.
    pub fn end(&self) -> Option<Pos> {
        self.find(CellState::End).next()
    }

    // -----------------------------------------------------------------------
    // Editing primitives
    // -----------------------------------------------------------------------

    fn slot(&mut self, p: Pos) -> Result<&mut Cell, GridError> {
        let rows = self.rows;
        match self.index(p) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(GridError::OutOfBounds { pos: p, rows }),
        }
    }

    /// Turn `p` into a barrier. Start and end cells cannot be walled over.
    pub fn set_barrier(&mut self, p: Pos) -> Result<(), GridError> {
        let cell = self.slot(p)?;
        match cell.state {
            CellState::Start | CellState::End => Err(GridError::Occupied {
                pos: p,
                state: cell.state,
            }),
            _ => {
                cell.state = CellState::Barrier;
                Ok(())
            }
        }
    }

    /// Place the start at `p`. Fails if a start exists elsewhere or `p` is
    /// the end. Placing it on a barrier replaces the barrier.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        self.place(p, CellState::Start, CellState::End)
    }

    /// Place the end at `p`. Fails if an end exists elsewhere or `p` is the
    /// start. Placing it on a barrier replaces the barrier.
    pub fn set_end(&mut self, p: Pos) -> Result<(), GridError> {
        self.place(p, CellState::End, CellState::Start)
    }

    fn place(&mut self, p: Pos, state: CellState, other: CellState) -> Result<(), GridError> {
        self.slot(p)?;
        if let Some(existing) = self.find(state).find(|&q| q != p) {
            return Err(match state {
                CellState::Start => GridError::DuplicateStart { existing },
                _ => GridError::DuplicateEnd { existing },
            });
        }
        let cell = self.slot(p)?;
        if cell.state == other {
            return Err(GridError::Occupied {
                pos: p,
                state: other,
            });
        }
        cell.state = state;
        Ok(())
    }

    /// Reset `p` to `Empty`, whatever it was. Returns the previous state.
    pub fn clear_cell(&mut self, p: Pos) -> Result<CellState, GridError> {
        let cell = self.slot(p)?;
        Ok(std::mem::replace(&mut cell.state, CellState::Empty))
    }

    /// Reset every cell to `Empty`.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            c.state = CellState::Empty;
        }
    }

    /// Drop all search markers, keeping barriers, start and end.
    pub fn clear_marks(&mut self) {
        for c in self.cells.iter_mut() {
            if c.state.is_transient() {
                c.state = CellState::Empty;
            }
        }
    }

    /// Write a search marker at `p`.
    ///
    /// Only `Frontier`, `Visited` and `Path` may be written, and only over
    /// `Empty` cells or other markers: start, end and barriers keep their
    /// tags. Returns whether the cell changed.
    ///
    /// # Panics
    ///
    /// Panics if `state` is not a transient marker.
    pub fn mark(&mut self, p: Pos, state: CellState) -> bool {
        assert!(state.is_transient(), "mark() only writes search markers, got {state:?}");
        let Some(i) = self.index(p) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if (cell.state == CellState::Empty || cell.state.is_transient()) && cell.state != state {
            cell.state = state;
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// In-bounds, non-barrier orthogonal neighbours of `p`, in the order
    /// down, up, right, left. Always computed from the current barrier
    /// layout.
    pub fn neighbors(&self, p: Pos) -> Neighbors {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.state(n).is_some_and(CellState::is_passable))
            .collect()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.state == b.state)
    }
}

impl Eq for Grid {}
