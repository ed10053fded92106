//! The [`Cell`] type — a grid position with a traversal-state tag.

use std::hash::{Hash, Hasher};

use crate::geom::Pos;

/// Traversal state of a cell.
///
/// `Empty`, `Barrier`, `Start` and `End` are set by whoever edits the grid.
/// `Frontier`, `Visited` and `Path` are written by the search for display
/// only; the search never reads them back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    Frontier,
    Visited,
    Path,
}

impl CellState {
    /// All states, in declaration order.
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Barrier,
        CellState::Start,
        CellState::End,
        CellState::Frontier,
        CellState::Visited,
        CellState::Path,
    ];

    /// Whether the search may step onto a cell in this state.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellState::Barrier)
    }

    /// Whether this is one of the markers the search writes while running.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            CellState::Frontier | CellState::Visited | CellState::Path
        )
    }

    /// Layout character for this state.
    pub const fn to_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Barrier => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Path => '*',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Barrier),
            'S' => Some(CellState::Start),
            'E' => Some(CellState::End),
            'o' => Some(CellState::Frontier),
            'x' => Some(CellState::Visited),
            '*' => Some(CellState::Path),
            _ => None,
        }
    }
}

/// A single grid cell. Its position never changes after construction.
///
/// Equality and hashing look at the position only, so two handles to the
/// same coordinate compare equal whatever their states.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    pub state: CellState,
}

impl Cell {
    /// A fresh `Empty` cell at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Empty,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    /// Set the state (builder).
    #[inline]
    pub const fn with_state(mut self, state: CellState) -> Self {
        self.state = state;
        self
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let c = Cell::new(Pos::new(2, 7));
        assert_eq!(c.state, CellState::Empty);
        assert_eq!(c.row(), 2);
        assert_eq!(c.col(), 7);
    }

    #[test]
    fn identity_ignores_state() {
        let a = Cell::new(Pos::new(1, 1));
        let b = a.with_state(CellState::Visited);
        assert_eq!(a, b);
        assert_ne!(a, Cell::new(Pos::new(1, 2)));
    }

    #[test]
    fn char_mapping_is_bijective() {
        for s in CellState::ALL {
            assert_eq!(CellState::from_char(s.to_char()), Some(s));
        }
        assert_eq!(CellState::from_char('?'), None);
    }

    #[test]
    fn only_barrier_blocks() {
        for s in CellState::ALL {
            assert_eq!(s.is_passable(), s != CellState::Barrier);
        }
    }
}
