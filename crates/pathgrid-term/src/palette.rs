//! Cell-state colours.

use crossterm::style::Color;
use pathgrid_core::CellState;

/// Maps each [`CellState`] to a terminal background colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 7],
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

impl Palette {
    /// The classic pathfinding-visualiser scheme: white floor, black walls,
    /// orange start, turquoise end, green frontier, red visited, purple path.
    pub const fn classic() -> Self {
        Self {
            colors: [
                rgb(255, 255, 255),
                rgb(0, 0, 0),
                rgb(255, 165, 0),
                rgb(64, 224, 208),
                rgb(0, 255, 0),
                rgb(255, 0, 0),
                rgb(128, 0, 128),
            ],
        }
    }

    /// The colour used for `state`.
    pub fn color(&self, state: CellState) -> Color {
        self.colors[slot(state)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

fn slot(state: CellState) -> usize {
    match state {
        CellState::Empty => 0,
        CellState::Barrier => 1,
        CellState::Start => 2,
        CellState::End => 3,
        CellState::Frontier => 4,
        CellState::Visited => 5,
        CellState::Path => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_get_distinct_colors() {
        let pal = Palette::classic();
        for (i, a) in CellState::ALL.iter().enumerate() {
            for b in &CellState::ALL[i + 1..] {
                assert_ne!(pal.color(*a), pal.color(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn classic_colors() {
        let pal = Palette::default();
        assert_eq!(pal.color(CellState::Barrier), rgb(0, 0, 0));
        assert_eq!(pal.color(CellState::Start), rgb(255, 165, 0));
        assert_eq!(pal.color(CellState::Path), rgb(128, 0, 128));
    }
}
