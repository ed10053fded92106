//! Drawing the grid to a terminal with crossterm.
//!
//! Each grid cell is two terminal columns wide so cells come out roughly
//! square. Only cells whose state changed since the previous draw are
//! written, which keeps per-step redraws during a search cheap.

use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use pathgrid_core::{CellState, Grid, Pos};

use crate::palette::Palette;

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Grid cell under terminal position (`column`, `row`), if any.
pub fn cell_at(grid: &Grid, column: u16, row: u16) -> Option<Pos> {
    let p = Pos::new(row as i32, (column / CELL_WIDTH) as i32);
    grid.contains(p).then_some(p)
}

/// Diffing grid renderer.
pub struct Screen<W: Write> {
    out: W,
    palette: Palette,
    prev: Vec<Option<CellState>>,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            palette,
            prev: Vec::new(),
        }
    }

    /// Forget what is on screen so the next draw repaints every cell.
    pub fn invalidate(&mut self) {
        self.prev.clear();
    }

    /// Draw every cell that changed since the last draw. Returns how many
    /// cells were written.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<usize> {
        if self.prev.len() != grid.len() {
            self.prev = vec![None; grid.len()];
        }
        let mut written = 0;
        for (i, cell) in grid.iter().enumerate() {
            if self.prev[i] == Some(cell.state) {
                continue;
            }
            self.prev[i] = Some(cell.state);
            let p = cell.pos();
            queue!(
                self.out,
                cursor::MoveTo(p.col as u16 * CELL_WIDTH, p.row as u16),
                SetBackgroundColor(self.palette.color(cell.state)),
                Print("  ")
            )?;
            written += 1;
        }
        if written > 0 {
            queue!(self.out, ResetColor)?;
        }
        self.out.flush()?;
        Ok(written)
    }

    /// Write `text` on the line below the grid.
    pub fn status(&mut self, grid: &Grid, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, grid.rows() as u16),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(crossterm::style::Color::Grey),
            Print(text),
            ResetColor
        )?;
        self.out.flush()
    }
}

/// Raw-mode, alternate-screen terminal session with mouse capture.
///
/// The terminal is restored when the guard is dropped, including on early
/// returns and panics that unwind.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_maps_double_width_columns() {
        let g = Grid::new(5).unwrap();
        assert_eq!(cell_at(&g, 0, 0), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(&g, 1, 0), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(&g, 2, 3), Some(Pos::new(3, 1)));
        assert_eq!(cell_at(&g, 9, 4), Some(Pos::new(4, 4)));
        assert_eq!(cell_at(&g, 10, 0), None);
        assert_eq!(cell_at(&g, 0, 5), None);
    }

    #[test]
    fn draw_only_writes_changes() {
        let mut g = Grid::new(3).unwrap();
        let mut screen = Screen::new(Vec::new(), Palette::classic());
        assert_eq!(screen.draw(&g).unwrap(), 9);
        assert_eq!(screen.draw(&g).unwrap(), 0);
        g.set_barrier(Pos::new(1, 1)).unwrap();
        g.mark(Pos::new(0, 0), CellState::Visited);
        assert_eq!(screen.draw(&g).unwrap(), 2);
        screen.invalidate();
        assert_eq!(screen.draw(&g).unwrap(), 9);
    }

    #[test]
    fn resized_grid_redraws_fully() {
        let mut screen = Screen::new(Vec::new(), Palette::classic());
        screen.draw(&Grid::new(2).unwrap()).unwrap();
        assert_eq!(screen.draw(&Grid::new(4).unwrap()).unwrap(), 16);
    }

    #[test]
    fn status_writes_text() {
        let g = Grid::new(2).unwrap();
        let mut screen = Screen::new(Vec::new(), Palette::classic());
        screen.status(&g, "hello").unwrap();
        let out = String::from_utf8_lossy(&screen.out).into_owned();
        assert!(out.contains("hello"));
    }
}
