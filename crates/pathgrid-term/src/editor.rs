//! Grid editing state behind the terminal front end.
//!
//! The editor owns the grid between searches and applies user actions to it
//! with the same rules as the classic pathfinding demo: the first clicks place
//! the start and then the end, later clicks draw barriers, and erasing a start
//! or end frees it to be placed again.

use pathgrid_core::{CellState, Grid, GridError, Pos};
use pathgrid_search::{SearchError, SearchOutcome, SearchStats};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;

/// A user intent, decoded from terminal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Main button on a cell.
    Paint(Pos),
    /// Secondary button on a cell.
    Erase(Pos),
    Run,
    Clear,
    Scatter,
    Quit,
}

pub struct Editor {
    grid: Grid,
    rng: StdRng,
    density: f64,
    status: String,
}

impl Editor {
    pub fn new(config: &Config, seed: u64) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(config.rows)?,
            rng: StdRng::seed_from_u64(seed),
            density: config.density,
            status: String::from("place a start cell"),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for the search. Edits must go through [`apply`](Self::apply).
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether both endpoints are placed.
    pub fn ready(&self) -> bool {
        self.grid.start().is_some() && self.grid.end().is_some()
    }

    /// Apply an editing action. `Quit`, and `Run` once both endpoints are
    /// placed, are handled by the caller; an early `Run` only updates the
    /// status line.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Paint(p) => self.paint(p),
            Action::Erase(p) => self.erase(p),
            Action::Clear => {
                self.grid.reset();
                self.status = String::from("cleared; place a start cell");
            }
            Action::Scatter => {
                self.grid.clear_marks();
                let n = self.grid.scatter_barriers(self.density, &mut self.rng);
                self.status = format!("added {n} random barriers");
            }
            Action::Run if !self.ready() => {
                self.status = String::from("place a start and an end before searching");
            }
            Action::Run | Action::Quit => {}
        }
    }

    fn paint(&mut self, p: Pos) {
        let Some(state) = self.grid.state(p) else {
            return;
        };
        if matches!(state, CellState::Start | CellState::End) {
            return;
        }
        let result = if self.grid.start().is_none() {
            self.grid.set_start(p).map(|()| "place an end cell")
        } else if self.grid.end().is_none() {
            self.grid.set_end(p).map(|()| "draw barriers, space to search")
        } else {
            self.grid.set_barrier(p).map(|()| "space to search")
        };
        match result {
            Ok(hint) => self.status = hint.to_string(),
            Err(e) => self.status = e.to_string(),
        }
    }

    fn erase(&mut self, p: Pos) {
        match self.grid.clear_cell(p) {
            Ok(CellState::Start) => self.status = String::from("start removed"),
            Ok(CellState::End) => self.status = String::from("end removed"),
            Ok(_) => {}
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Summarise a finished search in the status line.
    pub fn record(&mut self, result: &Result<SearchOutcome, SearchError>, stats: SearchStats) {
        self.status = match result {
            Ok(SearchOutcome::PathFound(path)) => format!(
                "path found: {} steps, {} cells expanded",
                path.cost(),
                stats.expanded
            ),
            Ok(SearchOutcome::NoPathExists) => {
                format!("no path exists ({} cells expanded)", stats.expanded)
            }
            Ok(SearchOutcome::Cancelled) => String::from("search cancelled"),
            Err(e) => format!("cannot search: {e}"),
        };
    }
}
