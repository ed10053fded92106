//! A* shortest-path search over a [`pathgrid_core::Grid`].
//!
//! Movement is 4-directional with unit cost; barriers are impassable. The
//! search is driven by an [`Astar`] engine which owns the per-run state:
//!
//! - **Frontier queue** ([`FrontierQueue`]): a min-heap keyed by
//!   `(estimated total, insertion sequence, position)`, so ties always pop
//!   first-in first-out and runs are reproducible.
//! - **Heuristic** ([`heuristic`]): Manhattan distance.
//! - **Path reconstruction** ([`PathSteps`]): walks parent links back from the
//!   end once the end is popped.
//!
//! Callers observe a run through a [`Progress`] hook, called once per
//! expanded cell and once per path cell, and may stop it early through an
//! [`AtomicBool`] polled once per iteration.
//!
//! ```
//! use std::sync::atomic::AtomicBool;
//! use pathgrid_core::Grid;
//! use pathgrid_search::{NoProgress, SearchOutcome, run_marked};
//!
//! let mut grid: Grid = "
//! S.#.
//! ..#.
//! ....
//! .#.E".parse().unwrap();
//! let outcome = run_marked(&mut grid, NoProgress, &AtomicBool::new(false)).unwrap();
//! match outcome {
//!     SearchOutcome::PathFound(path) => assert_eq!(path.cost(), 6),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod astar;
mod bfs;
mod distance;
mod engine;
mod error;
mod frontier;
mod reconstruct;
mod traits;

use std::sync::atomic::AtomicBool;

use pathgrid_core::{Grid, Pos};

pub use bfs::bfs_distance;
pub use distance::heuristic;
pub use engine::{Astar, Cost, Phase, SearchOutcome, SearchStats, UNREACHABLE};
pub use error::SearchError;
pub use frontier::{FrontierEntry, FrontierQueue};
pub use reconstruct::{Path, PathSteps};
pub use traits::{NoProgress, Progress, Step};

/// Run a one-off A* search from `start` to `end`.
///
/// See [`Astar::run`].
pub fn run_search<P: Progress>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    progress: P,
    cancel: &AtomicBool,
) -> Result<SearchOutcome, SearchError> {
    Astar::new().run(grid, start, end, progress, cancel)
}

/// Run a one-off A* search between the grid's `Start` and `End` cells.
///
/// See [`Astar::run_marked`].
pub fn run_marked<P: Progress>(
    grid: &mut Grid,
    progress: P,
    cancel: &AtomicBool,
) -> Result<SearchOutcome, SearchError> {
    Astar::new().run_marked(grid, progress, cancel)
}
