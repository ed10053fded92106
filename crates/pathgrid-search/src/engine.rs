use log::warn;
use pathgrid_core::{CellState, Grid, GridError, Neighbors, Pos};

use crate::error::SearchError;
use crate::frontier::FrontierQueue;
use crate::reconstruct::{Path, PathSteps};

/// Path cost in steps.
pub type Cost = u32;

/// Sentinel meaning "no known path" in cost maps.
pub const UNREACHABLE: Cost = Cost::MAX;

/// Where an [`Astar`] engine is in its run cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    PathFound(Path),
    /// The frontier ran dry before reaching the end. Not an error.
    NoPathExists,
    /// The cancellation flag was raised. Grid markers and engine state are
    /// whatever they were at that point.
    Cancelled,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::PathFound(p) => Some(p),
            _ => None,
        }
    }
}

/// Counters for the most recent run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and expanded (one progress report each).
    pub expanded: usize,
    /// Cells that joined the frontier.
    pub pushed: usize,
    /// Extra queue entries for cells whose priority improved while queued.
    pub reinserted: usize,
    /// Stale queue entries thrown away on pop.
    pub stale: usize,
}

/// A* search engine over a [`Grid`].
///
/// The engine owns the per-run search state (cost maps, parents, frontier)
/// and keeps it after the run so callers can inspect it. Every run starts by
/// resetting that state, so one engine can be reused across runs.
#[derive(Debug, Default)]
pub struct Astar {
    pub(crate) rows: i32,
    pub(crate) best_cost: Vec<Cost>,
    pub(crate) estimated_total: Vec<Cost>,
    pub(crate) parent: Vec<Option<Pos>>,
    pub(crate) in_frontier: Vec<bool>,
    pub(crate) adjacency: Vec<Neighbors>,
    pub(crate) frontier: FrontierQueue,
    pub(crate) phase: Phase,
    pub(crate) stats: SearchStats,
}

impl Astar {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Lowest known cost from the start to `p` in the last run, or
    /// [`UNREACHABLE`].
    pub fn best_cost(&self, p: Pos) -> Cost {
        self.idx(p).map_or(UNREACHABLE, |i| self.best_cost[i])
    }

    /// `best_cost(p) + heuristic(p, end)` in the last run, or
    /// [`UNREACHABLE`].
    pub fn estimated_total(&self, p: Pos) -> Cost {
        self.idx(p).map_or(UNREACHABLE, |i| self.estimated_total[i])
    }

    /// Predecessor of `p` on its best known path. The start never has one.
    pub fn parent(&self, p: Pos) -> Option<Pos> {
        self.idx(p).and_then(|i| self.parent[i])
    }

    /// Whether `p` is currently queued.
    pub fn in_frontier(&self, p: Pos) -> bool {
        self.idx(p).is_some_and(|i| self.in_frontier[i])
    }

    /// Walk the parent chain of the last run backwards from `end`.
    ///
    /// See [`PathSteps`].
    pub fn path_steps(&self, end: Pos) -> PathSteps<'_> {
        PathSteps::new(&self.parent, &self.best_cost, self.rows, end)
    }

    /// Rebuild the path of the last run without touching any grid.
    ///
    /// Returns `None` unless the last run succeeded for this `start`/`end`.
    pub fn path(&self, start: Pos, end: Pos) -> Option<Path> {
        if self.phase != Phase::Succeeded || self.best_cost(start) != 0 {
            return None;
        }
        let cost = self.best_cost(end);
        if cost == UNREACHABLE {
            return None;
        }
        Some(Path::new(start, end, cost, self.path_steps(end).collect()))
    }

    // -----------------------------------------------------------------------
    // Run setup
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        flat_index(self.rows, p)
    }

    /// Check that `start`/`end` form a runnable configuration on `grid`.
    pub(crate) fn validate(grid: &Grid, start: Pos, end: Pos) -> Result<(), SearchError> {
        let result = Self::check(grid, start, end);
        if let Err(e) = &result {
            warn!("search rejected: {e}");
        }
        result
    }

    fn check(grid: &Grid, start: Pos, end: Pos) -> Result<(), SearchError> {
        for p in [start, end] {
            if !grid.contains(p) {
                return Err(GridError::OutOfBounds {
                    pos: p,
                    rows: grid.rows(),
                }
                .into());
            }
        }
        if start == end {
            return Err(SearchError::SameStartEnd(start));
        }
        for p in [start, end] {
            if grid.state(p) == Some(CellState::Barrier) {
                return Err(SearchError::BarrierEndpoint(p));
            }
        }
        if let Some(found) = grid.find(CellState::Start).find(|&q| q != start) {
            return Err(SearchError::DuplicateStart {
                requested: start,
                found,
            });
        }
        if let Some(found) = grid.find(CellState::End).find(|&q| q != end) {
            return Err(SearchError::DuplicateEnd {
                requested: end,
                found,
            });
        }
        Ok(())
    }

    /// Size the state for `grid`, reset it, and snapshot adjacency from the
    /// current barrier layout.
    pub(crate) fn reset(&mut self, grid: &Grid) {
        let len = grid.len();
        self.rows = grid.rows();

        self.best_cost.clear();
        self.best_cost.resize(len, UNREACHABLE);
        self.estimated_total.clear();
        self.estimated_total.resize(len, UNREACHABLE);
        self.parent.clear();
        self.parent.resize(len, None);
        self.in_frontier.clear();
        self.in_frontier.resize(len, false);

        self.adjacency.clear();
        self.adjacency
            .extend((0..len).map(|i| grid.neighbors(grid.pos(i))));

        self.frontier.clear();
        self.stats = SearchStats::default();
        self.phase = Phase::Idle;
    }
}

/// Row-major index of `p` in a `rows`×`rows` square.
#[inline]
pub(crate) fn flat_index(rows: i32, p: Pos) -> Option<usize> {
    if p.row < 0 || p.col < 0 || p.row >= rows || p.col >= rows {
        return None;
    }
    Some(p.row as usize * rows as usize + p.col as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_engine_knows_nothing() {
        let a = Astar::new();
        assert_eq!(a.phase(), Phase::Idle);
        assert_eq!(a.best_cost(Pos::new(0, 0)), UNREACHABLE);
        assert_eq!(a.parent(Pos::new(0, 0)), None);
        assert!(!a.in_frontier(Pos::new(0, 0)));
    }

    #[test]
    fn flat_index_bounds() {
        assert_eq!(flat_index(3, Pos::new(0, 0)), Some(0));
        assert_eq!(flat_index(3, Pos::new(2, 1)), Some(7));
        assert_eq!(flat_index(3, Pos::new(3, 0)), None);
        assert_eq!(flat_index(3, Pos::new(0, -1)), None);
    }

    #[test]
    fn validate_rejects_bad_configurations() {
        let g = Grid::parse(
            "
S.#
...
..E",
        )
        .unwrap();
        let s = Pos::new(0, 0);
        let e = Pos::new(2, 2);
        assert_eq!(Astar::validate(&g, s, e), Ok(()));
        assert_eq!(
            Astar::validate(&g, s, Pos::new(1, 1)),
            Err(SearchError::DuplicateEnd {
                requested: Pos::new(1, 1),
                found: e
            })
        );
        assert_eq!(
            Astar::validate(&g, s, Pos::new(0, 2)),
            Err(SearchError::BarrierEndpoint(Pos::new(0, 2)))
        );
        assert_eq!(
            Astar::validate(&g, Pos::new(1, 1), e),
            Err(SearchError::DuplicateStart {
                requested: Pos::new(1, 1),
                found: s
            })
        );
        assert_eq!(
            Astar::validate(&g, s, Pos::new(3, 3)),
            Err(SearchError::Grid(GridError::OutOfBounds {
                pos: Pos::new(3, 3),
                rows: 3
            }))
        );
    }

    #[test]
    fn validate_same_start_end() {
        let g = Grid::new(3).unwrap();
        let p = Pos::new(1, 1);
        assert_eq!(Astar::validate(&g, p, p), Err(SearchError::SameStartEnd(p)));
    }

    #[test]
    fn validate_accepts_untagged_grid() {
        let g = Grid::new(4).unwrap();
        assert!(Astar::validate(&g, Pos::new(0, 0), Pos::new(3, 3)).is_ok());
    }

    #[test]
    fn reset_snapshots_adjacency() {
        let mut g = Grid::new(3).unwrap();
        g.set_barrier(Pos::new(1, 0)).unwrap();
        let mut a = Astar::new();
        a.reset(&g);
        assert_eq!(a.adjacency.len(), 9);
        assert_eq!(a.adjacency[0].as_slice(), &[Pos::new(0, 1)]);
        assert!(a.best_cost.iter().all(|&c| c == UNREACHABLE));
    }
}
