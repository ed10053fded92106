use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};
use pathgrid_core::{CellState, Grid, Pos};

use crate::distance::heuristic;
use crate::engine::{Astar, Phase, SearchOutcome};
use crate::error::SearchError;
use crate::reconstruct::{Path, PathSteps};
use crate::traits::{Progress, Step};

impl Astar {
    /// Find a shortest path from `start` to `end` on `grid`.
    ///
    /// Moves are orthogonal with unit cost and barriers are impassable.
    /// While running, the engine writes `Frontier` / `Visited` / `Path`
    /// markers into the grid and reports each expansion, then each path
    /// cell, to `progress`. `cancel` is polled once per iteration; once it
    /// reads `true` the run stops with [`SearchOutcome::Cancelled`].
    ///
    /// The configuration is checked first. On error the grid is untouched.
    /// Otherwise old markers are cleared and `start`/`end` get their tags.
    ///
    /// The grid must not change while the run is in progress; the neighbour
    /// graph is snapshotted up front.
    pub fn run<P: Progress>(
        &mut self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        mut progress: P,
        cancel: &AtomicBool,
    ) -> Result<SearchOutcome, SearchError> {
        Self::validate(grid, start, end)?;

        grid.clear_marks();
        grid.set_start(start)?;
        grid.set_end(end)?;
        self.reset(grid);

        let (Some(start_idx), Some(end_idx)) = (self.idx(start), self.idx(end)) else {
            unreachable!("validated endpoints are in bounds");
        };

        self.best_cost[start_idx] = 0;
        self.estimated_total[start_idx] = heuristic(start, end);
        self.frontier.push(start, self.estimated_total[start_idx]);
        self.in_frontier[start_idx] = true;
        self.stats.pushed = 1;
        self.phase = Phase::Running;

        debug!(
            "astar: {}x{} grid, {start} -> {end}, estimate {}",
            grid.rows(),
            grid.rows(),
            self.estimated_total[start_idx]
        );

        loop {
            if cancel.load(Ordering::Relaxed) {
                self.phase = Phase::Cancelled;
                debug!("astar: cancelled after {} expansions", self.stats.expanded);
                return Ok(SearchOutcome::Cancelled);
            }

            let Some(entry) = self.frontier.pop_min() else {
                break;
            };
            let curr = entry.pos;
            let Some(ci) = self.idx(curr) else {
                continue;
            };

            // Skip entries superseded by a cheaper re-insertion.
            if !self.in_frontier[ci] || entry.priority != self.estimated_total[ci] {
                self.stats.stale += 1;
                continue;
            }
            self.in_frontier[ci] = false;

            if ci == end_idx {
                self.phase = Phase::Succeeded;
                let path = self.reconstruct(grid, start, end, &mut progress);
                debug!(
                    "astar: path of cost {} after {} expansions, {} entries left queued",
                    path.cost(),
                    self.stats.expanded,
                    self.frontier.len()
                );
                return Ok(SearchOutcome::PathFound(path));
            }

            let curr_g = self.best_cost[ci];
            let tentative = curr_g + 1;
            let neighbors = std::mem::take(&mut self.adjacency[ci]);

            for &n in neighbors.iter() {
                let Some(ni) = self.idx(n) else {
                    continue;
                };
                if tentative >= self.best_cost[ni] {
                    continue;
                }
                self.parent[ni] = Some(curr);
                self.best_cost[ni] = tentative;
                self.estimated_total[ni] = tentative + heuristic(n, end);

                self.frontier.push(n, self.estimated_total[ni]);
                if self.in_frontier[ni] {
                    self.stats.reinserted += 1;
                } else {
                    self.in_frontier[ni] = true;
                    self.stats.pushed += 1;
                    grid.mark(n, CellState::Frontier);
                }
            }

            self.adjacency[ci] = neighbors;
            self.stats.expanded += 1;
            trace!("astar: expanded {curr} at cost {curr_g}");

            progress.report(Step::Expanded(curr), grid);

            if curr != start {
                grid.mark(curr, CellState::Visited);
            }
        }

        self.phase = Phase::Failed;
        debug!(
            "astar: no path from {start} to {end} after {} expansions",
            self.stats.expanded
        );
        Ok(SearchOutcome::NoPathExists)
    }

    /// Run using the grid's own `Start` and `End` tags as endpoints.
    pub fn run_marked<P: Progress>(
        &mut self,
        grid: &mut Grid,
        progress: P,
        cancel: &AtomicBool,
    ) -> Result<SearchOutcome, SearchError> {
        let start = grid.start().ok_or(SearchError::MissingStart)?;
        let end = grid.end().ok_or(SearchError::MissingEnd)?;
        self.run(grid, start, end, progress, cancel)
    }

    /// Mark the path cells and report each one, end side first.
    fn reconstruct<P: Progress>(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        progress: &mut P,
    ) -> Path {
        let mut steps = Vec::new();
        for p in PathSteps::new(&self.parent, &self.best_cost, self.rows, end) {
            grid.mark(p, CellState::Path);
            progress.report(Step::Path(p), grid);
            steps.push(p);
        }
        Path::new(start, end, self.best_cost(end), steps)
    }
}
