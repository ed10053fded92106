use std::collections::VecDeque;

use pathgrid_core::{Grid, Pos};

use crate::engine::{Cost, UNREACHABLE};

/// Unit-cost shortest distance from `from` to `to` by breadth-first search.
///
/// Barriers block, everything else is walkable. Returns `None` if either
/// position is outside the grid or `to` cannot be reached. Unlike
/// [`Astar::run`](crate::Astar::run) this never writes to the grid, which
/// makes it a handy reference for checking A* results.
pub fn bfs_distance(grid: &Grid, from: Pos, to: Pos) -> Option<Cost> {
    let si = grid.index(from)?;
    let ti = grid.index(to)?;

    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        if ci == ti {
            return Some(dist[ci]);
        }
        let d = dist[ci] + 1;
        for np in grid.neighbors(grid.pos(ci)) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = d;
            queue.push_back(ni);
        }
    }
    None
}
