use pathgrid_core::Pos;

use crate::engine::{Cost, flat_index};

/// Walks parent links backwards from the end of a search.
///
/// Yields every cell strictly between end and start, beginning with the
/// end's parent and finishing with the cell right after the start. The walk
/// stops at the first cell with no parent, which is the start. When start and
/// end are adjacent nothing is yielded.
///
/// The iterator is finite and cannot be restarted. Parent links must
/// strictly lower the best cost at every hop; a link that does not, or a walk
/// longer than the grid has cells, means the parent map holds a cycle, which
/// the relaxation rule can never produce. Both cases panic.
#[derive(Debug)]
pub struct PathSteps<'a> {
    parent: &'a [Option<Pos>],
    best_cost: &'a [Cost],
    rows: i32,
    cur: Option<Pos>,
    taken: usize,
}

impl<'a> PathSteps<'a> {
    pub(crate) fn new(
        parent: &'a [Option<Pos>],
        best_cost: &'a [Cost],
        rows: i32,
        end: Pos,
    ) -> Self {
        Self {
            parent,
            best_cost,
            rows,
            cur: Some(end),
            taken: 0,
        }
    }

    fn link(&self, p: Pos) -> Option<(Pos, Cost)> {
        let i = flat_index(self.rows, p)?;
        let prev = self.parent[i]?;
        Some((prev, self.best_cost[i]))
    }
}

impl Iterator for PathSteps<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        let cur = self.cur.take()?;
        let (prev, cur_cost) = self.link(cur)?;
        // `prev` is the start when it has no parent of its own.
        let (_, prev_cost) = self.link(prev)?;
        assert!(
            prev_cost < cur_cost,
            "parent chain does not descend in cost at {prev} -> {cur}"
        );
        self.taken += 1;
        assert!(
            self.taken <= self.parent.len(),
            "cycle in parent chain after {} steps",
            self.taken
        );
        self.cur = Some(prev);
        Some(prev)
    }
}

/// A shortest path found by the search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Pos,
    end: Pos,
    cost: Cost,
    /// Intermediate cells in reconstruction order (end side first).
    steps: Vec<Pos>,
}

impl Path {
    pub(crate) fn new(start: Pos, end: Pos, cost: Cost, steps: Vec<Pos>) -> Self {
        debug_assert_eq!(steps.len() as Cost + 1, cost);
        Self {
            start,
            end,
            cost,
            steps,
        }
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// Number of moves from start to end.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Cells strictly between start and end, in the order they were
    /// reconstructed: the end's neighbour first, the start's neighbour last.
    #[inline]
    pub fn intermediate(&self) -> &[Pos] {
        &self.steps
    }

    /// Every cell from start to end inclusive, in walking order.
    pub fn cells(&self) -> Vec<Pos> {
        let mut out = Vec::with_capacity(self.steps.len() + 2);
        out.push(self.start);
        out.extend(self.steps.iter().rev());
        out.push(self.end);
        out
    }

    /// Whether `p` lies on the path, endpoints included.
    pub fn contains(&self, p: Pos) -> bool {
        p == self.start || p == self.end || self.steps.contains(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::UNREACHABLE;

    /// Parent/cost maps for a straight 1×4 run along row 0 of a 4×4 grid.
    fn straight_line() -> (Vec<Option<Pos>>, Vec<Cost>) {
        let mut parent = vec![None; 16];
        let mut cost = vec![UNREACHABLE; 16];
        cost[0] = 0;
        for c in 1..4 {
            parent[c] = Some(Pos::new(0, c as i32 - 1));
            cost[c] = c as Cost;
        }
        (parent, cost)
    }

    #[test]
    fn yields_intermediate_cells_end_first() {
        let (parent, cost) = straight_line();
        let steps: Vec<_> = PathSteps::new(&parent, &cost, 4, Pos::new(0, 3)).collect();
        assert_eq!(steps, vec![Pos::new(0, 2), Pos::new(0, 1)]);
    }

    #[test]
    fn adjacent_endpoints_yield_nothing() {
        let (parent, cost) = straight_line();
        let mut steps = PathSteps::new(&parent, &cost, 4, Pos::new(0, 1));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
    }

    #[test]
    fn not_restartable() {
        let (parent, cost) = straight_line();
        let mut steps = PathSteps::new(&parent, &cost, 4, Pos::new(0, 3));
        assert_eq!(steps.by_ref().count(), 2);
        assert_eq!(steps.next(), None);
    }

    #[test]
    #[should_panic(expected = "does not descend")]
    fn cycle_panics() {
        let mut parent = vec![None; 4];
        let cost = vec![0, 1, 1, UNREACHABLE];
        // (0,1) and (1,0) point at each other with equal cost.
        parent[1] = Some(Pos::new(1, 0));
        parent[2] = Some(Pos::new(0, 1));
        let _ = PathSteps::new(&parent, &cost, 2, Pos::new(0, 1)).count();
    }

    #[test]
    fn path_cells_walk_forward() {
        let p = Path::new(
            Pos::new(0, 0),
            Pos::new(0, 3),
            3,
            vec![Pos::new(0, 2), Pos::new(0, 1)],
        );
        assert_eq!(
            p.cells(),
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]
        );
        assert!(p.contains(Pos::new(0, 0)));
        assert!(p.contains(Pos::new(0, 2)));
        assert!(!p.contains(Pos::new(1, 0)));
    }
}
