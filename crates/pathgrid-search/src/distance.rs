use pathgrid_core::Pos;

use crate::engine::Cost;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for 4-directional movement with unit step
/// cost, which is what keeps A* optimal here. A Euclidean or diagonal
/// estimate would need its own admissibility argument.
#[inline]
pub fn heuristic(a: Pos, b: Pos) -> Cost {
    a.manhattan(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_values() {
        assert_eq!(heuristic(Pos::new(0, 0), Pos::new(4, 4)), 8);
        assert_eq!(heuristic(Pos::new(4, 4), Pos::new(0, 0)), 8);
        assert_eq!(heuristic(Pos::new(2, 5), Pos::new(2, 1)), 4);
        assert_eq!(heuristic(Pos::new(3, 3), Pos::new(3, 3)), 0);
    }

    #[test]
    fn consistent_across_one_step() {
        let goal = Pos::new(7, 2);
        for p in [Pos::new(0, 0), Pos::new(5, 5), Pos::new(7, 3)] {
            for n in p.neighbors_4() {
                assert!(heuristic(p, goal) <= 1 + heuristic(n, goal));
            }
        }
    }
}
