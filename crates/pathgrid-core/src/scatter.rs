//! Random barrier placement.

use rand::{Rng, RngExt};

use crate::cell::CellState;
use crate::grid::Grid;

impl Grid {
    /// Turn each `Empty` cell into a barrier with probability `density`
    /// (clamped to 0.0–1.0). Start, end and existing barriers are left alone.
    ///
    /// Returns the number of barriers added.
    pub fn scatter_barriers(&mut self, density: f64, rng: &mut impl Rng) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut added = 0;
        for p in self.bounds().iter() {
            if self.state(p) != Some(CellState::Empty) {
                continue;
            }
            let r: f64 = rng.random();
            if r < density && self.set_barrier(p).is_ok() {
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Pos;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_keeps_endpoints() {
        let mut g = Grid::new(10).unwrap();
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_end(Pos::new(9, 9)).unwrap();
        let added = g.scatter_barriers(1.0, &mut StdRng::seed_from_u64(7));
        assert_eq!(added, 98);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.end(), Some(Pos::new(9, 9)));
    }

    #[test]
    fn scatter_zero_density_is_noop() {
        let mut g = Grid::new(8).unwrap();
        assert_eq!(g.scatter_barriers(0.0, &mut rand::rng()), 0);
        assert_eq!(g.count(CellState::Barrier), 0);
    }

    #[test]
    fn scatter_is_seed_deterministic() {
        let mut a = Grid::new(12).unwrap();
        let mut b = Grid::new(12).unwrap();
        a.scatter_barriers(0.3, &mut StdRng::seed_from_u64(42));
        b.scatter_barriers(0.3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        let n = a.count(CellState::Barrier);
        assert!(n > 0 && n < 144);
    }
}
