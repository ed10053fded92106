use pathgrid_core::{Grid, Pos};

/// What the search just did, reported to a [`Progress`] hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// `pos` was popped and all its neighbours were relaxed.
    Expanded(Pos),
    /// `pos` was added to the reconstructed path.
    Path(Pos),
}

impl Step {
    #[inline]
    pub fn pos(self) -> Pos {
        match self {
            Step::Expanded(p) | Step::Path(p) => p,
        }
    }
}

/// Observer of a running search.
///
/// Called synchronously, exactly once per expanded cell and once per
/// reconstructed path cell, in that order. The grid passed in already
/// carries the markers for the step. The search never looks at anything
/// the hook does, so rendering, logging or recording all fit here.
pub trait Progress {
    fn report(&mut self, step: Step, grid: &Grid);
}

impl<F: FnMut(Step, &Grid)> Progress for F {
    #[inline]
    fn report(&mut self, step: Step, grid: &Grid) {
        self(step, grid)
    }
}

/// A [`Progress`] hook that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    #[inline]
    fn report(&mut self, _step: Step, _grid: &Grid) {}
}
