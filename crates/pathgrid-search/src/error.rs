use std::fmt;

use pathgrid_core::{GridError, Pos};

/// Reasons a search refuses to start.
///
/// All of these are reported before the grid is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has no cell tagged `Start`.
    MissingStart,
    /// The grid has no cell tagged `End`.
    MissingEnd,
    /// Start and end are the same cell.
    SameStartEnd(Pos),
    /// Start or end is a barrier.
    BarrierEndpoint(Pos),
    /// The grid tags a start somewhere other than the requested one.
    DuplicateStart { requested: Pos, found: Pos },
    /// The grid tags an end somewhere other than the requested one.
    DuplicateEnd { requested: Pos, found: Pos },
    /// The grid rejected the configuration (e.g. out-of-bounds endpoint).
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "no start cell placed"),
            Self::MissingEnd => write!(f, "no end cell placed"),
            Self::SameStartEnd(p) => write!(f, "start and end are both {p}"),
            Self::BarrierEndpoint(p) => write!(f, "endpoint {p} is a barrier"),
            Self::DuplicateStart { requested, found } => {
                write!(f, "start requested at {requested} but grid has a start at {found}")
            }
            Self::DuplicateEnd { requested, found } => {
                write!(f, "end requested at {requested} but grid has an end at {found}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
