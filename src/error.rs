use thiserror::Error;

use crate::grid::Cell;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a move needs at least one step, got {0}")]
    InvalidSteps(i64),

    #[error("unknown direction {0:?}, expected one of E, W, N, S")]
    UnknownDirection(String),

    #[error("{0:?} and {1:?} do not share a row or a column")]
    NotAxisAligned(Cell, Cell),

    #[error("moving {steps} from {from:?} leaves the coordinate range")]
    CoordinateOverflow { from: Cell, steps: i64 },

    #[error("{total} + {gained} cells does not fit the count")]
    CountOverflow { total: u64, gained: u64 },

    #[error("malformed input: {0}")]
    Parse(#[from] nom::error::Error<String>),

    #[error("expected {expected} moves, found {found}")]
    MoveCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
