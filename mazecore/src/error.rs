use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dims::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid maze size {0}, must be at least 1")]
    InvalidSize(i32),
    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(Coord, Coord),
    #[error("malformed grid; {0}")]
    MalformedGrid(String),
    #[error("path must contain at least 2 coordinates, got {0}")]
    EmptyPath(usize),
    #[error("coordinate {0} is outside of the grid")]
    OutOfBounds(Coord),
    #[error("no open passage between {0} and {1}")]
    DisconnectedStep(Coord, Coord),
    #[error("path must go from {expected_entry} to {expected_exit}, goes from {entry} to {exit}")]
    WrongEndpoints {
        entry: Coord,
        exit: Coord,
        expected_entry: Coord,
        expected_exit: Coord,
    },
}

/// Fieldless counterpart of [`Error`], for reporting across the core boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidSize,
    NotAdjacent,
    MalformedGrid,
    EmptyPath,
    OutOfBounds,
    DisconnectedStep,
    WrongEndpoints,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidSize(_) => ErrorKind::InvalidSize,
            Error::NotAdjacent(..) => ErrorKind::NotAdjacent,
            Error::MalformedGrid(_) => ErrorKind::MalformedGrid,
            Error::EmptyPath(_) => ErrorKind::EmptyPath,
            Error::OutOfBounds(_) => ErrorKind::OutOfBounds,
            Error::DisconnectedStep(..) => ErrorKind::DisconnectedStep,
            Error::WrongEndpoints { .. } => ErrorKind::WrongEndpoints,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
