use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {coords:?} are outside the board")]
    OutOfRange { coords: Coord2 },
    #[error("Cannot place {requested} mines on a board with {capacity} cells")]
    InvalidConfiguration {
        requested: CellCount,
        capacity: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
