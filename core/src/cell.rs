use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Unexposed,
    Exposed,
    Sealed,
}

impl CellState {
    pub const fn is_exposed(self) -> bool {
        matches!(self, Self::Exposed)
    }

    pub const fn is_sealed(self) -> bool {
        matches!(self, Self::Sealed)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Unexposed
    }
}

/// Outcome derived from the cell states and the mine set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}
