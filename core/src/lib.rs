#![no_std]

extern crate alloc;

use core::ops::BitOr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;
mod view;

/// Side length of the standard board.
pub const BOARD_SIZE: Coord = 10;

/// Mines placed by a seeded layout on the standard board.
pub const MINE_COUNT: CellCount = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const STANDARD: Self = Self::new_unchecked(BOARD_SIZE, MINE_COUNT);

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Rejects layouts where rejection sampling could never finish.
    pub fn validate(self) -> Result<Self> {
        let capacity = self.total_cells();
        if self.size < 1 || self.mines >= capacity {
            log::warn!(
                "Rejected configuration, requested {} mines but board has {} cells",
                self.mines,
                capacity
            );
            return Err(GameError::InvalidConfiguration {
                requested: self.mines,
                capacity,
            });
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Unique set of mine positions on a square board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineSet {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineSet {
    pub fn new(size: Coord) -> Self {
        Self {
            mine_mask: Array2::default((size, size).to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn size(&self) -> Coord {
        self.mine_mask.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn len(&self) -> CellCount {
        self.mine_count
    }

    pub fn is_empty(&self) -> bool {
        self.mine_count == 0
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange { coords })
        }
    }

    /// Records a mine, returning whether the position was new.
    pub fn insert(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        if *slot {
            return Ok(false);
        }
        *slot = true;
        self.mine_count += 1;
        Ok(true)
    }

    /// Off-board coordinates are never mines.
    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size()) && self.mine_mask[coords.to_nd_index()]
    }

    /// Mine positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, column), _)| (row as Coord, column as Coord))
    }

    /// Mines among the surrounding cells; a mine's own cell always counts 0.
    pub fn adjacent_count(&self, coords: Coord2) -> u8 {
        if self.contains(coords) {
            return 0;
        }
        iter_neighbors(coords, self.size())
            .filter(|&pos| self.contains(pos))
            .count() as u8
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SealOutcome {
    NoChange,
    Changed,
}

impl SealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExposeOutcome {
    NoChange,
    Exposed,
    HitMine,
}

impl ExposeOutcome {
    pub const fn has_update(self) -> bool {
        use ExposeOutcome::*;
        match self {
            NoChange => false,
            Exposed => true,
            HitMine => true,
        }
    }
}

impl BitOr for ExposeOutcome {
    type Output = ExposeOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use ExposeOutcome::*;
        match (self, rhs) {
            (HitMine, _) | (_, HitMine) => HitMine,
            (Exposed, _) | (_, Exposed) => Exposed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn standard_config_is_ten_by_ten_with_ten_mines() {
        let config = GameConfig::default();

        assert_eq!(config, GameConfig::STANDARD);
        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn config_rejects_board_full_of_mines() {
        let config = GameConfig::new_unchecked(3, 9);

        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfiguration {
                requested: 9,
                capacity: 9
            })
        );
        assert!(GameConfig::new_unchecked(0, 0).validate().is_err());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut mines = MineSet::new(BOARD_SIZE);

        assert_eq!(mines.insert((3, 2)), Ok(true));
        assert_eq!(mines.insert((3, 2)), Ok(false));
        assert_eq!(mines.len(), 1);
        assert!(mines.contains((3, 2)));
    }

    #[test]
    fn insert_rejects_off_board_positions() {
        let mut mines = MineSet::new(BOARD_SIZE);

        assert_eq!(
            mines.insert((10, 0)),
            Err(GameError::OutOfRange { coords: (10, 0) })
        );
        assert!(mines.is_empty());
    }

    #[test]
    fn iter_yields_row_major_positions() {
        let mut mines = MineSet::new(BOARD_SIZE);
        mines.insert((5, 1)).unwrap();
        mines.insert((0, 9)).unwrap();
        mines.insert((5, 0)).unwrap();

        let positions: Vec<_> = mines.iter().collect();

        assert_eq!(positions, vec![(0, 9), (5, 0), (5, 1)]);
    }

    #[test]
    fn expose_outcomes_merge_by_priority() {
        use ExposeOutcome::*;

        assert_eq!(NoChange | NoChange, NoChange);
        assert_eq!(NoChange | Exposed, Exposed);
        assert_eq!(Exposed | HitMine, HitMine);
        assert_eq!(HitMine | NoChange, HitMine);
        assert!(!NoChange.has_update());
        assert!(SealOutcome::Changed.has_update());
    }
}
