use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use core::ops::BitOr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The standard square board: visible cell states plus the hidden mine set.
///
/// Game status is never stored, it is derived from both on every query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    mines: MineSet,
    cells: Array2<CellState>,
    exposed_count: Saturating<CellCount>,
    sealed_count: Saturating<CellCount>,
}

impl Board {
    pub fn new() -> Self {
        let config = GameConfig::STANDARD;
        Self {
            config,
            mines: MineSet::new(config.size),
            cells: Array2::default((config.size, config.size).to_nd_index()),
            exposed_count: Saturating(0),
            sealed_count: Saturating(0),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn mines(&self) -> &MineSet {
        &self.mines
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len()
    }

    pub fn exposed_count(&self) -> CellCount {
        self.exposed_count.0
    }

    pub fn sealed_count(&self) -> CellCount {
        self.sealed_count.0
    }

    /// How many mines have not been sealed yet, negative when over-sealed
    pub fn mines_left(&self) -> isize {
        (self.mines.len() as isize) - (self.sealed_count.0 as isize)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.mines.validate_coords(coords)
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// Every cell with its state, in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, CellState)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, column), &state)| ((row as Coord, column as Coord), state))
    }

    /// Tolerant query: anything off the board is simply not a mine.
    pub fn is_mine_at(&self, coords: Coord2) -> bool {
        self.mines.contains(coords)
    }

    /// Marks hidden truth, independent of what the cell currently displays.
    pub fn set_mine(&mut self, coords: Coord2) -> Result<()> {
        if self.mines.insert(coords)? {
            log::debug!("Mine set at {:?}", coords);
        }
        Ok(())
    }

    /// Adds the configured number of mines at seeded random positions.
    pub fn set_mines(&mut self, seed: u64) -> Result<()> {
        SeededMineGenerator::new(seed).generate(&mut self.mines, self.config.mines)
    }

    pub fn adjacent_mines_count_at(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.mines.adjacent_count(coords))
    }

    pub fn toggle_seal(&mut self, coords: Coord2) -> Result<SealOutcome> {
        use CellState::*;
        use SealOutcome::*;

        let coords = self.validate_coords(coords)?;
        let index = coords.to_nd_index();

        Ok(match self.cells[index] {
            Unexposed => {
                self.cells[index] = Sealed;
                self.sealed_count += 1;
                log::debug!("Sealed cell at {:?}", coords);
                Changed
            }
            Sealed => {
                self.cells[index] = Unexposed;
                self.sealed_count -= 1;
                log::debug!("Unsealed cell at {:?}", coords);
                Changed
            }
            Exposed => NoChange,
        })
    }

    /// Exposes an unexposed cell, cascading through zero-count regions.
    ///
    /// Exposed and sealed cells are left untouched.
    pub fn expose_cell(&mut self, coords: Coord2) -> Result<ExposeOutcome> {
        let coords = self.validate_coords(coords)?;
        Ok(self.expose_single_cell(coords))
    }

    /// Exposes the 3x3 block around `coords` in row-major order, center included.
    pub fn expose_neighbors(&mut self, coords: Coord2) -> Result<ExposeOutcome> {
        let coords = self.validate_coords(coords)?;
        Ok(iter_block(coords, self.size())
            .map(|pos| self.expose_single_cell(pos))
            .reduce(BitOr::bitor)
            .unwrap_or(ExposeOutcome::NoChange))
    }

    /// Exposes every cell through the usual rules, so sealed cells stay sealed.
    pub fn expose_all(&mut self) -> ExposeOutcome {
        let size = self.size();
        (0..size)
            .flat_map(|row| (0..size).map(move |column| (row, column)))
            .map(|pos| self.expose_single_cell(pos))
            .fold(ExposeOutcome::NoChange, BitOr::bitor)
    }

    pub fn game_status(&self) -> GameStatus {
        let state_at = |pos: Coord2| self.cells[pos.to_nd_index()];

        if self.mines.iter().any(|pos| state_at(pos).is_exposed()) {
            return GameStatus::Lost;
        }

        let safe_cells = self.config.total_cells() - self.mines.len();
        if self.mines.iter().all(|pos| state_at(pos).is_sealed())
            && self.exposed_count.0 == safe_cells
        {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    fn expose_single_cell(&mut self, coords: Coord2) -> ExposeOutcome {
        if self.cells[coords.to_nd_index()] != CellState::Unexposed {
            return ExposeOutcome::NoChange;
        }

        self.mark_exposed(coords);
        let mut hit_mine = self.mines.contains(coords);

        // a mine counts 0 for itself, so exposing one cascades as well
        let adjacent_mines = self.mines.adjacent_count(coords);
        log::debug!(
            "Exposed cell at {:?}, mine: {}, adjacent mines: {}",
            coords,
            hit_mine,
            adjacent_mines
        );
        if adjacent_mines == 0 {
            hit_mine |= self.cascade_from(coords);
        }

        if hit_mine {
            ExposeOutcome::HitMine
        } else {
            ExposeOutcome::Exposed
        }
    }

    /// Breadth-first flood fill from an exposed zero-count cell, returning
    /// whether it exposed any mine.
    fn cascade_from(&mut self, origin: Coord2) -> bool {
        let size = self.size();
        let mut visited = BTreeSet::from([origin]);
        let mut frontier = VecDeque::from([origin]);
        let mut hit_mine = false;

        while let Some(center) = frontier.pop_front() {
            for pos in iter_block(center, size) {
                if !visited.insert(pos) {
                    continue;
                }
                if self.cells[pos.to_nd_index()] != CellState::Unexposed {
                    continue;
                }

                self.mark_exposed(pos);
                hit_mine |= self.mines.contains(pos);
                if self.mines.adjacent_count(pos) == 0 {
                    frontier.push_back(pos);
                }
            }
        }

        log::trace!(
            "Cascade from {:?} visited {} cells, {} exposed in total",
            origin,
            visited.len(),
            self.exposed_count.0
        );
        hit_mine
    }

    fn mark_exposed(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()] = CellState::Exposed;
        self.exposed_count += 1;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
