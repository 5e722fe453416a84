use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Unexposed,
    Sealed,
    Mine,
    Clear(u8),
}

impl CellView {
    pub const fn glyph(self) -> char {
        match self {
            Self::Unexposed => '.',
            Self::Sealed => 'X',
            Self::Mine => '!',
            Self::Clear(0) => ' ',
            Self::Clear(count) => (b'0' + count) as char,
        }
    }
}

/// Read-only snapshot handed to a presentation layer after each command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub status: GameStatus,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let mut cells = Array2::from_elem((size, size).to_nd_index(), CellView::Unexposed);

        for (coords, state) in board.iter_cells() {
            cells[coords.to_nd_index()] = match state {
                CellState::Unexposed => CellView::Unexposed,
                CellState::Sealed => CellView::Sealed,
                CellState::Exposed if board.is_mine_at(coords) => CellView::Mine,
                CellState::Exposed => CellView::Clear(board.mines().adjacent_count(coords)),
            };
        }

        Self {
            size,
            status: board.game_status(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        in_bounds(coords, self.size).then(|| self.cells[coords.to_nd_index()])
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn from_board_maps_each_cell_state() {
        let mut board = Board::new();
        board.set_mine((0, 0)).unwrap();
        board.set_mine((9, 9)).unwrap();

        board.expose_cell((1, 1)).unwrap();
        board.toggle_seal((0, 1)).unwrap();
        board.expose_cell((9, 9)).unwrap();

        let view = BoardView::from_board(&board);

        assert_eq!(view.status, GameStatus::Lost);
        assert_eq!(view.cell((1, 1)), Some(CellView::Clear(1)));
        assert_eq!(view.cell((0, 1)), Some(CellView::Sealed));
        assert_eq!(view.cell((0, 0)), Some(CellView::Unexposed));
        assert_eq!(view.cell((9, 9)), Some(CellView::Mine));
        assert_eq!(view.cell((10, 0)), None);
    }

    #[test]
    fn display_renders_glyph_grid() {
        let mut board = Board::new();
        board.set_mine((0, 0)).unwrap();
        board.toggle_seal((0, 0)).unwrap();
        board.expose_cell((9, 9)).unwrap();

        let text = BoardView::from_board(&board).to_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("X1        "));
        assert_eq!(lines.next(), Some("11        "));
        assert_eq!(lines.clone().count(), 8);
        assert!(lines.all(|line| line == "          "));
        assert_eq!(board.game_status(), GameStatus::Won);
    }

    #[test]
    fn view_serializes_for_presentation_layer() {
        let board = Board::new();
        let view = BoardView::from_board(&board);

        let json = serde_json::to_string(&view).unwrap();
        let decoded: BoardView = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, view);
    }
}
