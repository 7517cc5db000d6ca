//! Snapshot module - read-only render data handed to the UI boundary
//!
//! A snapshot is a plain-data copy of everything a frontend needs to draw
//! one frame: the grid, every piece's coordinates, the selection, and the
//! win flag. It borrows nothing from the session, so a renderer can hold it
//! across engine mutations.

use arrayvec::ArrayVec;

use crate::types::{Coord, GameMode, PIECE_CELLS, PIECE_COUNT};

/// One piece as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    /// Raw id, 1..=12
    pub id: u8,
    pub cells: [Coord; PIECE_CELLS],
    pub placed: bool,
}

/// Complete render state for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Grid rows of raw ids, 0 = empty
    pub board: Vec<Vec<u8>>,
    pub pieces: ArrayVec<PieceView, PIECE_COUNT>,
    pub active_index: Option<usize>,
    pub won: bool,
    pub mode: GameMode,
    pub series: usize,
    pub etape: usize,
}

impl GameSnapshot {
    /// Raw id at (row, col); 0 when empty or outside the grid
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.board
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(0)
    }

    pub fn active_piece(&self) -> Option<&PieceView> {
        self.active_index.and_then(|index| self.pieces.get(index))
    }
}
