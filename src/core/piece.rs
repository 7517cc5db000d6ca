//! Piece module - one pentomino's geometry and local transforms
//!
//! A piece holds an ordered list of five board coordinates. Every transform
//! computes a candidate list, validates it against the board, and only then
//! commits - a rejected transform leaves the piece exactly as it was.
//!
//! The list order is fixed by the pattern scan at creation and preserved by
//! every transform, because the rotation anchor is an index into the list.

use crate::core::board::Board;
use crate::core::patterns::{anchor_index, base_cells, PatternError};
use crate::types::{Coord, PieceId, PIECE_CELLS};

/// Why a transform or placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A candidate cell lies outside the grid
    OutOfBounds,
    /// A candidate cell is held by a different piece
    Occupied,
}

impl PlacementError {
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::OutOfBounds => "out_of_bounds",
            PlacementError::Occupied => "occupied",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlacementError::OutOfBounds => "piece would leave the board",
            PlacementError::Occupied => "cell is held by another piece",
        }
    }
}

/// One pentomino bound to the board it plays on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    cells: [Coord; PIECE_CELLS],
    home: [Coord; PIECE_CELLS],
    placed: bool,
}

impl Piece {
    /// Build a piece from the static pattern table
    pub fn new(id: PieceId) -> Result<Self, PatternError> {
        let cells = base_cells(id)?;
        Ok(Self {
            id,
            cells,
            home: cells,
            placed: false,
        })
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Current coordinate list, in creation order
    pub fn cells(&self) -> &[Coord; PIECE_CELLS] {
        &self.cells
    }

    /// Whether the piece is committed to the board
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Validate a candidate list: every cell in bounds and free of others
    fn check(&self, board: &Board, candidate: &[Coord; PIECE_CELLS]) -> Result<(), PlacementError> {
        for &(row, col) in candidate {
            if !board.in_bounds(row, col) {
                return Err(PlacementError::OutOfBounds);
            }
            if !board.is_free_for(row, col, self.id) {
                return Err(PlacementError::Occupied);
            }
        }
        Ok(())
    }

    /// Translate by (d_row, d_col); commits only when fully legal
    pub fn try_move(
        &mut self,
        board: &Board,
        d_row: i8,
        d_col: i8,
    ) -> Result<(), PlacementError> {
        let mut candidate = self.cells;
        for (row, col) in &mut candidate {
            // A full-range delta overflows i8; such a cell is off the grid.
            *row = row.checked_add(d_row).ok_or(PlacementError::OutOfBounds)?;
            *col = col.checked_add(d_col).ok_or(PlacementError::OutOfBounds)?;
        }
        self.check(board, &candidate)?;
        self.cells = candidate;
        Ok(())
    }

    /// Rotate 90 degrees about this piece's fixed anchor cell
    pub fn try_rotate(&mut self, board: &Board) -> Result<(), PlacementError> {
        let (anchor_row, anchor_col) = self.cells[anchor_index(self.id)];
        let mut candidate = self.cells;
        for cell in &mut candidate {
            let (row, col) = (cell.0 - anchor_row, cell.1 - anchor_col);
            // (r, c) -> (c, -r) about the anchor; an anchor near the i8 edge
            // can push the sum past the coordinate range
            *cell = (
                anchor_row.checked_add(col).ok_or(PlacementError::OutOfBounds)?,
                anchor_col.checked_sub(row).ok_or(PlacementError::OutOfBounds)?,
            );
        }
        self.check(board, &candidate)?;
        self.cells = candidate;
        Ok(())
    }

    /// Reflect across the piece's own bounding box, preserving its leftmost
    /// column
    pub fn try_mirror(&mut self, board: &Board) -> Result<(), PlacementError> {
        let max_col = self.cells.iter().map(|&(_, col)| col).max().unwrap_or(0);
        let min_col = self.cells.iter().map(|&(_, col)| col).min().unwrap_or(0);

        let mut candidate = self.cells;
        for (_, col) in &mut candidate {
            *col = max_col - *col;
        }
        // Re-shift so the leftmost extent is unchanged
        let new_min = candidate.iter().map(|&(_, col)| col).min().unwrap_or(0);
        let shift = min_col - new_min;
        for (_, col) in &mut candidate {
            *col += shift;
        }

        self.check(board, &candidate)?;
        self.cells = candidate;
        Ok(())
    }

    /// Commit the piece to the board - the sole placement entry point
    ///
    /// Requires every current cell to be empty; on failure nothing changes.
    pub fn place(&mut self, board: &mut Board) -> Result<(), PlacementError> {
        for &(row, col) in &self.cells {
            if !board.in_bounds(row, col) {
                return Err(PlacementError::OutOfBounds);
            }
            if !board.is_empty(row, col) {
                return Err(PlacementError::Occupied);
            }
        }
        let locked = board.lock_cells(&self.cells, self.id);
        debug_assert!(locked, "pre-checked cells failed to lock");
        self.placed = true;
        Ok(())
    }

    /// Take the piece off the board. Idempotent.
    pub fn remove(&mut self, board: &mut Board) {
        board.release_piece(self.id);
        self.placed = false;
    }

    /// Return to the spawn coordinates from the pattern table
    pub fn reset(&mut self) {
        self.cells = self.home;
        self.placed = false;
    }

    /// Adopt coordinates recovered from a persisted grid snapshot
    pub(crate) fn restore_placed(&mut self, cells: [Coord; PIECE_CELLS]) {
        self.cells = cells;
        self.placed = true;
    }
}
