//! Session module - drives pieces against the board for one puzzle instance
//!
//! The session owns the board and the roster of playable pieces, tracks the
//! active selection, and applies discrete player intents. All game rules
//! live in `Piece`/`Board`; the session only sequences them and keeps the
//! per-piece "moved since selection" flag the switch rule depends on.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::patterns::PatternError;
use crate::core::piece::{Piece, PlacementError};
use crate::core::progression;
use crate::core::snapshot::{GameSnapshot, PieceView};
use crate::types::{
    EngineAction, GameMode, PieceId, FREE_BOARD_HEIGHT, FREE_BOARD_WIDTH, PIECE_CELLS,
    PIECE_COUNT, SLAM_BOARD_HEIGHT,
};

/// Why the session could not be built or restored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A board dimension of zero; the empty grid would count as solved
    EmptyBoard,
    /// Grand chelem series or reveal count outside the tables
    BadSeries,
    /// Persisted grid was ragged, empty, or held an unknown id
    BadGrid,
    /// A placed piece's id did not appear exactly five times in the grid
    BadPlacedCells,
    /// Static pattern table corruption
    Pattern(PatternError),
}

impl SessionError {
    pub fn message(self) -> &'static str {
        match self {
            SessionError::EmptyBoard => "board dimensions must be non-zero",
            SessionError::BadSeries => "unknown grand chelem series or reveal count",
            SessionError::BadGrid => "saved grid is not a valid board",
            SessionError::BadPlacedCells => "saved grid does not hold five cells for a placed piece",
            SessionError::Pattern(e) => e.message(),
        }
    }
}

impl From<PatternError> for SessionError {
    fn from(e: PatternError) -> Self {
        SessionError::Pattern(e)
    }
}

/// Why a player intent was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    OutOfBounds,
    Occupied,
    NoActivePiece,
    BadPieceIndex,
}

impl ActionError {
    /// Stable reason tag the UI maps to messages and sounds
    pub fn code(self) -> &'static str {
        match self {
            ActionError::OutOfBounds => "out_of_bounds",
            ActionError::Occupied => "occupied",
            ActionError::NoActivePiece => "no_active_piece",
            ActionError::BadPieceIndex => "bad_piece_index",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ActionError::OutOfBounds => "piece would leave the board",
            ActionError::Occupied => "cell is held by another piece",
            ActionError::NoActivePiece => "no piece is selected",
            ActionError::BadPieceIndex => "piece index outside the roster",
        }
    }
}

impl From<PlacementError> for ActionError {
    fn from(e: PlacementError) -> Self {
        match e {
            PlacementError::OutOfBounds => ActionError::OutOfBounds,
            PlacementError::Occupied => ActionError::Occupied,
        }
    }
}

/// One roster entry: the piece plus its moved-since-selection flag
#[derive(Debug, Clone)]
struct PieceSlot {
    piece: Piece,
    moved: bool,
}

/// One puzzle instance
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    slots: ArrayVec<PieceSlot, PIECE_COUNT>,
    active: usize,
    mode: GameMode,
    series: usize,
    etape: usize,
}

impl Session {
    /// General constructor; the mode-specific helpers below pick the
    /// conventional board sizes.
    pub fn new(
        mode: GameMode,
        ids: &[PieceId],
        width: u8,
        height: u8,
        series: usize,
        etape: usize,
    ) -> Result<Self, SessionError> {
        if width == 0 || height == 0 {
            return Err(SessionError::EmptyBoard);
        }
        let mut slots = ArrayVec::new();
        for &id in ids.iter().take(PIECE_COUNT) {
            slots.push(PieceSlot {
                piece: Piece::new(id)?,
                moved: false,
            });
        }
        Ok(Self {
            board: Board::new(width, height),
            slots,
            active: 0,
            mode,
            series,
            etape,
        })
    }

    /// Free mode: player-selected pieces on the 12x10 board
    pub fn free_play(ids: &[PieceId]) -> Result<Self, SessionError> {
        Self::new(
            GameMode::Free,
            ids,
            FREE_BOARD_WIDTH,
            FREE_BOARD_HEIGHT,
            0,
            ids.len(),
        )
    }

    /// Grand chelem: the series roster on a board one column wide per piece
    pub fn grand_chelem(series: usize, revealed: usize) -> Result<Self, SessionError> {
        let roster = progression::roster(series, revealed).ok_or(SessionError::BadSeries)?;
        Self::new(
            GameMode::GrandChelem,
            &roster,
            roster.len() as u8,
            SLAM_BOARD_HEIGHT,
            series,
            revealed,
        )
    }

    /// Rebuild a session deterministically from the five persisted fields
    ///
    /// Pieces come fresh from the pattern table; a piece whose id appears in
    /// the grid is marked placed and its coordinates recovered by a
    /// row-major scan.
    pub fn rehydrate(
        mode: GameMode,
        series: usize,
        ids: &[PieceId],
        rows: &[Vec<u8>],
        etape: usize,
    ) -> Result<Self, SessionError> {
        let board = Board::from_rows(rows).ok_or(SessionError::BadGrid)?;

        let mut slots: ArrayVec<PieceSlot, PIECE_COUNT> = ArrayVec::new();
        for &id in ids.iter().take(PIECE_COUNT) {
            let mut piece = Piece::new(id)?;
            if board.contains_piece(id) {
                let found = board.cells_of(id);
                let cells: [_; PIECE_CELLS] = found
                    .try_into()
                    .map_err(|_| SessionError::BadPlacedCells)?;
                piece.restore_placed(cells);
            }
            slots.push(PieceSlot { piece, moved: false });
        }

        Ok(Self {
            board,
            slots,
            active: 0,
            mode,
            series,
            etape,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn series(&self) -> usize {
        self.series
    }

    /// Count of pieces revealed so far in progressive modes
    pub fn etape(&self) -> usize {
        self.etape
    }

    pub fn piece_count(&self) -> usize {
        self.slots.len()
    }

    pub fn active_index(&self) -> Option<usize> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.active)
        }
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.slots.get(self.active).map(|slot| &slot.piece)
    }

    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.slots.get(index).map(|slot| &slot.piece)
    }

    /// The sole win condition
    pub fn is_won(&self) -> bool {
        self.board.is_full()
    }

    /// Apply one player intent; on failure nothing changes
    pub fn apply(&mut self, action: EngineAction) -> Result<(), ActionError> {
        match action {
            EngineAction::SelectPiece(index) => self.select_piece(index),
            EngineAction::Move(d_row, d_col) => self.transform(|piece, board| {
                piece.try_move(board, d_row, d_col)
            }),
            EngineAction::Rotate => self.transform(Piece::try_rotate),
            EngineAction::Mirror => self.transform(Piece::try_mirror),
            EngineAction::Place => self.place_active(),
            EngineAction::Remove => self.remove_active(),
            EngineAction::ClearBoard => {
                self.clear_board();
                Ok(())
            }
            EngineAction::NextPiece => self.next_piece(),
        }
    }

    fn select_piece(&mut self, index: usize) -> Result<(), ActionError> {
        if index >= self.slots.len() {
            return Err(ActionError::BadPieceIndex);
        }
        self.active = index;
        Ok(())
    }

    /// Shared path for move/rotate/mirror
    ///
    /// A placed piece is first picked up (its cells cleared from the board)
    /// and stays picked up even when the transform itself is rejected.
    fn transform(
        &mut self,
        op: impl FnOnce(&mut Piece, &Board) -> Result<(), PlacementError>,
    ) -> Result<(), ActionError> {
        if self.slots.is_empty() {
            return Err(ActionError::NoActivePiece);
        }
        let slot = &mut self.slots[self.active];
        if slot.piece.is_placed() {
            slot.piece.remove(&mut self.board);
        }
        op(&mut slot.piece, &self.board)?;
        slot.moved = true;
        Ok(())
    }

    fn place_active(&mut self) -> Result<(), ActionError> {
        if self.slots.is_empty() {
            return Err(ActionError::NoActivePiece);
        }
        let slot = &mut self.slots[self.active];
        slot.piece.place(&mut self.board)?;
        slot.moved = true;
        Ok(())
    }

    fn remove_active(&mut self) -> Result<(), ActionError> {
        if self.slots.is_empty() {
            return Err(ActionError::NoActivePiece);
        }
        let slot = &mut self.slots[self.active];
        slot.piece.remove(&mut self.board);
        slot.moved = false;
        Ok(())
    }

    /// Erase-all: empty the grid and return every piece to its spawn shape
    fn clear_board(&mut self) {
        self.board.clear();
        for slot in &mut self.slots {
            slot.piece.reset();
            slot.moved = false;
        }
    }

    /// Cycle the active index forward, settling the current piece first
    ///
    /// A floating piece that was moved is committed when its coordinates
    /// are legal; a floating piece on illegal coordinates is returned to
    /// unplaced. Untouched floating pieces and already-placed pieces are
    /// cycled past unchanged.
    fn next_piece(&mut self) -> Result<(), ActionError> {
        if self.slots.is_empty() {
            return Err(ActionError::NoActivePiece);
        }

        let slot = &mut self.slots[self.active];
        if !slot.piece.is_placed() {
            let legal = slot
                .piece
                .cells()
                .iter()
                .all(|&(row, col)| self.board.is_empty(row, col));
            if legal {
                if slot.moved {
                    // Cells were just checked empty; place cannot fail here,
                    // but stay on the check-then-commit path regardless.
                    slot.piece.place(&mut self.board)?;
                }
            } else {
                slot.piece.remove(&mut self.board);
            }
        }

        self.active = (self.active + 1) % self.slots.len();
        Ok(())
    }

    /// Read-only render data for the UI boundary
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_rows(),
            pieces: self
                .slots
                .iter()
                .map(|slot| PieceView {
                    id: slot.piece.id().get(),
                    cells: *slot.piece.cells(),
                    placed: slot.piece.is_placed(),
                })
                .collect(),
            active_index: self.active_index(),
            won: self.is_won(),
            mode: self.mode,
            series: self.series,
            etape: self.etape,
        }
    }

    /// Roster ids in selection order
    pub fn roster(&self) -> ArrayVec<PieceId, PIECE_COUNT> {
        self.slots.iter().map(|slot| slot.piece.id()).collect()
    }
}
