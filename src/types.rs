//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Number of cells in every pentomino
pub const PIECE_CELLS: usize = 5;

/// Number of canonical piece shapes
pub const PIECE_COUNT: usize = 12;

/// Free-form board dimensions (columns x rows)
pub const FREE_BOARD_WIDTH: u8 = 12;
pub const FREE_BOARD_HEIGHT: u8 = 10;

/// Grand chelem boards are always 5 rows tall; width grows with the roster
pub const SLAM_BOARD_HEIGHT: u8 = 5;

/// Pieces revealed at the start of a grand chelem series
pub const SLAM_INITIAL_REVEAL: usize = 4;

/// Identity of a pentomino shape, in the range 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    /// Build from a raw id, accepting only 1..=12
    pub fn new(raw: u8) -> Option<Self> {
        if (1..=PIECE_COUNT as u8).contains(&raw) {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw id value (1..=12)
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-id constant tables
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all twelve ids in order
    pub fn all() -> impl Iterator<Item = PieceId> {
        (1..=PIECE_COUNT as u8).map(PieceId)
    }
}

/// A (row, column) pair in board coordinates
///
/// Signed so that candidate coordinates may go transiently negative while
/// a transform is being validated.
pub type Coord = (i8, i8);

/// Cell on the board (None = empty, Some = held by that piece)
pub type Cell = Option<PieceId>;

/// Which game mode the session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player-selected pieces on a 12x10 board
    Free,
    /// Progressive series on a growing 5-row board
    GrandChelem,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Free => "free",
            GameMode::GrandChelem => "grandChelem",
        }
    }
}

/// Discrete player intents driving the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    SelectPiece(usize),
    Move(i8, i8),
    Rotate,
    Mirror,
    Place,
    Remove,
    ClearBoard,
    NextPiece,
}

impl EngineAction {
    /// Stable name for logging and UI mapping
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineAction::SelectPiece(_) => "selectPiece",
            EngineAction::Move(_, _) => "move",
            EngineAction::Rotate => "rotate",
            EngineAction::Mirror => "mirror",
            EngineAction::Place => "place",
            EngineAction::Remove => "remove",
            EngineAction::ClearBoard => "clearBoard",
            EngineAction::NextPiece => "nextPiece",
        }
    }
}
