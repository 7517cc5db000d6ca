//! Pythominos - a pentomino placement puzzle engine
//!
//! Twelve five-cell pieces, a rectangular board, and one rule: the puzzle
//! is solved when every cell is covered. The engine exposes discrete
//! actions (`types::EngineAction`) applied to a `core::Session`, plus a
//! save-file layer in `persist`.

pub mod core;
pub mod persist;
pub mod types;

pub use crate::core::{ActionError, Board, GameSnapshot, Piece, Session};
pub use crate::types::{EngineAction, GameMode, PieceId};
