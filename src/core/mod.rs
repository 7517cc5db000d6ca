//! Core module - pure game logic with no I/O
//!
//! This module contains the pattern tables, board rules, piece transforms,
//! the session driver, and the grand chelem progression. It has zero
//! dependencies on UI, persistence, or I/O.

pub mod board;
pub mod patterns;
pub mod piece;
pub mod progression;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use piece::{Piece, PlacementError};
pub use session::{ActionError, Session, SessionError};
pub use snapshot::{GameSnapshot, PieceView};
