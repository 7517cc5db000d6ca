//! Progression module - the grand chelem series tables
//!
//! Twelve fixed series, each an ordering of all twelve pieces. A run starts
//! with the first four pieces of its series and reveals one more after each
//! solved level, so the roster (and the board width with it) grows from
//! four to twelve.

use arrayvec::ArrayVec;

use crate::types::{PieceId, PIECE_COUNT, SLAM_INITIAL_REVEAL};

/// Number of grand chelem series
pub const SERIES_COUNT: usize = 12;

/// Piece orderings per series, as raw ids
const GRAND_CHELEM: [[u8; PIECE_COUNT]; SERIES_COUNT] = [
    [2, 3, 6, 11, 8, 4, 5, 10, 9, 1, 7, 12],
    [2, 3, 7, 9, 8, 5, 6, 4, 10, 1, 12, 11],
    [2, 4, 6, 7, 8, 1, 3, 9, 11, 5, 12, 10],
    [3, 4, 6, 7, 8, 1, 5, 2, 11, 10, 12, 9],
    [3, 6, 7, 9, 10, 2, 12, 11, 4, 1, 5, 8],
    [2, 3, 5, 6, 4, 9, 11, 10, 8, 12, 1, 7],
    [2, 3, 5, 7, 8, 1, 9, 10, 12, 4, 11, 6],
    [2, 3, 6, 10, 11, 8, 9, 12, 4, 1, 7, 5],
    [2, 3, 6, 8, 5, 11, 9, 7, 12, 10, 1, 4],
    [2, 4, 5, 8, 7, 10, 6, 1, 12, 9, 11, 3],
    [3, 4, 5, 10, 9, 1, 6, 11, 8, 12, 7, 2],
    [2, 6, 7, 9, 11, 3, 8, 4, 5, 10, 12, 1],
];

/// The first `revealed` pieces of a series, in series order
///
/// Returns None when the series index or reveal count falls outside the
/// tables.
pub fn roster(series: usize, revealed: usize) -> Option<ArrayVec<PieceId, PIECE_COUNT>> {
    if series >= SERIES_COUNT || revealed == 0 || revealed > PIECE_COUNT {
        return None;
    }
    GRAND_CHELEM[series][..revealed]
        .iter()
        .map(|&raw| PieceId::new(raw))
        .collect()
}

/// Reveal count for the first level of any series
pub fn initial_reveal() -> usize {
    SLAM_INITIAL_REVEAL
}

/// Reveal count after solving a level, capped at the full set
pub fn next_reveal(revealed: usize) -> usize {
    (revealed + 1).min(PIECE_COUNT)
}
