//! Patterns module - canonical pentomino shapes and rotation anchors
//!
//! The twelve shapes are hard-coded pattern matrices; a piece's starting
//! coordinate list is produced by a row-major scan for occupied entries.
//! The scan order matters: rotation anchors are indices into that list.

use crate::types::{Coord, PieceId, PIECE_CELLS, PIECE_COUNT};

/// One canonical shape as rows of occupied (1) / empty (0) entries
type Pattern = &'static [&'static [u8]];

/// The twelve canonical pentomino patterns, indexed by `PieceId::index()`
const PATTERNS: [Pattern; PIECE_COUNT] = [
    // 1: I
    &[&[1], &[1], &[1], &[1], &[1]],
    // 2: L
    &[&[1, 1], &[1], &[1], &[1]],
    // 3: Y
    &[&[1], &[1, 1], &[1], &[1]],
    // 4: N
    &[&[1], &[1, 1], &[0, 1], &[0, 1]],
    // 5: V
    &[&[1], &[1], &[1, 1, 1]],
    // 6: P
    &[&[1], &[1, 1], &[1, 1]],
    // 7: U
    &[&[1, 1], &[0, 1], &[1, 1]],
    // 8: Z
    &[&[1, 1], &[0, 1], &[0, 1, 1]],
    // 9: F
    &[&[1], &[1, 1, 1], &[0, 1]],
    // 10: T
    &[&[1, 1, 1], &[0, 1], &[0, 1]],
    // 11: W
    &[&[1], &[1, 1], &[0, 1, 1]],
    // 12: X
    &[&[0, 1], &[1, 1, 1], &[0, 1]],
];

/// Which entry of the scanned coordinate list a piece rotates around
///
/// The choice is a fixed per-id constant, not a geometric rule: players
/// learn each piece's pivot, so the original's asymmetric assignment is
/// reproduced exactly.
const ANCHOR_INDEX: [usize; PIECE_COUNT] = [2, 2, 2, 1, 1, 1, 2, 1, 2, 1, 2, 2];

/// Static pattern table corruption (defensive; never expected at runtime)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    Malformed,
}

impl PatternError {
    pub fn code(self) -> &'static str {
        "malformed_pattern"
    }

    pub fn message(self) -> &'static str {
        "pattern table entry did not yield exactly 5 cells"
    }
}

/// Scan a piece's pattern matrix and return its starting coordinate list
///
/// Coordinates are (row, col) relative to the board origin; the list order
/// is the row-major scan order and is preserved by every later transform.
pub fn base_cells(id: PieceId) -> Result<[Coord; PIECE_CELLS], PatternError> {
    let pattern = PATTERNS[id.index()];
    let mut cells = [(0i8, 0i8); PIECE_CELLS];
    let mut count = 0;

    for (r, row) in pattern.iter().enumerate() {
        for (c, &val) in row.iter().enumerate() {
            if val != 0 {
                if count == PIECE_CELLS {
                    return Err(PatternError::Malformed);
                }
                cells[count] = (r as i8, c as i8);
                count += 1;
            }
        }
    }

    if count != PIECE_CELLS {
        return Err(PatternError::Malformed);
    }
    Ok(cells)
}

/// Index into the coordinate list of the cell a piece rotates around
pub fn anchor_index(id: PieceId) -> usize {
    ANCHOR_INDEX[id.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_has_five_cells() {
        for id in PieceId::all() {
            let cells = base_cells(id).unwrap();
            assert_eq!(cells.len(), PIECE_CELLS);

            // No duplicates
            for i in 0..cells.len() {
                for j in i + 1..cells.len() {
                    assert_ne!(cells[i], cells[j], "piece {} repeats a cell", id.get());
                }
            }
        }
    }

    #[test]
    fn test_piece_one_is_vertical_bar() {
        let cells = base_cells(PieceId::new(1).unwrap()).unwrap();
        assert_eq!(cells, [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_piece_twelve_is_plus() {
        let cells = base_cells(PieceId::new(12).unwrap()).unwrap();
        assert_eq!(cells, [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_anchor_assignment() {
        // Second cell for ids 4, 5, 6, 8, 10; third for the rest.
        for id in PieceId::all() {
            let expected = match id.get() {
                4 | 5 | 6 | 8 | 10 => 1,
                _ => 2,
            };
            assert_eq!(anchor_index(id), expected, "anchor of piece {}", id.get());
        }
    }

    #[test]
    fn test_anchors_within_cell_list() {
        for id in PieceId::all() {
            assert!(anchor_index(id) < PIECE_CELLS);
        }
    }
}
