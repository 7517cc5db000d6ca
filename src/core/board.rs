//! Board module - manages the puzzle grid
//!
//! The board is a width x height grid where each cell is empty or holds a
//! piece id. Uses a flat row-major array; dimensions are fixed at
//! construction because the game plays on several board sizes (12x10 free
//! board, growing 5-row grand chelem boards).
//!
//! The grid is mutated exclusively through the check-then-write operations
//! here; no caller writes cells directly, which is what upholds the
//! no-overlap invariant.

use crate::types::{Cell, Coord, PieceId};

/// The puzzle grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimensions
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Calculate flat index from (row, col), or None when out of bounds
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= self.height as i8 || col < 0 || col >= self.width as i8 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Whether (row, col) lies on the grid
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        self.index(row, col).is_some()
    }

    /// Get cell at (row, col); None when out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// In-bounds and empty. Out-of-bounds queries are never "empty".
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In-bounds and held by some piece
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// In-bounds and not held by any *other* piece
    ///
    /// This is the legality test for transform candidates: a floating piece
    /// may pass over cells it still occupies on the board itself.
    pub fn is_free_for(&self, row: i8, col: i8, id: PieceId) -> bool {
        match self.get(row, col) {
            Some(None) => true,
            Some(Some(holder)) => holder == id,
            None => false,
        }
    }

    /// True iff every cell is occupied - the sole win condition
    ///
    /// A plain full scan recomputed on demand; at most 120 cells.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Write a piece's id into the given cells, checking first
    ///
    /// Returns false and leaves the grid untouched when any cell is out of
    /// bounds or already occupied.
    pub fn lock_cells(&mut self, cells: &[Coord], id: PieceId) -> bool {
        for &(row, col) in cells {
            if !self.is_empty(row, col) {
                return false;
            }
        }
        for &(row, col) in cells {
            if let Some(idx) = self.index(row, col) {
                self.cells[idx] = Some(id);
            }
        }
        true
    }

    /// Clear every cell currently holding the given id
    ///
    /// A no-op when the id is nowhere on the grid.
    pub fn release_piece(&mut self, id: PieceId) {
        for cell in &mut self.cells {
            if *cell == Some(id) {
                *cell = None;
            }
        }
    }

    /// Cells holding the given id, in row-major order
    pub fn cells_of(&self, id: PieceId) -> Vec<Coord> {
        let mut found = Vec::new();
        for row in 0..self.height as i8 {
            for col in 0..self.width as i8 {
                if self.get(row, col) == Some(Some(id)) {
                    found.push((row, col));
                }
            }
        }
        found
    }

    /// Whether the given id appears anywhere on the grid
    pub fn contains_piece(&self, id: PieceId) -> bool {
        self.cells.contains(&Some(id))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export the grid as rows of raw ids (0 = empty), the persisted shape
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|row| {
                let start = row * self.width as usize;
                self.cells[start..start + self.width as usize]
                    .iter()
                    .map(|cell| cell.map_or(0, PieceId::get))
                    .collect()
            })
            .collect()
    }

    /// Rebuild a board from persisted rows of raw ids
    ///
    /// Returns None when the rows are ragged, empty, or hold an id outside
    /// 0..=12.
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > u8::MAX as usize || width > u8::MAX as usize {
            return None;
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return None;
            }
            for &raw in row {
                if raw == 0 {
                    cells.push(None);
                } else {
                    cells.push(Some(PieceId::new(raw)?));
                }
            }
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }
}
