//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of binary occupancy flags (settled blocks).
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows with negative `y` lie above the visible grid; pieces may poke into
//! them but nothing is ever stored there.

use arrayvec::ArrayVec;

use crate::piece::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one line-clear pass, bottom first
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Check if a single piece cell at (x, y) would collide.
    ///
    /// Horizontal bounds and the bottom edge always count. Occupancy is only
    /// consulted for visible rows, so a cell above row 0 never collides with
    /// settled blocks.
    pub fn cell_collides(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check whether `shape` anchored at (x, y) collides with the walls,
    /// the floor or settled blocks.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .cells()
            .any(|(dx, dy)| self.cell_collides(x + dx, y + dy))
    }

    /// Write every occupied cell of `shape` at (x, y) into the grid.
    ///
    /// Cells above the visible top are dropped. Returns the number of cells written.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.cells() {
            if y + dy >= 0 && self.set(x + dx, y + dy, true) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell)
    }

    /// Borrow one row of the grid
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[bool] {
        let width = BOARD_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row.
    /// Returns false if `y` is out of range.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }

        let width = BOARD_WIDTH as usize;
        // copy_within handles the overlapping move.
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(false);
        true
    }

    /// Clear all full rows and return the row indices that were cleared (bottom to top).
    ///
    /// Indices refer to the grid before clearing. Uses a two-pointer pass with
    /// zero allocation, so stacked full rows are all removed in one scan.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Rows vacated at the top become empty
        self.cells[..write_y * width].fill(false);

        cleared_rows
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Write the grid as 0/1 values into a row-major 2D array.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = u8::from(self.cells[y * BOARD_WIDTH as usize + x]);
            }
        }
    }

    /// Build a board from text rows, `#` for filled and anything else empty.
    ///
    /// Rows are aligned to the bottom of the grid, so a short picture
    /// describes the lowest rows.
    ///
    /// ```
    /// use blockfall_core::Board;
    ///
    /// let board = Board::from_ascii(&["#########."]);
    /// assert!(board.is_occupied(0, 19));
    /// assert!(!board.is_occupied(9, 19));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len().min(BOARD_HEIGHT as usize);
        for (i, line) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch == '#' {
                    board.set(x as i8, (top + i) as i8, true);
                }
            }
        }
        board
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::base_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_cell_collides_above_top_only_checks_walls() {
        let board = Board::new();
        assert!(!board.cell_collides(4, -3));
        assert!(board.cell_collides(-1, -3));
        assert!(board.cell_collides(10, -1));
        assert!(board.cell_collides(4, 20));
    }

    #[test]
    fn test_merge_skips_rows_above_top() {
        let mut board = Board::new();
        let shape = base_shape(PieceKind::O);
        assert_eq!(board.merge(&shape, 0, -1), 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(1, 0));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::from_ascii(&["#.........", "##########", ".#........"]);
        assert!(board.clear_row(18));
        assert!(board.is_occupied(0, 18));
        assert!(board.is_occupied(1, 19));
        assert_eq!(board.filled_count(), 2);
        assert!(!board.clear_row(20));
    }

    #[test]
    fn test_write_u8_grid() {
        let board = Board::from_ascii(&["#........#"]);
        let mut grid = [[9u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][0], 1);
        assert_eq!(grid[19][9], 1);
        assert_eq!(grid[19][5], 0);
        assert_eq!(grid[0][0], 0);
    }
}
