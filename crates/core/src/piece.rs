//! Pieces module - tetromino shapes and matrix rotation
//!
//! A piece carries its own occupancy matrix. Rotation regenerates that
//! matrix (transpose + reverse rows) instead of looking it up in a table,
//! and every shape returns to itself after four quarter turns.

use crate::types::{PieceKind, Rgb, Rotation, SPAWN_X, SPAWN_Y};

/// Largest matrix side any tetromino needs
pub const MAX_SHAPE: usize = 4;

/// Occupancy matrix of a piece, rows of 0/1, at most 4x4.
///
/// Stack-only; unused cells outside `rows x cols` are always zero so two
/// shapes compare equal exactly when their visible matrices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from row slices.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged or larger than 4x4.
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let o = Shape::from_rows(&[&[1, 1], &[1, 1]]);
    /// assert_eq!(o.rows(), 2);
    /// assert_eq!(o.cols(), 2);
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE, "bad shape height");
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE, "bad shape width");

        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {}", r);
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = u8::from(v != 0);
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Cell value (0 or 1); 0 outside the matrix
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows() || col >= self.cols() {
            return 0;
        }
        self.cells[row][col]
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != 0
    }

    /// Occupied cells as `(dx, dy)` offsets from the piece anchor.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let shape = *self;
        (0..shape.rows()).flat_map(move |r| {
            (0..shape.cols())
                .filter(move |&c| shape.is_filled(r, c))
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// The matrix as nested rows (for tests and debugging)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| self.cells[r][..self.cols()].to_vec())
            .collect()
    }

    /// Quarter turn clockwise: transpose, then reverse each row.
    ///
    /// Row `i` of the result is column `i` read bottom to top.
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for j in 0..rows {
                out_row[rows - 1 - j] = self.cells[j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Quarter turn counter-clockwise, the exact inverse of [`Shape::rotated_cw`].
    pub fn rotated_ccw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[j][cols - 1 - i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Spawn-orientation shape for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    shape: Shape,
}

impl Piece {
    /// Create a piece of `kind` in spawn orientation at (x, y)
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
            shape: base_shape(kind),
        }
    }

    /// Create a piece at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, SPAWN_X, SPAWN_Y)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Rotate 90° clockwise in place and return the new shape.
    ///
    /// No bounds checking; the board decides whether the result is legal.
    pub fn rotate(&mut self) -> &Shape {
        self.shape = self.shape.rotated_cw();
        self.rotation = self.rotation.rotate_cw();
        &self.shape
    }

    /// Undo one [`Piece::rotate`].
    pub fn rotate_back(&mut self) -> &Shape {
        self.shape = self.shape.rotated_ccw();
        self.rotation = self.rotation.rotate_ccw();
        &self.shape
    }

    /// Occupied cells in board coordinates
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape.cells().map(move |(dx, dy)| (x + dx, y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(base_shape(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let mut piece = Piece::spawn(PieceKind::T);
        let rotated = *piece.rotate();
        assert_eq!(rotated.to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
        assert_eq!(piece.rotation, Rotation::East);
    }

    #[test]
    fn test_rotate_i_changes_dimensions() {
        let mut piece = Piece::spawn(PieceKind::I);
        piece.rotate();
        assert_eq!(piece.shape().rows(), 4);
        assert_eq!(piece.shape().cols(), 1);
    }

    #[test]
    fn test_rotate_back_is_inverse() {
        for kind in PieceKind::ALL {
            let mut piece = Piece::spawn(kind);
            piece.rotate();
            let after_one = *piece.shape();
            piece.rotate();
            piece.rotate_back();
            assert_eq!(*piece.shape(), after_one, "{:?}", kind);
            piece.rotate_back();
            assert_eq!(*piece.shape(), base_shape(kind), "{:?}", kind);
            assert_eq!(piece.rotation, Rotation::North);
        }
    }

    #[test]
    fn test_cells_are_row_major_offsets() {
        let s = base_shape(PieceKind::S);
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_get_outside_matrix_is_empty() {
        let s = base_shape(PieceKind::O);
        assert_eq!(s.get(2, 0), 0);
        assert_eq!(s.get(0, 3), 0);
        assert!(s.is_filled(1, 1));
    }

    #[test]
    fn test_board_cells_follow_anchor() {
        let piece = Piece::new(PieceKind::O, 4, 18);
        let cells: Vec<_> = piece.board_cells().collect();
        assert_eq!(cells, vec![(4, 18), (5, 18), (4, 19), (5, 19)]);
    }
}
