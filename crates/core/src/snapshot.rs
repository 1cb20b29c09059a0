//! Render-facing copy of the game state.
//!
//! The view only ever sees a [`GameSnapshot`]: grid contents, the active
//! piece with its shape and color, the particles, and the score line.

use crate::particle::Particle;
use crate::piece::{Piece, Shape};
use crate::types::{PieceKind, Rgb, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
    pub color: Rgb,
}

impl ActiveSnapshot {
    /// Occupied cells in board coordinates
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape.cells().map(move |(dx, dy)| (x + dx, y + dy))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            shape: *value.shape(),
            color: value.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Settled blocks, 0 empty / 1 filled, indexed `[y][x]`
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub started: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            particles: Vec::new(),
            score: 0,
            lines: 0,
            game_over: false,
            started: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_snapshot_cells() {
        let snap = ActiveSnapshot::from(Piece::new(PieceKind::J, 2, 5));
        let cells: Vec<_> = snap.board_cells().collect();
        assert_eq!(cells, vec![(2, 5), (2, 6), (3, 6), (4, 6)]);
        assert_eq!(snap.color, PieceKind::J.color());
    }
}
