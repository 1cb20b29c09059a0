//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, audio).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (4, 0) for every piece
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity: one row per second |
//! | `FRAME_MS` | 16 | Target frame interval (~60 FPS) |
//! | `LINE_SCORE` | 100 | Points per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Size of one board cell in drawing-surface units.
///
/// Particles live in surface units; the view divides by this to find the cell.
pub const BLOCK_SIZE: f32 = 30.0;

/// Column where new pieces are anchored
pub const SPAWN_X: i8 = 4;

/// Row where new pieces are anchored
pub const SPAWN_Y: i8 = 0;

/// Gravity interval in milliseconds
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Target frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points awarded for each cleared row
pub const LINE_SCORE: u32 = 100;

/// Particles spawned per column of a cleared row
pub const PARTICLES_PER_CELL: usize = 5;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order the random spawner indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in the side panel
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Fixed display color for this kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xf0, 0xf0),
            PieceKind::O => Rgb::new(0xf0, 0xf0, 0x00),
            PieceKind::T => Rgb::new(0xa0, 0x00, 0xf0),
            PieceKind::S => Rgb::new(0x00, 0xf0, 0x00),
            PieceKind::Z => Rgb::new(0xf0, 0x00, 0x00),
            PieceKind::J => Rgb::new(0x00, 0x00, 0xf0),
            PieceKind::L => Rgb::new(0xf0, 0xa0, 0x00),
        }
    }
}

/// Orientation index of a piece (0-3 quarter turns clockwise)
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°), the inverse of [`Rotation::rotate_cw`]
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Player actions that can be applied to the game
///
/// Each variant is bound to one arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Sound cues emitted by the game core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Rotate,
    Move,
    Drop,
    Clear,
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Rotate,
        SoundEffect::Move,
        SoundEffect::Drop,
        SoundEffect::Clear,
        SoundEffect::GameOver,
    ];

    /// Event name, as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Rotate => "rotate",
            SoundEffect::Move => "move",
            SoundEffect::Drop => "drop",
            SoundEffect::Clear => "clear",
            SoundEffect::GameOver => "gameOver",
        }
    }

    /// File name of the sound inside the sounds directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Rotate => "rotate.wav",
            SoundEffect::Move => "move.wav",
            SoundEffect::Drop => "drop.wav",
            SoundEffect::Clear => "clear.wav",
            SoundEffect::GameOver => "gameover.wav",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Shift every channel by `amount`, clamped to 0..=255.
    ///
    /// Positive values lighten, negative values darken.
    ///
    /// ```
    /// use blockfall_types::Rgb;
    ///
    /// assert_eq!(Rgb::new(0x88, 0x88, 0x88).adjust(50), Rgb::new(0xba, 0xba, 0xba));
    /// assert_eq!(Rgb::new(10, 250, 128).adjust(-50), Rgb::new(0, 200, 78));
    /// ```
    pub fn adjust(self, amount: i16) -> Self {
        let shift = |c: u8| (c as i16 + amount).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Scale every channel by `factor` (0.0 = black, 1.0 = unchanged).
    pub fn scale(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let mul = |c: u8| (c as f32 * f).round() as u8;
        Self::new(mul(self.r), mul(self.g), mul(self.b))
    }
}

/// Color of settled blocks on the grid (#888)
pub const SETTLED_COLOR: Rgb = Rgb::new(0x88, 0x88, 0x88);

/// Colors picked at random for line-clear particles (#fff, #ff0, #f0f)
pub const PARTICLE_COLORS: [Rgb; 3] = [
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0xff, 0xff, 0x00),
    Rgb::new(0xff, 0x00, 0xff),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_back_to_north() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
        for rot in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(rot.rotate_cw().rotate_ccw(), rot);
        }
    }

    #[test]
    fn piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{:?} and {:?} share a color", a, b);
            }
        }
    }

    #[test]
    fn sound_files_match_event_names() {
        assert_eq!(SoundEffect::GameOver.as_str(), "gameOver");
        assert_eq!(SoundEffect::GameOver.file_name(), "gameover.wav");
        assert_eq!(SoundEffect::ALL.len(), 5);
    }

    #[test]
    fn rgb_scale_clamps_factor() {
        let c = Rgb::new(200, 100, 50);
        assert_eq!(c.scale(1.5), c);
        assert_eq!(c.scale(-1.0), Rgb::new(0, 0, 0));
        assert_eq!(c.scale(0.5), Rgb::new(100, 50, 25));
    }
}
