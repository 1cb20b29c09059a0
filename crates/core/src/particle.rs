//! Line-clear particles.
//!
//! Purely cosmetic: particles never influence game state. Positions and
//! velocities are in drawing-surface units (see [`BLOCK_SIZE`]) and advance
//! once per frame, not per millisecond.

use crate::rng::SimpleRng;
use crate::types::{Rgb, BLOCK_SIZE, BOARD_WIDTH, PARTICLES_PER_CELL, PARTICLE_COLORS};

/// Downward acceleration added to `vy` every frame
pub const GRAVITY: f32 = 0.2;

/// Life lost every frame
pub const LIFE_DECAY: f32 = 0.02;

/// Default particle side length in surface units
pub const PARTICLE_SIZE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub size: f32,
    life: f32,
}

impl Particle {
    /// Particle at (x, y) with an explicit velocity
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, color: Rgb) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            color,
            size: PARTICLE_SIZE,
            life: 1.0,
        }
    }

    /// Particle at (x, y) thrown upward with a random spread.
    ///
    /// `vx` is uniform in [-4, 4) and `vy` in [-16, -12).
    pub fn random(x: f32, y: f32, color: Rgb, rng: &mut SimpleRng) -> Self {
        let vx = (rng.next_f32() - 0.5) * 8.0;
        let vy = (rng.next_f32() - 4.0) * 4.0;
        Self::new(x, y, vx, vy, color)
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Advance one frame. Returns whether the particle is still alive.
    pub fn update(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += GRAVITY;
        self.life -= LIFE_DECAY;
        self.is_alive()
    }
}

/// Append the burst for a cleared row: [`PARTICLES_PER_CELL`] particles on
/// every column, each with a random burst color.
pub fn spawn_row_burst(row: usize, rng: &mut SimpleRng, out: &mut Vec<Particle>) {
    let y = row as f32 * BLOCK_SIZE;
    out.reserve(BOARD_WIDTH as usize * PARTICLES_PER_CELL);
    for col in 0..BOARD_WIDTH as usize {
        let x = col as f32 * BLOCK_SIZE;
        for _ in 0..PARTICLES_PER_CELL {
            let color = rng.choose(&PARTICLE_COLORS);
            out.push(Particle::random(x, y, color, rng));
        }
    }
}
