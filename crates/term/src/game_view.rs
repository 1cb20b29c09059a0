//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::particle::Particle;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BLOCK_SIZE, BOARD_HEIGHT, BOARD_WIDTH, SETTLED_COLOR};

/// Darkening applied to the board under the game-over text
const OVERLAY_SHADE: f32 = 0.5;

/// Play-area background
const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Top-left corner of the bordered board inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size of the bordered board: (width, height).
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));

        // Settled blocks.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    self.draw_block(fb, frame, x as u16, y as u16, SETTLED_COLOR);
                } else {
                    self.draw_empty_cell(fb, frame, x as u16, y as u16);
                }
            }
        }

        // Active piece; rows above the visible top are skipped.
        if let Some(active) = snap.active {
            for (x, y) in active.board_cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, frame, x as u16, y as u16, active.color);
                }
            }
        }

        for particle in &snap.particles {
            self.draw_particle(fb, frame, particle);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            fb.shade_rect(frame.x, frame.y, frame.w, frame.h, OVERLAY_SHADE);
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    /// A block is its face color with a lighter top and left edge and a
    /// darker right and bottom edge. Edges need at least two sub-cells on
    /// their axis; a 1x1 cell is a plain face.
    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Rgb) {
        let light = color.adjust(50);
        let dark = color.adjust(-50);
        let (px, py) = self.cell_origin(frame, x, y);
        let (last_col, last_row) = (self.cell_w - 1, self.cell_h - 1);

        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let right = dx == last_col && dx > 0;
                let bottom = dy == last_row && dy > 0;
                let (ch, bg) = match (right, bottom) {
                    (true, true) => ('▘', dark),
                    (true, false) => ('▌', dark),
                    (false, true) => ('▀', dark),
                    (false, false) if dy == 0 && last_row > 0 => ('▄', light),
                    (false, false) if dx == 0 && last_col > 0 => ('▐', light),
                    (false, false) => ('█', dark),
                };
                fb.put_char(px + dx, py + dy, ch, CellStyle::new(color, bg).bold());
            }
        }
    }

    fn draw_particle(&self, fb: &mut FrameBuffer, frame: Frame, particle: &Particle) {
        if !particle.is_alive() || particle.x < 0.0 || particle.y < 0.0 {
            return;
        }
        let cx = (particle.x / BLOCK_SIZE * self.cell_w as f32) as u16;
        let cy = (particle.y / BLOCK_SIZE * self.cell_h as f32) as u16;
        if cx >= frame.w - 2 || cy >= frame.h - 2 {
            return;
        }

        let (px, py) = (frame.x + 1 + cx, frame.y + 1 + cy);
        let bg = fb.get(px, py).map(|c| c.style.bg).unwrap_or(PLAY_BG);
        let style = CellStyle::new(particle.color.scale(particle.life()), bg);
        fb.put_char(px, py, '•', style);
    }

    fn cell_origin(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x + 1 + x * self.cell_w,
            frame.y + 1 + y * self.cell_h,
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        if let Some(active) = snap.active {
            fb.put_str(panel_x, y, "PIECE", label);
            y = y.saturating_add(1);
            let piece_style = CellStyle::new(active.color, Rgb::new(0, 0, 0)).bold();
            fb.put_char(panel_x, y, active.kind.letter(), piece_style);
            y = y.saturating_add(2);
        }

        for line in ["←/→ move", "↓   drop", "↑   rotate", "q   quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
