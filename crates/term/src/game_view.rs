//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PLAYER_SPRITE;

/// Key hints shown in the top-right corner.
pub const INSTRUCTIONS: &str = "Space: Jump | ESC/Q: Quit";

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

/// Colors used for each layer of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub ground: CellStyle,
    pub player: CellStyle,
    pub obstacle: CellStyle,
    pub hud: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ground: CellStyle::fg(Rgb::GREEN),
            player: CellStyle::fg(Rgb::YELLOW).bold(),
            obstacle: CellStyle::fg(Rgb::RED),
            hud: CellStyle::fg(Rgb::WHITE),
        }
    }
}

/// Playfield renderer.
///
/// Layers are drawn back to front: ground line, player, obstacles, HUD.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let ground_row = snap.ground_y + 1;
        for x in 0..snap.screen_width.min(i32::from(viewport.width)) {
            fb.put_char(x, ground_row, '_', self.palette.ground);
        }

        fb.put_sprite(
            snap.player_x,
            snap.player_top(),
            &PLAYER_SPRITE,
            self.palette.player,
        );

        for o in &snap.obstacles {
            let sprite = o.kind.sprite();
            let top = snap.ground_y - sprite.len() as i32 + 1;
            fb.put_sprite(o.x, top, sprite, self.palette.obstacle);
        }

        fb.put_str(0, 0, &hud_line(snap), self.palette.hud);
        let hint_x = snap.screen_width - INSTRUCTIONS.chars().count() as i32;
        fb.put_str(hint_x, 0, INSTRUCTIONS, self.palette.hud);
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

/// Status line: lives, score and current obstacle speed.
pub fn hud_line(snap: &GameSnapshot) -> String {
    format!(
        "Lives: {} | Score: {} | Speed: {}",
        snap.lives, snap.score, snap.level.obstacle_speed
    )
}
