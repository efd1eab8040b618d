//! Game over screen.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

const ART: [&str; 5] = [
    r"  ____    _    __  __ _____    _____     _______ ____  ",
    r" / ___|  / \  |  \/  | ____|  / _ \ \   / / ____|  _ \ ",
    r"| |  _  / _ \ | |\/| |  _|   | | | \ \ / /|  _| | |_) |",
    r"| |_| |/ ___ \| |  | | |___  | |_| |\ V / | |___|  _ < ",
    r" \____/_/   \_\_|  |_|_____|  \___/  \_/  |_____|_| \_\",
];

pub const EXIT_HINT: &str = "Press any key to exit";

/// Centered "GAME OVER" banner with the final score.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOverView;

impl GameOverView {
    pub fn render_into(&self, score: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let w = i32::from(viewport.width);
        let h = i32::from(viewport.height);

        let art_y = h / 2 - ART.len() as i32 - 2;
        for (i, line) in ART.iter().enumerate() {
            centered(fb, w, art_y + i as i32, line, CellStyle::fg(Rgb::RED).bold());
        }

        let final_score = format!("Final Score: {}", score);
        centered(fb, w, h / 2 + 3, &final_score, CellStyle::fg(Rgb::YELLOW));
        centered(fb, w, h / 2 + 5, EXIT_HINT, CellStyle::fg(Rgb::WHITE));
    }

    pub fn render(&self, score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(score, viewport, &mut fb);
        fb
    }
}

fn centered(fb: &mut FrameBuffer, width: i32, y: i32, text: &str, style: CellStyle) {
    let x = width / 2 - text.chars().count() as i32 / 2;
    fb.put_str(x, y, text, style);
}
