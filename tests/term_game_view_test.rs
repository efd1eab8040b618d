use terminal_runner::core::{GameSnapshot, GameState, JumpPhase, Obstacle, ScriptedRng};
use terminal_runner::term::{GameOverView, GameView, Viewport, EXIT_HINT, INSTRUCTIONS};
use terminal_runner::types::{GameConfig, ObstacleKind};

fn fresh_snapshot() -> GameSnapshot {
    GameState::with_rng(GameConfig::default(), ScriptedRng::constant(0))
        .unwrap()
        .snapshot()
}

fn row_text(fb: &terminal_runner::term::FrameBuffer, y: u16) -> String {
    fb.row(y).iter().map(|c| c.ch).collect()
}

fn ch(fb: &terminal_runner::term::FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).unwrap().ch
}

#[test]
fn term_view_draws_hud_and_instructions() {
    let mut snap = fresh_snapshot();
    snap.score = 12;
    snap.lives = 3;
    snap.level.obstacle_speed = 2;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let top = row_text(&fb, 0);
    assert!(top.starts_with("Lives: 3 | Score: 12 | Speed: 2"));
    assert!(top.ends_with(INSTRUCTIONS));
}

#[test]
fn term_view_draws_ground_line_across_playfield() {
    let fb = GameView::default().render(&fresh_snapshot(), Viewport::new(100, 24));
    let ground = row_text(&fb, 16);
    assert_eq!(&ground[..80], "_".repeat(80));
    assert_eq!(ground[80..].trim(), "");
}

#[test]
fn term_view_draws_grounded_player_above_ground() {
    let fb = GameView::default().render(&fresh_snapshot(), Viewport::new(80, 24));
    assert_eq!(ch(&fb, 11, 13), 'O');
    assert_eq!(ch(&fb, 10, 14), '/');
    assert_eq!(ch(&fb, 11, 14), '|');
    assert_eq!(ch(&fb, 12, 14), '\\');
    assert_eq!(ch(&fb, 10, 15), '/');
    assert_eq!(ch(&fb, 12, 15), '\\');
}

#[test]
fn term_view_draws_jumping_player_higher() {
    let mut snap = fresh_snapshot();
    snap.player_y = 5;
    snap.jump_phase = JumpPhase::Descending;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert_eq!(ch(&fb, 11, 3), 'O');
    assert_eq!(ch(&fb, 11, 13), ' ');
}

#[test]
fn term_view_draws_obstacles_on_ground() {
    let mut snap = fresh_snapshot();
    snap.obstacles = vec![
        Obstacle::new(40, ObstacleKind::Tree),
        Obstacle::new(60, ObstacleKind::Rock),
    ];

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    // Tree is four rows tall: top at row 12.
    assert_eq!(ch(&fb, 41, 12), '/');
    assert_eq!(ch(&fb, 42, 12), '\\');
    assert_eq!(ch(&fb, 41, 15), '|');
    // Rock is two rows tall: top at row 14.
    assert_eq!(ch(&fb, 61, 14), '/');
    assert_eq!(&row_text(&fb, 15)[60..64], "/__\\");
}

#[test]
fn term_view_clips_obstacles_leaving_the_screen() {
    let mut snap = fresh_snapshot();
    snap.obstacles = vec![Obstacle::new(-2, ObstacleKind::Crate)];

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert_eq!(ch(&fb, 0, 13), '-');
    assert_eq!(ch(&fb, 1, 13), '+');
    assert_eq!(ch(&fb, 1, 14), '|');
}

#[test]
fn term_view_survives_tiny_viewport() {
    let mut snap = fresh_snapshot();
    snap.obstacles = vec![Obstacle::new(70, ObstacleKind::Tree)];
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}

#[test]
fn game_over_screen_shows_score_and_hint() {
    let fb = GameOverView.render(42, Viewport::new(80, 24));
    let text = fb.to_text();
    assert!(text.contains("Final Score: 42"));
    assert!(text.contains(EXIT_HINT));

    // Score line sits three rows below the middle, centered.
    let score_row = row_text(&fb, 15);
    let line = "Final Score: 42";
    let x = score_row.find(line).unwrap();
    assert_eq!(x, 40 - line.len() / 2);
}
