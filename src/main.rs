//! Terminal runner (default binary).
//!
//! Wires the simulation to the terminal: crossterm for input, the
//! framebuffer renderer for output, and the session loop in between.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::{event, terminal};
use log::{info, warn};
use tokio::sync::mpsc::{self, UnboundedSender};

use terminal_runner::core::{GameSnapshot, GameState};
use terminal_runner::input::map_event;
use terminal_runner::session::{discard_pending, wait_for_key, Presenter, Session};
use terminal_runner::term::{FrameBuffer, GameOverView, GameView, TerminalRenderer, Viewport};
use terminal_runner::types::{GameConfig, InputEvent};

/// How long the input thread blocks before checking whether the game is gone.
const INPUT_POLL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        return Err(err.context("failed to initialize terminal"));
    }

    let result = run(&mut term).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (width, height) = terminal::size().context("failed to query terminal size")?;
    let config = GameConfig::from_env().with_screen_width(width);
    let seed = session_seed();
    info!("seed {}, config {:?}", seed, config);

    let game = GameState::new(config, seed)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx);

    let mut presenter = TerminalPresenter {
        term,
        view: GameView::default(),
        fb: FrameBuffer::new(width, height),
    };
    let mut session = Session::new(game);
    session.run(&mut rx, &mut presenter).await?;

    presenter.show_game_over(session.game().score())?;
    discard_pending(&mut rx);
    wait_for_key(&mut rx).await;
    Ok(())
}

struct TerminalPresenter<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalPresenter<'_> {
    fn show_game_over(&mut self, score: u32) -> Result<()> {
        GameOverView.render_into(score, current_viewport(), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

impl Presenter for TerminalPresenter<'_> {
    type Error = anyhow::Error;

    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view
            .render_into(snapshot, current_viewport(), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }

    fn invalidate(&mut self) {
        self.term.invalidate();
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Forward terminal events until the receiver is dropped.
///
/// crossterm reads block, so this runs on a plain thread and polls with a
/// timeout to notice when the game has gone away.
fn spawn_input_reader(tx: UnboundedSender<InputEvent>) {
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    warn!("input poll failed: {}", err);
                    break;
                }
            }
            match event::read() {
                Ok(ev) => {
                    if tx.send(map_event(&ev)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!("input read failed: {}", err);
                    break;
                }
            }
        }
    });
}

/// `RUNNER_SEED` if set, otherwise the current time.
fn session_seed() -> u64 {
    std::env::var("RUNNER_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
}

/// Log to the file named by `RUNNER_LOG_PATH`; stay silent otherwise.
///
/// The terminal is in raw mode on the alternate screen, so stderr is not an
/// option.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("RUNNER_LOG_PATH").filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
