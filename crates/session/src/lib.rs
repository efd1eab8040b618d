//! Session loop - serialized dispatch of ticks and input
//!
//! A [`Session`] owns the single [`GameState`] of a run and multiplexes two
//! event sources onto it with `tokio::select!`:
//!
//! - a fixed-period ticker (advance one frame, then present it)
//! - a channel of [`InputEvent`]s fed by the front end
//!
//! Only the loop touches the game, so frame advancement and input handling
//! never interleave. Ticks that are missed (e.g. a slow terminal flush) are
//! skipped rather than replayed in a burst.
//!
//! The loop knows nothing about terminals: drawing goes through the
//! [`Presenter`] trait.

use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, Interval, MissedTickBehavior};

use terminal_runner_core::{GameSnapshot, GameState, SpawnRng};
use terminal_runner_types::InputEvent;

pub use terminal_runner_core as core;
pub use terminal_runner_types as types;

/// Drawing capability consumed by the session.
pub trait Presenter {
    type Error;

    /// Show a freshly advanced frame.
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;

    /// The output surface changed size; the next frame must redraw fully.
    fn invalidate(&mut self) {}
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player asked to quit.
    Quit,
    /// Lives reached zero.
    OutOfLives,
    /// The input source went away.
    InputClosed,
}

/// Ticker firing every `period`, skipping (not bursting) missed ticks.
///
/// `period` must be non-zero.
pub fn frame_ticker(period: Duration) -> Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

pub struct Session<R> {
    game: GameState<R>,
    snapshot: GameSnapshot,
}

impl<R: SpawnRng> Session<R> {
    pub fn new(game: GameState<R>) -> Self {
        let snapshot = game.snapshot();
        Self { game, snapshot }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn into_game(self) -> GameState<R> {
        self.game
    }

    /// Run until the player quits, runs out of lives, or input closes.
    ///
    /// Presenter errors abort the loop and are returned unchanged.
    pub async fn run<P: Presenter>(
        &mut self,
        events: &mut UnboundedReceiver<InputEvent>,
        presenter: &mut P,
    ) -> Result<SessionEnd, P::Error> {
        let mut ticker = frame_ticker(self.game.config().frame_period);
        info!(
            "session started: width {}, {} lives",
            self.game.config().screen_width,
            self.game.lives()
        );

        let end = loop {
            if self.game.is_over() {
                break SessionEnd::OutOfLives;
            }

            tokio::select! {
                _ = ticker.tick() => {
                    self.game.advance_frame();
                    self.game.snapshot_into(&mut self.snapshot);
                    presenter.present(&self.snapshot)?;
                }
                event = events.recv() => match event {
                    Some(event) => {
                        debug!("input {:?}", event);
                        if let InputEvent::Resize { .. } = event {
                            presenter.invalidate();
                        }
                        if !self.game.handle_input(event) {
                            break SessionEnd::Quit;
                        }
                    }
                    None => break SessionEnd::InputClosed,
                },
            }
        };

        info!(
            "session ended ({:?}) at frame {} with score {}",
            end,
            self.game.frame_count(),
            self.game.score()
        );
        Ok(end)
    }
}

/// Drop events that are already queued. Returns how many were dropped.
///
/// Keys pressed during play must not count as an answer to a later prompt.
pub fn discard_pending(events: &mut UnboundedReceiver<InputEvent>) -> usize {
    let mut dropped = 0;
    while events.try_recv().is_ok() {
        dropped += 1;
    }
    if dropped > 0 {
        debug!("discarded {} queued input event(s)", dropped);
    }
    dropped
}

/// Wait for the next key press. Returns false if input closed first.
pub async fn wait_for_key(events: &mut UnboundedReceiver<InputEvent>) -> bool {
    while let Some(event) = events.recv().await {
        if event.is_key_press() {
            return true;
        }
    }
    false
}
