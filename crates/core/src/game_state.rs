//! Game state module - manages the complete game state
//!
//! This module ties together all core components: jump arc, obstacles,
//! difficulty, collision and spawning. It owns the per-frame update order and
//! the input handler.

use log::{debug, info};
use rand_pcg::Pcg32;

use crate::collision::{obstacle_bounds, player_bounds, Aabb};
use crate::jump::{Jump, JumpPhase};
use crate::level::level_config;
use crate::rng::{seeded, SpawnRng};
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use crate::types::{ConfigError, GameConfig, InputEvent, LevelConfig, ObstacleKind};

/// An obstacle scrolling towards the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    /// Left column. Decreases every frame.
    pub x: i32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(x: i32, kind: ObstacleKind) -> Self {
        Self { x, kind }
    }

    /// True once the right edge has fully left the screen.
    pub fn is_off_screen(&self) -> bool {
        self.x <= -self.kind.footprint().width
    }
}

/// What happened during one call to [`GameState::advance_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Obstacles overlapping the player this frame (one life each).
    pub collisions: u32,
    /// Obstacles that left the screen this frame (one point each).
    pub passed: u32,
    pub spawned: Option<ObstacleKind>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    config: GameConfig,
    /// Bottom row of the player sprite.
    player_y: i32,
    jump: Jump,
    lives: u32,
    /// Spawn order.
    obstacles: Vec<Obstacle>,
    frame_count: u64,
    score: u32,
    spawner: Spawner<R>,
}

impl GameState<Pcg32> {
    /// Create a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: SpawnRng> GameState<R> {
    /// Create a new game drawing spawn decisions from `rng`.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            player_y: config.ground_y,
            jump: Jump::default(),
            lives: config.initial_lives,
            obstacles: Vec::new(),
            frame_count: 0,
            score: 0,
            spawner: Spawner::new(rng),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_y(&self) -> i32 {
        self.player_y
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping()
    }

    pub fn jump_elapsed(&self) -> u32 {
        self.jump.elapsed()
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump.phase(&self.config)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn spawner(&self) -> &Spawner<R> {
        &self.spawner
    }

    /// The session is over once every life is spent.
    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// Difficulty for the current score.
    pub fn level_config(&self) -> LevelConfig {
        level_config(self.score, &self.config)
    }

    pub fn player_bounds(&self) -> Aabb {
        player_bounds(&self.config, self.player_y)
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Order matters: the level is sampled before anything moves, collisions
    /// are checked before obstacles leave the screen, and the spawner sees
    /// the frame counter before it is incremented (so frame 0 can spawn).
    pub fn advance_frame(&mut self) -> FrameReport {
        let level = self.level_config();
        let mut report = FrameReport::default();

        if let Some(y) = self.jump.step(&self.config) {
            self.player_y = y;
        }

        let player = self.player_bounds();
        let config = self.config;
        let mut collisions = 0u32;
        let mut passed = 0u32;
        self.obstacles.retain_mut(|o| {
            o.x -= level.obstacle_speed;
            if player.intersects(&obstacle_bounds(&config, o.x, o.kind)) {
                collisions += 1;
            }
            if o.is_off_screen() {
                passed += 1;
                false
            } else {
                true
            }
        });

        if passed > 0 {
            self.score = self.score.saturating_add(passed);
            debug!("frame {}: score {}", self.frame_count, self.score);
        }
        if collisions > 0 {
            self.lives = self.lives.saturating_sub(collisions);
            debug!(
                "frame {}: {} collision(s), {} lives left",
                self.frame_count, collisions, self.lives
            );
            if self.lives == 0 {
                info!(
                    "out of lives at frame {} with score {}",
                    self.frame_count, self.score
                );
            }
        }
        report.collisions = collisions;
        report.passed = passed;

        if let Some(kind) = self.spawner.try_spawn(self.frame_count, level.spawn_interval) {
            self.obstacles
                .push(Obstacle::new(self.config.screen_width, kind));
            debug!("frame {}: spawned {}", self.frame_count, kind.as_str());
            report.spawned = Some(kind);
        }

        self.frame_count += 1;
        report
    }

    /// Apply an input event. Returns false when the session should end.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => false,
            InputEvent::Jump => {
                self.jump.start();
                true
            }
            InputEvent::Key | InputEvent::Resize { .. } | InputEvent::Ignored => true,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.screen_width = self.config.screen_width;
        out.ground_y = self.config.ground_y;
        out.player_x = self.config.player_x;
        out.player_y = self.player_y;
        out.jump_phase = self.jump_phase();
        out.lives = self.lives;
        out.score = self.score;
        out.frame = self.frame_count;
        out.level = self.level_config();
        out.obstacles.clear();
        out.obstacles.extend_from_slice(&self.obstacles);
        out.game_over = self.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
