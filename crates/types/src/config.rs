//! Session configuration.
//!
//! A [`GameConfig`] is built once at startup and never mutated afterwards.
//! Defaults reproduce the classic tuning; individual values can be overridden
//! through `RUNNER_*` environment variables.

use std::time::Duration;

use thiserror::Error;

/// Immutable per-session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Playfield width in columns. Obstacles spawn at this column.
    pub screen_width: i32,
    /// Row of the bottom of every grounded sprite.
    pub ground_y: i32,
    /// Left column of the player sprite.
    pub player_x: i32,
    /// Rows gained at the top of a jump.
    pub jump_height: i32,
    /// Frames from take-off to landing.
    pub jump_duration: u32,
    pub initial_lives: u32,
    pub base_obstacle_speed: i32,
    pub max_speed: i32,
    pub base_spawn_interval: u32,
    pub min_spawn_interval: u32,
    /// Fixed timestep.
    pub frame_period: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 80,
            ground_y: 15,
            player_x: 10,
            jump_height: 10,
            jump_duration: 18,
            initial_lives: 5,
            base_obstacle_speed: 1,
            max_speed: 5,
            base_spawn_interval: 25,
            min_spawn_interval: 10,
            frame_period: Duration::from_millis(32),
        }
    }
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen width must be positive, got {0}")]
    ScreenWidth(i32),
    #[error("jump duration must be at least 2 frames, got {0}")]
    JumpDuration(u32),
    #[error("jump height must be between 0 and ground row {ground_y}, got {height}")]
    JumpHeight { height: i32, ground_y: i32 },
    #[error("jump of height {height} over {duration} frames overflows the arc computation")]
    JumpArc { height: i32, duration: u32 },
    #[error("initial lives must be at least 1")]
    NoLives,
    #[error("obstacle speed must be positive (base {base}, max {max}) with max >= base")]
    Speed { base: i32, max: i32 },
    #[error("spawn interval must be positive (base {base}, min {min}) with base >= min")]
    SpawnInterval { base: u32, min: u32 },
    #[error("frame period must be non-zero")]
    FramePeriod,
}

impl GameConfig {
    /// Build a config from defaults plus `RUNNER_*` environment overrides.
    ///
    /// Unset or unparsable variables keep their default value. The result is
    /// not validated; call [`GameConfig::validate`] once all overrides
    /// (e.g. the terminal width) are applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parse<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
            default: T,
        ) -> T {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        }

        let d = Self::default();
        let frame_ms = parse(&lookup, "RUNNER_FRAME_MS", d.frame_period.as_millis() as u64);

        Self {
            screen_width: d.screen_width,
            ground_y: parse(&lookup, "RUNNER_GROUND_Y", d.ground_y),
            player_x: parse(&lookup, "RUNNER_PLAYER_X", d.player_x),
            jump_height: parse(&lookup, "RUNNER_JUMP_HEIGHT", d.jump_height),
            jump_duration: parse(&lookup, "RUNNER_JUMP_DURATION", d.jump_duration),
            initial_lives: parse(&lookup, "RUNNER_LIVES", d.initial_lives),
            base_obstacle_speed: parse(&lookup, "RUNNER_BASE_SPEED", d.base_obstacle_speed),
            max_speed: parse(&lookup, "RUNNER_MAX_SPEED", d.max_speed),
            base_spawn_interval: parse(&lookup, "RUNNER_SPAWN_INTERVAL", d.base_spawn_interval),
            min_spawn_interval: parse(&lookup, "RUNNER_MIN_SPAWN_INTERVAL", d.min_spawn_interval),
            frame_period: Duration::from_millis(frame_ms),
        }
    }

    /// Check that every divisor and rate is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 {
            return Err(ConfigError::ScreenWidth(self.screen_width));
        }
        if self.jump_duration < 2 {
            return Err(ConfigError::JumpDuration(self.jump_duration));
        }
        if self.jump_height < 0 || self.jump_height > self.ground_y {
            return Err(ConfigError::JumpHeight {
                height: self.jump_height,
                ground_y: self.ground_y,
            });
        }
        // The arc multiplies the height by the elapsed frames before dividing.
        let arc_fits = i32::try_from(self.jump_duration)
            .ok()
            .and_then(|d| self.jump_height.checked_mul(d))
            .is_some();
        if !arc_fits {
            return Err(ConfigError::JumpArc {
                height: self.jump_height,
                duration: self.jump_duration,
            });
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.base_obstacle_speed < 1 || self.max_speed < self.base_obstacle_speed {
            return Err(ConfigError::Speed {
                base: self.base_obstacle_speed,
                max: self.max_speed,
            });
        }
        if self.min_spawn_interval < 1 || self.base_spawn_interval < self.min_spawn_interval {
            return Err(ConfigError::SpawnInterval {
                base: self.base_spawn_interval,
                min: self.min_spawn_interval,
            });
        }
        if self.frame_period.is_zero() {
            return Err(ConfigError::FramePeriod);
        }
        Ok(())
    }

    /// Replace the playfield width, typically with the terminal width.
    pub fn with_screen_width(mut self, width: u16) -> Self {
        self.screen_width = i32::from(width);
        self
    }
}
