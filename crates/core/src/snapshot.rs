use crate::game_state::Obstacle;
use crate::jump::JumpPhase;
use crate::types::{LevelConfig, PLAYER_FOOTPRINT};

/// Read-only view of a game, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub screen_width: i32,
    pub ground_y: i32,
    pub player_x: i32,
    /// Bottom row of the player sprite.
    pub player_y: i32,
    pub jump_phase: JumpPhase,
    pub lives: u32,
    pub score: u32,
    pub frame: u64,
    pub level: LevelConfig,
    /// Spawn order.
    pub obstacles: Vec<Obstacle>,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Top row of the player sprite.
    pub fn player_top(&self) -> i32 {
        self.player_y - PLAYER_FOOTPRINT.height + 1
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            screen_width: 0,
            ground_y: 0,
            player_x: 0,
            player_y: 0,
            jump_phase: JumpPhase::Grounded,
            lives: 0,
            score: 0,
            frame: 0,
            level: LevelConfig {
                obstacle_speed: 0,
                spawn_interval: 0,
            },
            obstacles: Vec::new(),
            game_over: false,
        }
    }
}
