//! Difficulty scaling.
//!
//! Difficulty is always derived from the score and never stored, so it can be
//! recomputed freely by the update step and the renderer.

use crate::types::{GameConfig, LevelConfig, LEVEL_SCORE_STEP};

/// Compute the level parameters for `score`.
///
/// Every [`LEVEL_SCORE_STEP`] points add one column per frame of obstacle
/// speed (capped at `max_speed`) and remove one frame from the spawn interval
/// (floored at `min_spawn_interval`).
pub fn level_config(score: u32, config: &GameConfig) -> LevelConfig {
    let level_increase = score / LEVEL_SCORE_STEP;

    let speed_increase = i32::try_from(level_increase).unwrap_or(i32::MAX);
    let obstacle_speed = config
        .base_obstacle_speed
        .saturating_add(speed_increase)
        .min(config.max_speed);

    let spawn_interval = config
        .base_spawn_interval
        .saturating_sub(level_increase)
        .max(config.min_spawn_interval);

    LevelConfig {
        obstacle_speed,
        spawn_interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn base_level_at_zero() {
        let c = GameConfig::default();
        assert_eq!(
            level_config(0, &c),
            LevelConfig {
                obstacle_speed: 1,
                spawn_interval: 25
            }
        );
    }

    #[test]
    fn steps_every_ten_points() {
        let c = GameConfig::default();
        assert_eq!(level_config(9, &c).obstacle_speed, 1);
        assert_eq!(level_config(10, &c).obstacle_speed, 2);
        assert_eq!(level_config(10, &c).spawn_interval, 24);
        assert_eq!(level_config(39, &c).obstacle_speed, 4);
    }

    #[test]
    fn clamps_at_limits() {
        let c = GameConfig::default();
        assert_eq!(level_config(40, &c).obstacle_speed, 5);
        assert_eq!(level_config(1_000, &c).obstacle_speed, 5);
        assert_eq!(level_config(150, &c).spawn_interval, 10);
        assert_eq!(level_config(u32::MAX, &c).spawn_interval, 10);
        assert_eq!(level_config(u32::MAX, &c).obstacle_speed, 5);
    }

    proptest! {
        #[test]
        fn speed_is_monotonic_and_capped(a in 0u32..100_000, b in 0u32..100_000) {
            let c = GameConfig::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let l = level_config(lo, &c);
            let h = level_config(hi, &c);
            prop_assert!(l.obstacle_speed <= h.obstacle_speed);
            prop_assert!(h.obstacle_speed <= c.max_speed);
        }

        #[test]
        fn spawn_interval_is_monotonic_and_floored(a in 0u32..100_000, b in 0u32..100_000) {
            let c = GameConfig::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let l = level_config(lo, &c);
            let h = level_config(hi, &c);
            prop_assert!(l.spawn_interval >= h.spawn_interval);
            prop_assert!(h.spawn_interval >= c.min_spawn_interval);
        }
    }
}
