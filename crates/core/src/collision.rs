//! Axis-aligned bounding boxes.

use crate::types::{Footprint, GameConfig, ObstacleKind, PLAYER_FOOTPRINT};

/// Axis-aligned box in character cells, `(x, y)` being the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of a sprite whose bottom row sits at `bottom`.
    pub const fn from_bottom(x: i32, bottom: i32, footprint: Footprint) -> Self {
        Self::new(
            x,
            bottom - footprint.height + 1,
            footprint.width,
            footprint.height,
        )
    }

    /// Half-open overlap test. Boxes that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Player box for a given bottom row.
pub fn player_bounds(config: &GameConfig, player_y: i32) -> Aabb {
    Aabb::from_bottom(config.player_x, player_y, PLAYER_FOOTPRINT)
}

/// Obstacle box. Obstacles always stand on the ground.
pub fn obstacle_bounds(config: &GameConfig, x: i32, kind: ObstacleKind) -> Aabb {
    Aabb::from_bottom(x, config.ground_y, kind.footprint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_corners_collide() {
        let a = Aabb::new(0, 0, 3, 3);
        let b = Aabb::new(2, 2, 3, 3);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Aabb::new(0, 0, 3, 3);
        assert!(!a.intersects(&Aabb::new(3, 0, 3, 3)));
        assert!(!a.intersects(&Aabb::new(0, 3, 3, 3)));
        assert!(!a.intersects(&Aabb::new(-3, 0, 3, 3)));
    }

    #[test]
    fn grounded_player_box_ends_on_ground_row() {
        let c = GameConfig::default();
        let p = player_bounds(&c, c.ground_y);
        assert_eq!(p, Aabb::new(10, 13, 3, 3));
    }

    #[test]
    fn obstacle_box_stands_on_ground() {
        let c = GameConfig::default();
        assert_eq!(
            obstacle_bounds(&c, 40, ObstacleKind::Tree),
            Aabb::new(40, 12, 4, 4)
        );
        assert_eq!(
            obstacle_bounds(&c, 40, ObstacleKind::Rock),
            Aabb::new(40, 14, 4, 2)
        );
    }

    #[test]
    fn player_at_peak_clears_tallest_obstacle() {
        let c = GameConfig::default();
        let p = player_bounds(&c, c.ground_y - c.jump_height);
        let tree = obstacle_bounds(&c, c.player_x, ObstacleKind::Tree);
        assert!(!p.intersects(&tree));
    }
}
