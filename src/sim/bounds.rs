//! Axis-aligned rectangles for the arena and the floor
//!
//! Screen coordinates: x grows right, y grows down, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::RoundConfig;

/// A closed rectangle `[left, right] × [top, bottom]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Inclusive on all four edges
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Clamp a point into the rectangle
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left, self.right),
            p.y.clamp(self.top, self.bottom),
        )
    }

    /// Shrink by a margin on each side (never inverts: collapses to the center line)
    pub fn inset(&self, margin_x: f32, margin_y: f32) -> Self {
        let c = self.center();
        let mx = margin_x.min(self.width() / 2.0);
        let my = margin_y.min(self.height() / 2.0);
        Self {
            left: (self.left + mx).min(c.x),
            right: (self.right - mx).max(c.x),
            top: (self.top + my).min(c.y),
            bottom: (self.bottom - my).max(c.y),
        }
    }
}

/// Arena and floor geometry, computed once per round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorLayout {
    /// The whole visible world (leaves can't leave it)
    pub arena: Bounds,
    /// The tiled floor that has to be cleaned
    pub floor: Bounds,
    /// Size of one floor tile
    pub cell: Vec2,
}

impl FloorLayout {
    /// Center a `cols × rows` floor covering `floor_fraction` of the arena
    pub fn new(config: &RoundConfig) -> Self {
        let arena = Bounds::new(0.0, config.arena_width, 0.0, config.arena_height);

        let floor_w = config.arena_width * config.floor_fraction;
        let floor_h = config.arena_height * config.floor_fraction;
        let cell = Vec2::new(
            floor_w / config.grid_cols as f32,
            floor_h / config.grid_rows as f32,
        );

        let left = (config.arena_width - floor_w) / 2.0;
        let top = (config.arena_height - floor_h) / 2.0;
        let floor = Bounds::new(left, left + floor_w, top, top + floor_h);

        Self { arena, floor, cell }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_inclusive() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert!(b.contains_point(Vec2::new(15.0, 35.0)));
        assert!(b.contains_point(Vec2::new(10.0, 30.0)));
        assert!(b.contains_point(Vec2::new(20.0, 40.0)));
        assert!(!b.contains_point(Vec2::new(9.999, 35.0)));
        assert!(!b.contains_point(Vec2::new(15.0, 40.001)));
    }

    #[test]
    fn test_clamp_point() {
        let b = Bounds::new(0.0, 100.0, 0.0, 50.0);
        assert_eq!(b.clamp_point(Vec2::new(-5.0, 70.0)), Vec2::new(0.0, 50.0));
        assert_eq!(b.clamp_point(Vec2::new(20.0, 20.0)), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_inset_never_inverts() {
        let b = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let inner = b.inset(2.0, 3.0);
        assert_eq!(inner, Bounds::new(2.0, 8.0, 3.0, 7.0));

        let collapsed = b.inset(20.0, 20.0);
        assert!(collapsed.left <= collapsed.right);
        assert!(collapsed.top <= collapsed.bottom);
    }

    #[test]
    fn test_default_layout() {
        let layout = FloorLayout::new(&RoundConfig::default());
        // 80% of 800x600, centered
        assert!((layout.floor.left - 80.0).abs() < 1e-4);
        assert!((layout.floor.right - 720.0).abs() < 1e-4);
        assert!((layout.floor.top - 60.0).abs() < 1e-4);
        assert!((layout.floor.bottom - 540.0).abs() < 1e-4);
        assert!((layout.cell.x - 80.0).abs() < 1e-4);
        assert!((layout.cell.y - 60.0).abs() < 1e-4);
        assert_eq!(layout.floor.center(), layout.arena.center());
    }
}
