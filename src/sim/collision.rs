//! Axis-aligned box overlap between cars
//!
//! Boxes are described by their centre and full size. Overlap is strict on
//! both axes, so boxes that only share an edge do not collide.

use glam::Vec2;

use crate::car_size;

/// A centred axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Rectangle of a car centred at `center`
    pub fn car(center: Vec2) -> Self {
        Self::new(center, car_size())
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }
}

/// True iff the two rectangles overlap with positive area
pub fn check_collision(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());

    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}
