//! Integer pixel rectangles.

use glam::UVec2;
use serde::Serialize;

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get position as UVec2.
    pub fn position(&self) -> UVec2 {
        UVec2::new(self.x, self.y)
    }

    /// Get size as UVec2.
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Get the right edge (exclusive).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottom edge (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a pixel lies inside the bounds.
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if another rectangle lies entirely inside these bounds.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Inset bounds by a uniform amount, saturating at zero size.
    pub fn inset(&self, amount: u32) -> Bounds {
        Bounds::new(
            self.x + amount,
            self.y + amount,
            self.width.saturating_sub(2 * amount),
            self.height.saturating_sub(2 * amount),
        )
    }
}
