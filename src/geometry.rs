use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A position in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by the given deltas
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f32 {
        Pos2::from(self).distance(other.into())
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        Pos2::new(point.x, point.y)
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Point::new(pos.x, pos.y)
    }
}

/// A width/height pair in scene units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// The region of this size centered on `center`
    pub fn rect_centered_at(self, center: Point) -> Rect {
        Rect::from_center_size(center.into(), self.into())
    }
}

impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        Vec2::new(size.width, size.height)
    }
}

impl From<Vec2> for Size {
    fn from(vec: Vec2) -> Self {
        Size::new(vec.x, vec.y)
    }
}
