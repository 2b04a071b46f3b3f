use std::fmt;
use std::time::Duration;

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;
use crate::geometry::{Point, Size};

/// Stable handle for a graphic once it has been placed in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphicId(Uuid);

impl GraphicId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GraphicId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GraphicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which point of a graphic's bounds its position refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    Center,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        radius: f32,
    },
    Rectangle {
        width: f32,
        height: f32,
        corner_radius: f32,
    },
    /// A segment between two absolute scene points
    Line {
        start: Point,
        end: Point,
        thickness: f32,
    },
    /// A horizontal bar of fixed length, usually rotated into place
    Bar {
        length: f32,
        thickness: f32,
    },
    Image {
        asset: String,
        size: Size,
    },
}

/// Default on-screen size of an image icon.
pub const IMAGE_ICON_SIZE: Size = Size::square(60.0);

/// A visual element as handed to the scene.
///
/// Before placement a `Graphic` is only a description. The scene fills in
/// `position`/`anchor` when placing it and owns it from then on; callers keep the
/// returned [`GraphicId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub shape: Shape,
    pub name: Option<String>,
    pub position: Point,
    pub anchor: Anchor,
    pub z_position: f32,
    /// Degrees, counter-clockwise
    pub rotation: f32,
    pub scale: f32,
    pub fill: Color,
    pub background_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f32,
    pub image_tint: Option<Color>,
}

impl Graphic {
    fn with_shape(shape: Shape, fill: Color) -> Self {
        Self {
            shape,
            name: None,
            position: Point::ZERO,
            anchor: Anchor::Center,
            z_position: 0.0,
            rotation: 0.0,
            scale: 1.0,
            fill,
            background_color: None,
            stroke_color: None,
            stroke_width: 0.0,
            image_tint: None,
        }
    }

    pub fn circle(radius: f32, color: Color) -> Self {
        Self::with_shape(Shape::Circle { radius }, color)
    }

    pub fn rectangle(width: f32, height: f32, corner_radius: f32, color: Color) -> Self {
        Self::with_shape(
            Shape::Rectangle {
                width,
                height,
                corner_radius,
            },
            color,
        )
    }

    pub fn line(start: Point, end: Point, thickness: f32, color: Color) -> Self {
        Self::with_shape(
            Shape::Line {
                start,
                end,
                thickness,
            },
            color,
        )
    }

    pub fn bar(length: f32, thickness: f32, color: Color) -> Self {
        Self::with_shape(Shape::Bar { length, thickness }, color)
    }

    pub fn image(asset: impl Into<String>) -> Self {
        Self::with_shape(
            Shape::Image {
                asset: asset.into(),
                size: IMAGE_ICON_SIZE,
            },
            Color::BLACK,
        )
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn stroked(mut self, color: Color, width: f32) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Unrotated, unscaled size of the shape
    pub fn size(&self) -> Size {
        match &self.shape {
            Shape::Circle { radius } => Size::square(radius * 2.0),
            Shape::Rectangle { width, height, .. } => Size::new(*width, *height),
            Shape::Line {
                start,
                end,
                thickness,
            } => Size::new(
                (end.x - start.x).abs() + thickness,
                (end.y - start.y).abs() + thickness,
            ),
            Shape::Bar { length, thickness } => Size::new(*length, *thickness),
            Shape::Image { size, .. } => *size,
        }
    }

    /// Changes the shape's height; for bars the height is the bar thickness
    pub fn set_height(&mut self, height: f32) {
        match &mut self.shape {
            Shape::Circle { radius } => *radius = height / 2.0,
            Shape::Rectangle { height: h, .. } => *h = height,
            Shape::Line { thickness, .. } | Shape::Bar { thickness, .. } => *thickness = height,
            Shape::Image { size, .. } => size.height = height,
        }
    }

    /// Axis-aligned bounds in scene coordinates
    pub fn bounds(&self) -> Rect {
        if let Shape::Line {
            start,
            end,
            thickness,
        } = &self.shape
        {
            let pad = thickness * self.scale / 2.0;
            return Rect::from_two_pos((*start).into(), (*end).into()).expand(pad);
        }

        let size = self.size();
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let extent = Vec2::new(
            (size.width * cos).abs() + (size.height * sin).abs(),
            (size.width * sin).abs() + (size.height * cos).abs(),
        ) * self.scale;

        let position = Pos2::from(self.position);
        let center = match self.anchor {
            Anchor::Center => position,
            Anchor::Left => position + Vec2::new(extent.x / 2.0, 0.0),
        };
        Rect::from_center_size(center, extent)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point.into())
    }
}

/// Animations a scene can run on a placed graphic
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    ScaleTo { scale: f32, duration: Duration },
}

impl Animation {
    pub fn duration(&self) -> Duration {
        match self {
            Self::ScaleTo { duration, .. } => *duration,
        }
    }
}
