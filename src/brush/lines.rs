use crate::color::Color;
use crate::geometry::Point;
use crate::graphic::{Anchor, Graphic};
use crate::input::TouchEvent;
use crate::scene::Scene;

use super::{Brush, DEFAULT_THICKNESS};

/// Connects consecutive touch points with straight segments
#[derive(Debug, Clone, PartialEq)]
pub struct Lines {
    pub thickness: u32,
    pub color: Color,
    previous_touch_point: Option<Point>,
}

impl Default for Lines {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            color: Color::DEFAULT_DRAWING,
            previous_touch_point: None,
        }
    }
}

impl Lines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_touch_point(&self) -> Option<Point> {
        self.previous_touch_point
    }
}

impl Brush for Lines {
    fn name(&self) -> &'static str {
        "Lines"
    }

    fn thickness(&self) -> u32 {
        self.thickness
    }

    fn set_thickness(&mut self, thickness: u32) {
        self.thickness = thickness;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn icon(&self) -> Graphic {
        Graphic::image("Line tool")
    }

    fn handle_touch(&mut self, touch: &TouchEvent, scene: &mut dyn Scene) {
        // First touch of a stroke draws a zero-length segment.
        let start = self.previous_touch_point.unwrap_or(touch.position);
        let line = Graphic::line(start, touch.position, self.thickness as f32, self.color);
        scene.place(line, start, Anchor::Center);
        self.previous_touch_point = Some(touch.position);
    }

    fn reset_stroke(&mut self) {
        self.previous_touch_point = None;
    }
}
