use crate::color::Color;
use crate::graphic::{Anchor, Graphic};
use crate::input::TouchEvent;
use crate::scene::Scene;

use super::{Brush, DEFAULT_THICKNESS};

/// Draws a dot per touch, leaving a free-form trail
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub thickness: u32,
    pub color: Color,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            color: Color::DEFAULT_DRAWING,
        }
    }
}

impl Pen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Brush for Pen {
    fn name(&self) -> &'static str {
        "Pen"
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
        Graphic::image("Pen tool")
    }

    fn handle_touch(&mut self, touch: &TouchEvent, scene: &mut dyn Scene) {
        let radius = (self.thickness / 2) as f32;
        scene.place(Graphic::circle(radius, self.color), touch.position, Anchor::Center);
    }
}
