use crate::color::Color;
use crate::geometry::Size;
use crate::graphic::Graphic;
use crate::input::TouchEvent;
use crate::scene::Scene;

/// Erasers start wider than drawing brushes so they cover whole strokes.
pub const DEFAULT_ERASER_THICKNESS: u32 = 30;

/// Removes every mark within a square around the touch point.
///
/// Graphics carrying a name tag belong to the toolbar or a picker and are never
/// erased.
#[derive(Debug, Clone, PartialEq)]
pub struct Eraser {
    pub thickness: u32,
    pub color: Color,
}

impl Default for Eraser {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_ERASER_THICKNESS,
            color: Color::WHITE,
        }
    }
}

impl Eraser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Side of the square erased around each touch
    pub fn reach(&self) -> Size {
        Size::square(self.thickness as f32 * 2.0)
    }
}

impl super::Brush for Eraser {
    fn name(&self) -> &'static str {
        "Eraser"
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
        Graphic::image("Eraser")
    }

    fn handle_touch(&mut self, touch: &TouchEvent, scene: &mut dyn Scene) {
        let erased: Vec<_> = scene
            .graphics_in(touch.position, self.reach())
            .into_iter()
            .filter(|id| scene.graphic(*id).is_some_and(|graphic| graphic.name.is_none()))
            .collect();
        if !erased.is_empty() {
            log::debug!("Eraser removed {} graphics at {:?}", erased.len(), touch.position);
            scene.remove(&erased);
        }
    }
}
