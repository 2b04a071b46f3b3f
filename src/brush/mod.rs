use crate::color::Color;
use crate::graphic::Graphic;
use crate::input::TouchEvent;
use crate::scene::Scene;

mod eraser;
mod lines;
mod pen;
mod spray_paint;

pub use eraser::Eraser;
pub use lines::Lines;
pub use pen::Pen;
pub use spray_paint::SprayPaint;

/// Thickness of newly created drawing brushes.
pub const DEFAULT_THICKNESS: u32 = 5;

/// Sidebar edge used by brushes that have not been told otherwise.
pub const DEFAULT_CANVAS_BOUNDARY_X: f32 = -410.0;

/// Turns canvas touches into marks on the scene.
///
/// Thickness and color are read when a touch arrives, so a value applied by a
/// picker shows up in the next mark.
pub trait Brush {
    fn name(&self) -> &'static str;

    fn thickness(&self) -> u32;

    fn set_thickness(&mut self, thickness: u32);

    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    /// The toolbar icon for this brush
    fn icon(&self) -> Graphic;

    /// Render the marks for one touch-moved event
    fn handle_touch(&mut self, touch: &TouchEvent, scene: &mut dyn Scene);

    /// Forget any per-stroke state, e.g. when the pointer lifts
    fn reset_stroke(&mut self) {}
}

/// Every brush the toolbar can hold
#[derive(Debug, Clone)]
pub enum BrushKind {
    Pen(Pen),
    Lines(Lines),
    SprayPaint(SprayPaint),
    Eraser(Eraser),
}

impl Default for BrushKind {
    fn default() -> Self {
        Self::Pen(Pen::default())
    }
}

impl BrushKind {
    /// Tell brushes that place marks off the touch point where the sidebar ends
    pub fn set_canvas_boundary(&mut self, boundary_x: f32) {
        if let Self::SprayPaint(brush) = self {
            brush.set_canvas_boundary(boundary_x);
        }
    }
}

impl Brush for BrushKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Pen(brush) => brush.name(),
            Self::Lines(brush) => brush.name(),
            Self::SprayPaint(brush) => brush.name(),
            Self::Eraser(brush) => brush.name(),
        }
    }

    fn thickness(&self) -> u32 {
        match self {
            Self::Pen(brush) => brush.thickness(),
            Self::Lines(brush) => brush.thickness(),
            Self::SprayPaint(brush) => brush.thickness(),
            Self::Eraser(brush) => brush.thickness(),
        }
    }

    fn set_thickness(&mut self, thickness: u32) {
        match self {
            Self::Pen(brush) => brush.set_thickness(thickness),
            Self::Lines(brush) => brush.set_thickness(thickness),
            Self::SprayPaint(brush) => brush.set_thickness(thickness),
            Self::Eraser(brush) => brush.set_thickness(thickness),
        }
    }

    fn color(&self) -> Color {
        match self {
            Self::Pen(brush) => brush.color(),
            Self::Lines(brush) => brush.color(),
            Self::SprayPaint(brush) => brush.color(),
            Self::Eraser(brush) => brush.color(),
        }
    }

    fn set_color(&mut self, color: Color) {
        match self {
            Self::Pen(brush) => brush.set_color(color),
            Self::Lines(brush) => brush.set_color(color),
            Self::SprayPaint(brush) => brush.set_color(color),
            Self::Eraser(brush) => brush.set_color(color),
        }
    }

    fn icon(&self) -> Graphic {
        match self {
            Self::Pen(brush) => brush.icon(),
            Self::Lines(brush) => brush.icon(),
            Self::SprayPaint(brush) => brush.icon(),
            Self::Eraser(brush) => brush.icon(),
        }
    }

    fn handle_touch(&mut self, touch: &TouchEvent, scene: &mut dyn Scene) {
        match self {
            Self::Pen(brush) => brush.handle_touch(touch, scene),
            Self::Lines(brush) => brush.handle_touch(touch, scene),
            Self::SprayPaint(brush) => brush.handle_touch(touch, scene),
            Self::Eraser(brush) => brush.handle_touch(touch, scene),
        }
    }

    fn reset_stroke(&mut self) {
        match self {
            Self::Pen(brush) => brush.reset_stroke(),
            Self::Lines(brush) => brush.reset_stroke(),
            Self::SprayPaint(brush) => brush.reset_stroke(),
            Self::Eraser(brush) => brush.reset_stroke(),
        }
    }
}

impl From<Pen> for BrushKind {
    fn from(brush: Pen) -> Self {
        Self::Pen(brush)
    }
}

impl From<Lines> for BrushKind {
    fn from(brush: Lines) -> Self {
        Self::Lines(brush)
    }
}

impl From<SprayPaint> for BrushKind {
    fn from(brush: SprayPaint) -> Self {
        Self::SprayPaint(brush)
    }
}

impl From<Eraser> for BrushKind {
    fn from(brush: Eraser) -> Self {
        Self::Eraser(brush)
    }
}
