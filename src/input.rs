use crate::geometry::Point;
use crate::scene::{Scene, TouchTarget};

/// Phase of a single-pointer touch interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// A touch or pointer event delivered by the host event loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub position: Point,
    pub phase: TouchPhase,
}

impl TouchEvent {
    pub fn new(position: Point, phase: TouchPhase) -> Self {
        Self { position, phase }
    }

    pub fn began(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), TouchPhase::Began)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), TouchPhase::Moved)
    }

    pub fn ended(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), TouchPhase::Ended)
    }
}

/// Where a touch-began event is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// A toolbar icon or picker cell claimed the touch
    Target(TouchTarget),
    /// Nothing claimed the touch
    Outside,
}

/// Resolve a touch-began event against the targets registered in `scene`
pub fn route_touch(scene: &dyn Scene, position: Point) -> Route {
    match scene.target_at(position) {
        Some(target) => Route::Target(target),
        None => Route::Outside,
    }
}

/// Whether a position lies on the canvas, strictly right of the sidebar boundary
pub fn is_on_canvas(position: Point, boundary_x: f32) -> bool {
    position.x > boundary_x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::graphic::{Anchor, Graphic};
    use crate::scene::RecordingScene;

    #[test]
    fn test_canvas_gate_is_strict() {
        assert!(is_on_canvas(Point::new(-409.0, 0.0), -410.0));
        assert!(!is_on_canvas(Point::new(-410.0, 0.0), -410.0));
        assert!(!is_on_canvas(Point::new(-500.0, 0.0), -410.0));
    }

    #[test]
    fn test_route_touch() {
        let mut scene = RecordingScene::new();
        let icon = scene.place(Graphic::circle(20.0, Color::BLACK), Point::ZERO, Anchor::Center);
        scene.set_touch_target(icon, TouchTarget::BrushIcon(2)).unwrap();

        assert_eq!(
            route_touch(&scene, Point::new(5.0, 5.0)),
            Route::Target(TouchTarget::BrushIcon(2))
        );
        assert_eq!(route_touch(&scene, Point::new(100.0, 0.0)), Route::Outside);
    }
}
