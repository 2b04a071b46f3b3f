use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::graphic::{Anchor, Graphic};
use crate::input::{TouchEvent, is_on_canvas};
use crate::scene::Scene;

use super::{Brush, DEFAULT_CANVAS_BOUNDARY_X, DEFAULT_THICKNESS};

/// How many dots a single touch sprays.
pub const DOTS_PER_TOUCH: RangeInclusive<u32> = 10..=30;

/// Sprays a cluster of randomly sized dots around each touch
#[derive(Debug, Clone)]
pub struct SprayPaint {
    pub thickness: u32,
    pub color: Color,
    canvas_boundary_x: f32,
    rng: StdRng,
}

impl Default for SprayPaint {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl SprayPaint {
    pub fn new() -> Self {
        Self::default()
    }

    /// A spray brush with reproducible dot placement
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            color: Color::DEFAULT_DRAWING,
            canvas_boundary_x: DEFAULT_CANVAS_BOUNDARY_X,
            rng,
        }
    }

    pub fn set_canvas_boundary(&mut self, boundary_x: f32) {
        self.canvas_boundary_x = boundary_x;
    }

    pub fn canvas_boundary(&self) -> f32 {
        self.canvas_boundary_x
    }
}

impl Brush for SprayPaint {
    fn name(&self) -> &'static str {
        "SprayPaint"
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
        Graphic::image("Spraypaint")
    }

    fn handle_touch(&mut self, touch: &TouchEvent, scene: &mut dyn Scene) {
        let jitter = self.thickness as f32;
        let count = self.rng.gen_range(DOTS_PER_TOUCH);
        let mut dropped = 0;

        for _ in 0..count {
            let radius = 1 + self.rng.gen_range(0..=self.thickness / 2);
            let angle = self.rng.gen_range(0.0..TAU);
            let distance = self.rng.gen_range(0.0..=jitter);
            let dot = touch
                .position
                .offset(distance * angle.cos(), distance * angle.sin());

            // Dots must not land on the sidebar.
            if !is_on_canvas(dot, self.canvas_boundary_x) {
                dropped += 1;
                continue;
            }
            scene.place(Graphic::circle(radius as f32, self.color), dot, Anchor::Center);
        }

        if dropped > 0 {
            log::debug!("Spray dropped {dropped} of {count} dots left of the canvas");
        }
    }
}
