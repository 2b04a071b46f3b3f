use egui::Color32;
use egui::ecolor::Hsva;
use serde::{Deserialize, Serialize};

/// Color handed through the toolbar to brushes and icons.
///
/// The toolbar never inspects a color beyond passing it on, so the variants keep
/// the components a picker produced instead of rounding them into 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Color {
    Hsb {
        hue: f32,
        saturation: f32,
        brightness: f32,
    },
    Gray {
        white: f32,
    },
    Rgba {
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    },
}

impl Color {
    pub const BLACK: Self = Self::Gray { white: 0.0 };
    pub const WHITE: Self = Self::Gray { white: 1.0 };
    pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);
    pub const SYSTEM_PURPLE: Self = Self::rgba(175, 82, 222, 255);
    pub const DEFAULT_DRAWING: Self = Self::BLACK;

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub const fn hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self::Hsb {
            hue,
            saturation,
            brightness,
        }
    }

    pub const fn gray(white: f32) -> Self {
        Self::Gray { white }
    }

    pub fn to_color32(self) -> Color32 {
        match self {
            Self::Hsb {
                hue,
                saturation,
                brightness,
            } => Hsva::new(hue.rem_euclid(1.0), saturation, brightness, 1.0).into(),
            Self::Gray { white } => Color32::from_gray(unit_to_byte(white)),
            Self::Rgba { r, g, b, a } => Color32::from_rgba_unmultiplied(r, g, b, a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT_DRAWING
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        color.to_color32()
    }
}

fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
