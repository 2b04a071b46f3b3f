use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::brush::DEFAULT_CANVAS_BOUNDARY_X;
use crate::color::Color;
use crate::error::ConfigError;
use crate::geometry::Point;

/// Layout and styling of the toolbar sidebar and its pickers.
///
/// Missing fields fall back to their defaults, so a config file only needs the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    pub width: f32,
    /// Sidebar height before any brush slots are added
    pub base_height: f32,
    /// Extra sidebar height per brush slot
    pub slot_height: f32,
    /// Vertical distance between icons
    pub icon_spacing: f32,
    pub corner_radius: f32,
    /// Center of the sidebar rectangle
    pub position: Point,
    /// Touches at or left of this x never reach the canvas
    pub canvas_boundary_x: f32,
    pub max_brushes: usize,
    pub background: Color,
    pub selected_tint: Color,
    pub unselected_tint: Color,
    pub color_picker: ColorPickerLayout,
    pub thickness_picker: ThicknessPickerLayout,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            width: 90.0,
            base_height: 250.0,
            slot_height: 75.0,
            icon_spacing: 85.0,
            corner_radius: 20.0,
            position: Point::new(-460.0, 0.0),
            canvas_boundary_x: DEFAULT_CANVAS_BOUNDARY_X,
            max_brushes: 6,
            background: Color::gray(0.8),
            selected_tint: Color::SYSTEM_PURPLE,
            unselected_tint: Color::BLACK,
            color_picker: ColorPickerLayout::default(),
            thickness_picker: ThicknessPickerLayout::default(),
        }
    }
}

impl ToolbarConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sidebar height for the given number of brush slots
    pub fn sidebar_height(&self, brush_count: usize) -> f32 {
        self.base_height + self.slot_height * brush_count as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("width", self.width),
            ("base_height", self.base_height),
            ("slot_height", self.slot_height),
            ("icon_spacing", self.icon_spacing),
            ("corner_radius", self.corner_radius),
            ("color_picker.width", self.color_picker.width),
            ("color_picker.height", self.color_picker.height),
            ("color_picker.element_size", self.color_picker.element_size),
            ("thickness_picker.width", self.thickness_picker.width),
            ("thickness_picker.height", self.thickness_picker.height),
            ("thickness_picker.element_size", self.thickness_picker.element_size),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }

        let element_sizes = [
            ("color_picker.element_size", self.color_picker.element_size),
            ("thickness_picker.element_size", self.thickness_picker.element_size),
        ];
        for (field, value) in element_sizes {
            if value < MIN_ELEMENT_SIZE {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be at least {MIN_ELEMENT_SIZE}, got {value}"
                )));
            }
        }

        let columns = cell_count(self.thickness_picker.width, self.thickness_picker.element_size);
        let widest = u32::try_from(columns)
            .ok()
            .and_then(|columns| columns.checked_mul(self.thickness_picker.step));
        if widest.is_none() {
            return Err(ConfigError::Invalid(format!(
                "thickness_picker.step {} overflows across {columns} cells",
                self.thickness_picker.step
            )));
        }

        if !self.canvas_boundary_x.is_finite() {
            return Err(ConfigError::Invalid("canvas_boundary_x must be finite".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPickerLayout {
    pub width: f32,
    pub height: f32,
    pub element_size: f32,
    pub panel_color: Color,
    /// Scale the touched cell grows to before the picker closes
    pub selection_scale: f32,
    pub selection_millis: u64,
}

impl Default for ColorPickerLayout {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 200.0,
            element_size: 40.0,
            panel_color: Color::gray(0.278),
            selection_scale: 2.0,
            selection_millis: 200,
        }
    }
}

impl ColorPickerLayout {
    pub fn selection_duration(&self) -> Duration {
        Duration::from_millis(self.selection_millis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThicknessPickerLayout {
    pub width: f32,
    pub height: f32,
    pub element_size: f32,
    pub panel_color: Color,
    /// Thickness added per cell, left to right
    pub step: u32,
    pub selection_scale: f32,
    pub selection_millis: u64,
}

impl Default for ThicknessPickerLayout {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 60.0,
            element_size: 40.0,
            panel_color: Color::gray(0.92),
            step: 3,
            selection_scale: 1.5,
            selection_millis: 200,
        }
    }
}

impl ThicknessPickerLayout {
    pub fn selection_duration(&self) -> Duration {
        Duration::from_millis(self.selection_millis)
    }
}

/// Smallest cell edge a picker layout accepts
pub const MIN_ELEMENT_SIZE: f32 = 1.0;

/// Upper bound on cells along one picker axis
pub const MAX_CELLS_PER_AXIS: usize = 256;

/// Number of whole cells of `element_size` that fit in `extent`; zero when degenerate
pub(crate) fn cell_count(extent: f32, element_size: f32) -> usize {
    if element_size <= 0.0 || !element_size.is_finite() || !extent.is_finite() {
        return 0;
    }
    let cells = (extent / element_size).floor().clamp(0.0, MAX_CELLS_PER_AXIS as f32);
    cells as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout() {
        let config = ToolbarConfig::default();
        assert_eq!(config.sidebar_height(4), 550.0);
        assert_eq!(cell_count(config.color_picker.width, config.color_picker.element_size), 10);
        assert_eq!(cell_count(config.color_picker.height, config.color_picker.element_size), 5);
        assert_eq!(config.color_picker.selection_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ToolbarConfig::from_json_str(
            r#"{ "max_brushes": 3, "thickness_picker": { "step": 4 } }"#,
        )
        .unwrap();
        assert_eq!(config.max_brushes, 3);
        assert_eq!(config.thickness_picker.step, 4);
        assert_eq!(config.thickness_picker.width, 400.0);
        assert_eq!(config.width, 90.0);
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = ToolbarConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(ToolbarConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_negative_geometry() {
        let result = ToolbarConfig::from_json_str(r#"{ "width": -1.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = ToolbarConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_element_size_has_no_cells() {
        assert_eq!(cell_count(400.0, 0.0), 0);
        assert_eq!(cell_count(30.0, 40.0), 0);
    }

    #[test]
    fn test_tiny_element_size_is_capped() {
        assert_eq!(cell_count(400.0, 1e-30), MAX_CELLS_PER_AXIS);
        assert_eq!(cell_count(f32::MAX, 1.0), MAX_CELLS_PER_AXIS);
    }

    #[test]
    fn test_rejects_tiny_element_size() {
        let result = ToolbarConfig::from_json_str(r#"{ "color_picker": { "element_size": 1e-30 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result =
            ToolbarConfig::from_json_str(r#"{ "thickness_picker": { "element_size": 0.5 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_step_that_overflows_the_widest_cell() {
        let result = ToolbarConfig::from_json_str(r#"{ "thickness_picker": { "step": 2147483648 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let largest = u32::MAX / 10;
        let config =
            ToolbarConfig::from_json_str(&format!(r#"{{ "thickness_picker": {{ "step": {largest} }} }}"#))
                .unwrap();
        assert_eq!(config.thickness_picker.step, largest);
    }
}
