use crate::color::Color;
use crate::config::{ColorPickerLayout, cell_count};
use crate::geometry::Point;
use crate::graphic::{Anchor, Animation, Graphic, GraphicId};
use crate::scene::{Continuation, Scene, TouchTarget};
use crate::toolbar::CHROME_TAG;

use super::{GridCell, Picker, PickerKind, PickerSession, PickerState, PickerValue};

const ICON_RADIUS: f32 = 25.0;
const ICON_STROKE_WIDTH: f32 = 6.0;
const PANEL_PADDING: f32 = 20.0;
const PANEL_CORNER_RADIUS: f32 = 20.0;
/// Horizontal inset of the first column from the panel's left edge
const FIRST_COLUMN_INSET: f32 = 27.0;
/// The first row sits this fraction of the panel height above the anchor
const FIRST_ROW_DIVISOR: f32 = 1.65;
const SELECTED_Z_POSITION: f32 = 10.0;

/// Hue/saturation grid with a grayscale column on the right
#[derive(Debug, Default)]
pub struct ColorPicker {
    layout: ColorPickerLayout,
    session: PickerSession,
    icon: Option<GraphicId>,
}

impl ColorPicker {
    pub fn new(layout: ColorPickerLayout) -> Self {
        Self {
            layout,
            session: PickerSession::default(),
            icon: None,
        }
    }

    pub fn rows(&self) -> usize {
        cell_count(self.layout.height, self.layout.element_size)
    }

    pub fn columns(&self) -> usize {
        cell_count(self.layout.width, self.layout.element_size)
    }

    pub fn icon(&self) -> Option<GraphicId> {
        self.icon
    }

    pub fn session(&self) -> u64 {
        self.session.id()
    }

    /// Number of selectable cells currently on screen
    pub fn visible_cells(&self) -> usize {
        self.session.cell_count()
    }

    fn reset_icon_stroke(&self, scene: &mut dyn Scene) {
        if let Some(icon) = self.icon.and_then(|id| scene.graphic_mut(id)) {
            icon.stroke_color = Some(Color::BLACK);
            icon.stroke_width = ICON_STROKE_WIDTH;
        }
    }
}

impl Picker for ColorPicker {
    type Value = Color;

    fn kind(&self) -> PickerKind {
        PickerKind::Color
    }

    fn state(&self) -> PickerState {
        self.session.state()
    }

    fn place_icon(&mut self, scene: &mut dyn Scene, at: Point) -> GraphicId {
        let icon = Graphic::circle(ICON_RADIUS, Color::DEFAULT_DRAWING)
            .stroked(Color::BLACK, ICON_STROKE_WIDTH)
            .named(CHROME_TAG);
        let id = scene.place(icon, at, Anchor::Center);
        if let Err(e) = scene.set_touch_target(id, TouchTarget::PickerIcon(PickerKind::Color)) {
            log::warn!("Color picker icon is not touchable: {e}");
        }
        self.icon = Some(id);
        id
    }

    fn draw(&mut self, scene: &mut dyn Scene, at: Point) {
        let tag = self.kind().tag();
        let layout = &self.layout;
        self.session.open();

        let panel = Graphic::rectangle(
            layout.width + PANEL_PADDING,
            layout.height + PANEL_PADDING,
            PANEL_CORNER_RADIUS,
            layout.panel_color,
        )
        .named(tag);
        scene.place(panel, at, Anchor::Left);

        let rows = self.rows();
        let columns = self.columns();
        if rows == 0 || columns == 0 {
            log::debug!("Color picker has no room for cells");
            return;
        }

        let column_distance = layout.width / columns as f32;
        let row_distance = layout.height / rows as f32;
        let mut position = Point::new(at.x, at.y + layout.height / FIRST_ROW_DIVISOR);

        for row in 1..=rows {
            position.x = at.x + FIRST_COLUMN_INSET;
            position.y -= row_distance;

            for column in 1..=columns {
                let cell = GridCell::new(row, column);
                let color = self.cell_value(cell).unwrap_or_default();
                let square =
                    Graphic::rectangle(layout.element_size, layout.element_size, 0.0, color).named(tag);
                let id = scene.place(square, position, Anchor::Center);
                let target = TouchTarget::PickerCell {
                    picker: PickerKind::Color,
                    cell,
                };
                if let Err(e) = scene.set_touch_target(id, target) {
                    log::warn!("Color cell {cell:?} is not touchable: {e}");
                }
                self.session.add_cell(cell, id);
                position.x += column_distance;
            }
        }
    }

    fn dismiss(&mut self, scene: &mut dyn Scene) -> bool {
        self.reset_icon_stroke(scene);
        scene.remove_graphics_named(self.kind().tag());
        self.session.close()
    }

    fn cell_value(&self, cell: GridCell) -> Option<Color> {
        let rows = self.rows();
        let columns = self.columns();
        if !(1..=rows).contains(&cell.row) || !(1..=columns).contains(&cell.column) {
            return None;
        }

        let saturation = cell.row as f32 / rows as f32;
        if cell.column == columns {
            Some(Color::gray(saturation))
        } else {
            let hue = cell.column as f32 / columns as f32;
            Some(Color::hsb(hue, saturation, 1.0))
        }
    }

    fn select_cell(&mut self, scene: &mut dyn Scene, cell: GridCell) -> bool {
        let Some(value) = self.cell_value(cell) else {
            return false;
        };
        let Some(square) = self.session.begin_selection(cell) else {
            log::debug!("Ignoring color cell {cell:?} in state {:?}", self.state());
            return false;
        };

        if let Some(graphic) = scene.graphic_mut(square) {
            graphic.z_position = SELECTED_Z_POSITION;
        }
        let animation = Animation::ScaleTo {
            scale: self.layout.selection_scale,
            duration: self.layout.selection_duration(),
        };
        let then = Continuation::Selection {
            picker: PickerKind::Color,
            session: self.session.id(),
            value: PickerValue::Color(value),
        };
        if let Err(e) = scene.run(square, animation, then) {
            log::warn!("Could not animate color cell {cell:?}: {e}");
            self.session.abort_selection();
            return false;
        }
        true
    }

    fn accepts(&self, session: u64) -> bool {
        self.session.accepts(session)
    }

    fn reflect_value(&self, scene: &mut dyn Scene, value: Color) {
        if let Some(icon) = self.icon.and_then(|id| scene.graphic_mut(id)) {
            icon.background_color = Some(value);
        }
    }
}
