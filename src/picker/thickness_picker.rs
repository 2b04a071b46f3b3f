use crate::color::Color;
use crate::config::{ThicknessPickerLayout, cell_count};
use crate::geometry::Point;
use crate::graphic::{Anchor, Animation, Graphic, GraphicId};
use crate::scene::{Continuation, Scene, TouchTarget};
use crate::toolbar::CHROME_TAG;

use super::{GridCell, Picker, PickerKind, PickerSession, PickerState, PickerValue};

const ICON_LENGTH: f32 = 40.0;
const ICON_THICKNESS: f32 = 15.0;
/// Radius of the invisible circle that takes touches for a bar
const TOUCH_RADIUS: f32 = 20.0;
const PANEL_WIDTH_PADDING: f32 = 20.0;
const PANEL_HEIGHT_PADDING: f32 = 10.0;
const PANEL_CORNER_RADIUS: f32 = 20.0;
const FIRST_COLUMN_INSET: f32 = 25.0;
const VERTICAL: f32 = 90.0;

/// A single row of stroke-width samples
#[derive(Debug, Default)]
pub struct ThicknessPicker {
    layout: ThicknessPickerLayout,
    session: PickerSession,
    icon: Option<GraphicId>,
    icon_bar: Option<GraphicId>,
}

impl ThicknessPicker {
    pub fn new(layout: ThicknessPickerLayout) -> Self {
        Self {
            layout,
            session: PickerSession::default(),
            icon: None,
            icon_bar: None,
        }
    }

    pub fn columns(&self) -> usize {
        cell_count(self.layout.width, self.layout.element_size)
    }

    /// Touch surface of the toolbar icon
    pub fn icon(&self) -> Option<GraphicId> {
        self.icon
    }

    /// The bar drawn on the toolbar icon
    pub fn icon_bar(&self) -> Option<GraphicId> {
        self.icon_bar
    }

    pub fn session(&self) -> u64 {
        self.session.id()
    }

    pub fn visible_cells(&self) -> usize {
        self.session.cell_count()
    }
}

impl Picker for ThicknessPicker {
    type Value = u32;

    fn kind(&self) -> PickerKind {
        PickerKind::Thickness
    }

    fn state(&self) -> PickerState {
        self.session.state()
    }

    fn place_icon(&mut self, scene: &mut dyn Scene, at: Point) -> GraphicId {
        let bar = Graphic::bar(ICON_LENGTH, ICON_THICKNESS, Color::BLACK)
            .rotated(VERTICAL)
            .named(CHROME_TAG);
        self.icon_bar = Some(scene.place(bar, at, Anchor::Center));

        let overlay = Graphic::circle(TOUCH_RADIUS, Color::CLEAR).named(CHROME_TAG);
        let id = scene.place(overlay, at, Anchor::Center);
        if let Err(e) = scene.set_touch_target(id, TouchTarget::PickerIcon(PickerKind::Thickness)) {
            log::warn!("Thickness picker icon is not touchable: {e}");
        }
        self.icon = Some(id);
        id
    }

    fn draw(&mut self, scene: &mut dyn Scene, at: Point) {
        let tag = self.kind().tag();
        let layout = &self.layout;
        self.session.open();

        let panel = Graphic::rectangle(
            layout.width + PANEL_WIDTH_PADDING,
            layout.height + PANEL_HEIGHT_PADDING,
            PANEL_CORNER_RADIUS,
            layout.panel_color,
        )
        .named(tag);
        scene.place(panel, at, Anchor::Left);

        let columns = self.columns();
        if columns == 0 {
            log::debug!("Thickness picker has no room for cells");
            return;
        }

        let column_distance = layout.width / columns as f32;
        let mut position = Point::new(at.x + FIRST_COLUMN_INSET, at.y);

        for column in 1..=columns {
            let cell = GridCell::new(1, column);
            let thickness = self.cell_value(cell).unwrap_or_default();

            let bar = Graphic::bar(layout.element_size, thickness as f32, Color::BLACK)
                .rotated(VERTICAL)
                .named(tag);
            let bar = scene.place(bar, position, Anchor::Center);

            let overlay = Graphic::circle(layout.element_size / 2.0, Color::CLEAR).named(tag);
            let overlay = scene.place(overlay, position, Anchor::Center);
            let target = TouchTarget::PickerCell {
                picker: PickerKind::Thickness,
                cell,
            };
            if let Err(e) = scene.set_touch_target(overlay, target) {
                log::warn!("Thickness cell {cell:?} is not touchable: {e}");
            }

            self.session.add_cell(cell, bar);
            position.x += column_distance;
        }
    }

    fn dismiss(&mut self, scene: &mut dyn Scene) -> bool {
        scene.remove_graphics_named(self.kind().tag());
        self.session.close()
    }

    fn cell_value(&self, cell: GridCell) -> Option<u32> {
        if cell.row != 1 || !(1..=self.columns()).contains(&cell.column) {
            return None;
        }
        u32::try_from(cell.column)
            .ok()
            .and_then(|column| column.checked_mul(self.layout.step))
    }

    fn select_cell(&mut self, scene: &mut dyn Scene, cell: GridCell) -> bool {
        let Some(value) = self.cell_value(cell) else {
            return false;
        };
        let Some(bar) = self.session.begin_selection(cell) else {
            log::debug!("Ignoring thickness cell {cell:?} in state {:?}", self.state());
            return false;
        };

        let animation = Animation::ScaleTo {
            scale: self.layout.selection_scale,
            duration: self.layout.selection_duration(),
        };
        let then = Continuation::Selection {
            picker: PickerKind::Thickness,
            session: self.session.id(),
            value: PickerValue::Thickness(value),
        };
        if let Err(e) = scene.run(bar, animation, then) {
            log::warn!("Could not animate thickness cell {cell:?}: {e}");
            self.session.abort_selection();
            return false;
        }
        true
    }

    fn accepts(&self, session: u64) -> bool {
        self.session.accepts(session)
    }

    fn reflect_value(&self, scene: &mut dyn Scene, value: u32) {
        if let Some(bar) = self.icon_bar.and_then(|id| scene.graphic_mut(id)) {
            bar.set_height(value as f32);
        }
    }
}
