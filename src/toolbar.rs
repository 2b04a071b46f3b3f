use std::time::Duration;

use crate::brush::{Brush, BrushKind};
use crate::color::Color;
use crate::config::ToolbarConfig;
use crate::event::{EventBus, ToolbarEvent};
use crate::geometry::Point;
use crate::graphic::{Anchor, Graphic, GraphicId};
use crate::input::{Route, TouchEvent, TouchPhase, is_on_canvas, route_touch};
use crate::picker::{ColorPicker, GridCell, Picker, PickerKind, PickerValue, ThicknessPicker};
use crate::scene::{Continuation, Scene, TouchTarget};

/// Name tag of the toolbar's own graphics.
pub const CHROME_TAG: &str = "DrawingToolBar";

/// Distance from the sidebar's top edge to the first icon.
const FIRST_ICON_OFFSET: f32 = 60.0;

/// What the canvas does with touch-moved events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    /// Forward moves to the selected brush
    Drawing,
    /// A picker is open; moves are dropped
    Suspended,
}

#[derive(Debug)]
struct BrushSlot {
    brush: BrushKind,
    icon: GraphicId,
}

/// Sidebar of brush icons plus the color and thickness pickers.
///
/// Owns the scene it draws into. The host feeds touches through `handle_touch`
/// and calls `advance` once per frame to resume finished animations.
#[derive(Debug)]
pub struct DrawingToolBar<S: Scene> {
    scene: S,
    config: ToolbarConfig,
    slots: Vec<BrushSlot>,
    selected: usize,
    color_picker: ColorPicker,
    thickness_picker: ThicknessPicker,
    color_anchor: Point,
    thickness_anchor: Point,
    canvas: CanvasMode,
    height: f32,
    sidebar: GraphicId,
    events: EventBus,
}

impl<S: Scene> DrawingToolBar<S> {
    /// Build the toolbar with the default layout and place it in `scene`
    pub fn new(scene: S, brushes: Vec<BrushKind>) -> Self {
        Self::with_config(scene, brushes, ToolbarConfig::default())
    }

    pub fn with_config(mut scene: S, mut brushes: Vec<BrushKind>, config: ToolbarConfig) -> Self {
        if brushes.len() > config.max_brushes {
            log::warn!(
                "Toolbar holds at most {} brushes, ignoring {}",
                config.max_brushes,
                brushes.len() - config.max_brushes
            );
            brushes.truncate(config.max_brushes);
        }
        if brushes.is_empty() {
            log::info!("No brushes given, falling back to a pen");
            brushes.push(BrushKind::default());
        }

        let height = config.sidebar_height(brushes.len());
        let sidebar = Graphic::rectangle(config.width, height, config.corner_radius, config.background)
            .named(CHROME_TAG);
        let sidebar = scene.place(sidebar, config.position, Anchor::Center);

        let mut position = Point::new(
            config.position.x,
            config.position.y + height / 2.0 - FIRST_ICON_OFFSET,
        );

        let mut slots = Vec::with_capacity(brushes.len());
        for (index, mut brush) in brushes.into_iter().enumerate() {
            brush.set_canvas_boundary(config.canvas_boundary_x);

            let mut icon = brush.icon().named(CHROME_TAG);
            icon.image_tint = Some(if index == 0 {
                config.selected_tint
            } else {
                config.unselected_tint
            });
            let icon = scene.place(icon, position, Anchor::Center);
            if let Err(e) = scene.set_touch_target(icon, TouchTarget::BrushIcon(index)) {
                log::warn!("{} icon is not touchable: {e}", brush.name());
            }

            slots.push(BrushSlot { brush, icon });
            position.y -= config.icon_spacing;
        }

        let mut color_picker = ColorPicker::new(config.color_picker.clone());
        let color_anchor = position;
        color_picker.place_icon(&mut scene, color_anchor);

        position.y -= config.icon_spacing;
        let mut thickness_picker = ThicknessPicker::new(config.thickness_picker.clone());
        let thickness_anchor = position;
        thickness_picker.place_icon(&mut scene, thickness_anchor);

        log::info!(
            "Toolbar ready with {} brushes, {} selected",
            slots.len(),
            slots[0].brush.name()
        );

        Self {
            scene,
            config,
            slots,
            selected: 0,
            color_picker,
            thickness_picker,
            color_anchor,
            thickness_anchor,
            canvas: CanvasMode::Drawing,
            height,
            sidebar,
            events: EventBus::new(),
        }
    }

    /// Deliver a touch from the host event loop
    pub fn handle_touch(&mut self, touch: TouchEvent) {
        match touch.phase {
            TouchPhase::Began => self.touch_began(touch),
            TouchPhase::Moved => self.touch_moved(touch),
            TouchPhase::Ended | TouchPhase::Cancelled => self.touch_ended(touch),
        }
    }

    /// Route a new touch to the icon or cell under it, or treat it as an outside tap
    pub fn touch_began(&mut self, touch: TouchEvent) {
        let route = route_touch(&self.scene, touch.position);
        log::debug!("Touch at {:?} routed to {route:?}", touch.position);

        match route {
            Route::Target(TouchTarget::BrushIcon(index)) => self.select_brush(index),
            Route::Target(TouchTarget::PickerIcon(kind)) => self.open_picker(kind),
            Route::Target(TouchTarget::PickerCell { picker, cell }) => self.select_cell(picker, cell),
            Route::Outside => self.dismiss_pickers(),
        }
    }

    /// Forward a drag to the selected brush when the canvas accepts it
    pub fn touch_moved(&mut self, touch: TouchEvent) {
        if !is_on_canvas(touch.position, self.config.canvas_boundary_x) {
            return;
        }
        if self.canvas == CanvasMode::Suspended {
            return;
        }
        let slot = &mut self.slots[self.selected];
        slot.brush.handle_touch(&touch, &mut self.scene);
    }

    pub fn touch_ended(&mut self, _touch: TouchEvent) {
        self.slots[self.selected].brush.reset_stroke();
    }

    /// Advance the scene clock and resume any animations that finished
    pub fn advance(&mut self, elapsed: Duration) {
        for continuation in self.scene.advance(elapsed) {
            self.resume(continuation);
        }
    }

    pub fn select_brush(&mut self, index: usize) {
        let Some(slot) = self.slots.get(index) else {
            log::warn!("No brush in slot {index}");
            return;
        };
        if let Err(e) = self.scene.pulse(slot.icon) {
            log::warn!("Could not pulse brush icon: {e}");
        }

        let previous = self.selected;
        let (unselected, selected) = (self.config.unselected_tint, self.config.selected_tint);
        self.tint_icon(self.slots[previous].icon, unselected);
        self.tint_icon(self.slots[index].icon, selected);

        self.selected = index;
        let brush = &mut self.slots[index].brush;
        brush.reset_stroke();

        log::info!("Selected brush {}", brush.name());
        self.events.emit(ToolbarEvent::BrushSelected {
            previous,
            current: index,
            brush: brush.name(),
        });
    }

    /// Open a picker over the canvas and stop drawing until it closes
    pub fn open_picker(&mut self, kind: PickerKind) {
        let icon = match kind {
            PickerKind::Color => self.color_picker.icon(),
            PickerKind::Thickness => self.thickness_picker.icon_bar(),
        };
        if let Some(icon) = icon {
            if let Err(e) = self.scene.pulse(icon) {
                log::warn!("Could not pulse picker icon: {e}");
            }
        }

        // Only one picker's grid may be on screen.
        self.close_pickers();
        self.disable_drawing();

        match kind {
            PickerKind::Color => self.color_picker.draw(&mut self.scene, self.color_anchor),
            PickerKind::Thickness => {
                self.thickness_picker.draw(&mut self.scene, self.thickness_anchor)
            }
        }
        log::info!("Opened {kind:?} picker");
        self.events.emit(ToolbarEvent::PickerOpened(kind));
    }

    /// Cancel any open picker and resume drawing
    pub fn dismiss_pickers(&mut self) {
        self.close_pickers();
        self.enable_drawing();
    }

    pub fn apply_color(&mut self, color: Color) {
        for slot in &mut self.slots {
            slot.brush.set_color(color);
        }
        self.color_picker.reflect_value(&mut self.scene, color);

        log::info!("Applied color {color:?} to {} brushes", self.slots.len());
        self.events.emit(ToolbarEvent::ColorApplied(color));
        self.enable_drawing();
    }

    pub fn apply_thickness(&mut self, thickness: u32) {
        for slot in &mut self.slots {
            slot.brush.set_thickness(thickness);
        }
        self.thickness_picker.reflect_value(&mut self.scene, thickness);

        log::info!("Applied thickness {thickness} to {} brushes", self.slots.len());
        self.events.emit(ToolbarEvent::ThicknessApplied(thickness));
        self.enable_drawing();
    }

    fn select_cell(&mut self, picker: PickerKind, cell: GridCell) {
        let started = match picker {
            PickerKind::Color => self.color_picker.select_cell(&mut self.scene, cell),
            PickerKind::Thickness => self.thickness_picker.select_cell(&mut self.scene, cell),
        };
        if started {
            log::debug!("Selecting {picker:?} cell {cell:?}");
        }
    }

    fn resume(&mut self, continuation: Continuation) {
        let Continuation::Selection {
            picker,
            session,
            value,
        } = continuation;

        // The value is applied before the picker is dismissed.
        match value {
            PickerValue::Color(color)
                if picker == PickerKind::Color && self.color_picker.accepts(session) =>
            {
                self.apply_color(color);
                self.color_picker.dismiss(&mut self.scene);
            }
            PickerValue::Thickness(thickness)
                if picker == PickerKind::Thickness && self.thickness_picker.accepts(session) =>
            {
                self.apply_thickness(thickness);
                self.thickness_picker.dismiss(&mut self.scene);
            }
            _ => {
                log::debug!("Discarding stale {picker:?} selection from session {session}");
                self.events.emit(ToolbarEvent::SelectionDiscarded(picker));
            }
        }
    }

    fn close_pickers(&mut self) {
        if self.thickness_picker.dismiss(&mut self.scene) {
            self.events.emit(ToolbarEvent::PickerDismissed(PickerKind::Thickness));
        }
        if self.color_picker.dismiss(&mut self.scene) {
            self.events.emit(ToolbarEvent::PickerDismissed(PickerKind::Color));
        }
    }

    fn enable_drawing(&mut self) {
        if self.canvas != CanvasMode::Drawing {
            self.canvas = CanvasMode::Drawing;
            self.events.emit(ToolbarEvent::DrawingEnabled);
        }
    }

    fn disable_drawing(&mut self) {
        if self.canvas != CanvasMode::Suspended {
            self.canvas = CanvasMode::Suspended;
            self.events.emit(ToolbarEvent::DrawingDisabled);
        }
    }

    fn tint_icon(&mut self, icon: GraphicId, tint: Color) {
        match self.scene.graphic_mut(icon) {
            Some(graphic) => graphic.image_tint = Some(tint),
            None => log::warn!("Brush icon {icon} is missing from the scene"),
        }
    }

    pub fn brushes(&self) -> impl Iterator<Item = &BrushKind> + '_ {
        self.slots.iter().map(|slot| &slot.brush)
    }

    pub fn brush(&self, index: usize) -> Option<&BrushKind> {
        self.slots.get(index).map(|slot| &slot.brush)
    }

    pub fn brush_icon(&self, index: usize) -> Option<GraphicId> {
        self.slots.get(index).map(|slot| slot.icon)
    }

    pub fn brush_count(&self) -> usize {
        self.slots.len()
    }

    pub fn selected_brush(&self) -> &BrushKind {
        &self.slots[self.selected].brush
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn canvas_mode(&self) -> CanvasMode {
        self.canvas
    }

    pub fn is_drawing_enabled(&self) -> bool {
        self.canvas == CanvasMode::Drawing
    }

    pub fn color_picker(&self) -> &ColorPicker {
        &self.color_picker
    }

    pub fn thickness_picker(&self) -> &ThicknessPicker {
        &self.thickness_picker
    }

    /// Where each picker's panel is anchored when it opens
    pub fn picker_anchor(&self, kind: PickerKind) -> Point {
        match kind {
            PickerKind::Color => self.color_anchor,
            PickerKind::Thickness => self.thickness_anchor,
        }
    }

    pub fn sidebar(&self) -> GraphicId {
        self.sidebar
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{Eraser, Lines, Pen};
    use crate::scene::RecordingScene;

    fn toolbar(brushes: Vec<BrushKind>) -> DrawingToolBar<RecordingScene> {
        DrawingToolBar::new(RecordingScene::new(), brushes)
    }

    #[test]
    fn test_layout_follows_brush_count() {
        let toolbar = toolbar(vec![Pen::new().into(), Lines::new().into(), Eraser::new().into()]);
        assert_eq!(toolbar.height(), 250.0 + 3.0 * 75.0);
        assert_eq!(toolbar.width(), 90.0);

        let first = toolbar.scene().graphic(toolbar.brush_icon(0).unwrap()).unwrap();
        assert_eq!(first.position, Point::new(-460.0, toolbar.height() / 2.0 - 60.0));
        let third = toolbar.scene().graphic(toolbar.brush_icon(2).unwrap()).unwrap();
        assert_eq!(third.position.y, first.position.y - 170.0);
        assert_eq!(
            toolbar.picker_anchor(PickerKind::Color).y,
            first.position.y - 3.0 * 85.0
        );
        assert_eq!(
            toolbar.picker_anchor(PickerKind::Thickness).y,
            first.position.y - 4.0 * 85.0
        );
    }

    #[test]
    fn test_first_icon_starts_selected() {
        let toolbar = toolbar(vec![Pen::new().into(), Eraser::new().into()]);
        let tint = |index| {
            toolbar
                .scene()
                .graphic(toolbar.brush_icon(index).unwrap())
                .unwrap()
                .image_tint
        };
        assert_eq!(tint(0), Some(Color::SYSTEM_PURPLE));
        assert_eq!(tint(1), Some(Color::BLACK));
    }

    #[test]
    fn test_select_brush_out_of_range_is_ignored() {
        let mut toolbar = toolbar(vec![Pen::new().into()]);
        toolbar.select_brush(4);
        assert_eq!(toolbar.selected_index(), 0);
    }

    #[test]
    fn test_open_picker_switches_between_pickers() {
        let mut toolbar = toolbar(vec![Pen::new().into()]);
        toolbar.open_picker(PickerKind::Color);
        toolbar.open_picker(PickerKind::Thickness);

        assert!(!toolbar.color_picker().is_open());
        assert!(toolbar.thickness_picker().is_open());
        assert_eq!(toolbar.scene().graphics_named("colorPicker").count(), 0);
        assert!(!toolbar.is_drawing_enabled());
    }
}
