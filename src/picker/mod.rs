use crate::color::Color;
use crate::geometry::Point;
use crate::graphic::GraphicId;
use crate::scene::Scene;

mod color_picker;
mod thickness_picker;

pub use color_picker::ColorPicker;
pub use thickness_picker::ThicknessPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerKind {
    Color,
    Thickness,
}

impl PickerKind {
    /// Name tag shared by every grid graphic of this picker
    pub fn tag(self) -> &'static str {
        match self {
            Self::Color => "colorPicker",
            Self::Thickness => "ThicknessPicker",
        }
    }
}

/// A grid cell, indexed from 1 in both directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

impl GridCell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Value carried from a finished selection back to the toolbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerValue {
    Color(Color),
    Thickness(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
    /// A cell was touched and its animation is still running
    Selecting { cell: GridCell },
}

/// A modal grid that opens over the canvas and reports one value.
///
/// The toolbar applies the value when the selection animation's continuation
/// comes back, and only then dismisses the picker.
pub trait Picker {
    type Value;

    fn kind(&self) -> PickerKind;

    fn state(&self) -> PickerState;

    fn is_open(&self) -> bool {
        self.state() != PickerState::Closed
    }

    /// Place the toolbar icon that opens this picker
    fn place_icon(&mut self, scene: &mut dyn Scene, at: Point) -> GraphicId;

    /// Render the panel and its cells at `at`, anchored on the panel's left edge
    fn draw(&mut self, scene: &mut dyn Scene, at: Point);

    /// Remove the picker's graphics. Returns whether the picker was open.
    fn dismiss(&mut self, scene: &mut dyn Scene) -> bool;

    /// The value a cell stands for, if the cell is on the grid
    fn cell_value(&self, cell: GridCell) -> Option<Self::Value>;

    /// Start selecting `cell`. Ignored unless the picker is open and idle.
    fn select_cell(&mut self, scene: &mut dyn Scene, cell: GridCell) -> bool;

    /// Whether a selection continuation for `session` is still current
    fn accepts(&self, session: u64) -> bool;

    /// Show an applied value on the toolbar icon
    fn reflect_value(&self, scene: &mut dyn Scene, value: Self::Value);
}

/// Open/close bookkeeping shared by both pickers
#[derive(Debug, Default)]
pub(crate) struct PickerSession {
    state: PickerState,
    id: u64,
    cells: Vec<(GridCell, GraphicId)>,
}

impl PickerSession {
    pub(crate) fn state(&self) -> PickerState {
        self.state
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn open(&mut self) {
        self.id += 1;
        self.state = PickerState::Open;
        self.cells.clear();
    }

    pub(crate) fn add_cell(&mut self, cell: GridCell, animated: GraphicId) {
        self.cells.push((cell, animated));
    }

    /// Move to `Selecting` and return the graphic to animate
    pub(crate) fn begin_selection(&mut self, cell: GridCell) -> Option<GraphicId> {
        if self.state != PickerState::Open {
            return None;
        }
        let (_, graphic) = self.cells.iter().find(|(known, _)| *known == cell)?;
        self.state = PickerState::Selecting { cell };
        Some(*graphic)
    }

    /// Undo `begin_selection` when the animation could not be started
    pub(crate) fn abort_selection(&mut self) {
        if matches!(self.state, PickerState::Selecting { .. }) {
            self.state = PickerState::Open;
        }
    }

    pub(crate) fn accepts(&self, session: u64) -> bool {
        matches!(self.state, PickerState::Selecting { .. }) && self.id == session
    }

    /// Returns whether the session was open
    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.state != PickerState::Closed;
        self.state = PickerState::Closed;
        self.cells.clear();
        was_open
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
