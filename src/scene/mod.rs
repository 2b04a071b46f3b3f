use std::time::Duration;

use crate::error::SceneResult;
use crate::geometry::{Point, Size};
use crate::graphic::{Anchor, Animation, Graphic, GraphicId};
use crate::picker::{GridCell, PickerKind, PickerValue};

mod recording;

pub use recording::RecordingScene;

/// What a touch on a placed graphic means to the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    /// Brush icon at this slot of the toolbar
    BrushIcon(usize),
    PickerIcon(PickerKind),
    PickerCell { picker: PickerKind, cell: GridCell },
}

/// Work to resume once an animation finishes.
///
/// Continuations carry every value they need, so they stay valid even when the
/// animated graphic is removed before they run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Continuation {
    Selection {
        picker: PickerKind,
        session: u64,
        value: PickerValue,
    },
}

/// Owns placed graphics, answers region and hit-test queries, and runs animations.
pub trait Scene {
    /// Place a graphic and return the handle it is known by from now on
    fn place(&mut self, graphic: Graphic, at: Point, anchor: Anchor) -> GraphicId;

    /// Remove every graphic tagged with `name`, returning how many were removed
    fn remove_graphics_named(&mut self, name: &str) -> usize;

    /// Remove the given graphics; unknown ids are skipped
    fn remove(&mut self, ids: &[GraphicId]);

    /// All graphics whose bounds intersect the region of `size` centered on `center`
    fn graphics_in(&self, center: Point, size: Size) -> Vec<GraphicId>;

    fn graphic(&self, id: GraphicId) -> Option<&Graphic>;

    fn graphic_mut(&mut self, id: GraphicId) -> Option<&mut Graphic>;

    /// Make touches on `id` resolve to `target`
    fn set_touch_target(&mut self, id: GraphicId, target: TouchTarget) -> SceneResult<()>;

    /// The target of the topmost touchable graphic under `point`
    fn target_at(&self, point: Point) -> Option<TouchTarget>;

    /// Brief visual feedback on a graphic
    fn pulse(&mut self, id: GraphicId) -> SceneResult<()>;

    /// Run `animation` on `id` and hand back `then` once it has finished
    fn run(&mut self, id: GraphicId, animation: Animation, then: Continuation) -> SceneResult<()>;

    /// Move the scene clock forward, returning continuations that became due in order
    fn advance(&mut self, elapsed: Duration) -> Vec<Continuation>;
}
