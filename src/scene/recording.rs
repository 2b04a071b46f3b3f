use std::collections::HashMap;
use std::time::Duration;

use crate::error::{SceneError, SceneResult};
use crate::geometry::{Point, Size};
use crate::graphic::{Anchor, Animation, Graphic, GraphicId};

use super::{Continuation, Scene, TouchTarget};

#[derive(Debug, Clone)]
struct Entry {
    id: GraphicId,
    graphic: Graphic,
    target: Option<TouchTarget>,
}

#[derive(Debug, Clone)]
struct PendingAnimation {
    due: Duration,
    graphic: GraphicId,
    animation: Animation,
    then: Continuation,
}

/// In-memory scene with a virtual clock.
///
/// Graphics are kept in placement order. Hit testing prefers the highest
/// `z_position`, and among equal ones the most recently placed graphic.
#[derive(Debug, Default)]
pub struct RecordingScene {
    entries: Vec<Entry>,
    pending: Vec<PendingAnimation>,
    clock: Duration,
    pulses: HashMap<GraphicId, usize>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: GraphicId) -> bool {
        self.position_of(id).is_some()
    }

    /// Placed graphics in placement order
    pub fn graphics(&self) -> impl Iterator<Item = (GraphicId, &Graphic)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.graphic))
    }

    pub fn graphics_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (GraphicId, &'a Graphic)> + 'a {
        self.graphics().filter(move |(_, graphic)| graphic.has_name(name))
    }

    pub fn touch_target(&self, id: GraphicId) -> Option<TouchTarget> {
        self.position_of(id).and_then(|index| self.entries[index].target)
    }

    /// The graphic carrying `target`, if one is placed
    pub fn find_target(&self, target: TouchTarget) -> Option<GraphicId> {
        self.entries
            .iter()
            .find(|entry| entry.target == Some(target))
            .map(|entry| entry.id)
    }

    pub fn pulse_count(&self, id: GraphicId) -> usize {
        self.pulses.get(&id).copied().unwrap_or(0)
    }

    pub fn pending_animations(&self) -> usize {
        self.pending.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    fn position_of(&self, id: GraphicId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

impl Scene for RecordingScene {
    fn place(&mut self, mut graphic: Graphic, at: Point, anchor: Anchor) -> GraphicId {
        graphic.position = at;
        graphic.anchor = anchor;
        let id = GraphicId::new();
        self.entries.push(Entry {
            id,
            graphic,
            target: None,
        });
        id
    }

    fn remove_graphics_named(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.graphic.has_name(name));
        before - self.entries.len()
    }

    fn remove(&mut self, ids: &[GraphicId]) {
        self.entries.retain(|entry| !ids.contains(&entry.id));
    }

    fn graphics_in(&self, center: Point, size: Size) -> Vec<GraphicId> {
        let region = size.rect_centered_at(center);
        self.entries
            .iter()
            .filter(|entry| entry.graphic.bounds().intersects(region))
            .map(|entry| entry.id)
            .collect()
    }

    fn graphic(&self, id: GraphicId) -> Option<&Graphic> {
        self.position_of(id).map(|index| &self.entries[index].graphic)
    }

    fn graphic_mut(&mut self, id: GraphicId) -> Option<&mut Graphic> {
        self.position_of(id).map(|index| &mut self.entries[index].graphic)
    }

    fn set_touch_target(&mut self, id: GraphicId, target: TouchTarget) -> SceneResult<()> {
        let index = self.position_of(id).ok_or(SceneError::GraphicNotFound(id))?;
        self.entries[index].target = Some(target);
        Ok(())
    }

    fn target_at(&self, point: Point) -> Option<TouchTarget> {
        let mut best: Option<(&Entry, TouchTarget)> = None;
        for entry in &self.entries {
            let Some(target) = entry.target else { continue };
            if !entry.graphic.contains(point) {
                continue;
            }
            match best {
                Some((top, _)) if top.graphic.z_position > entry.graphic.z_position => {}
                _ => best = Some((entry, target)),
            }
        }
        best.map(|(_, target)| target)
    }

    fn pulse(&mut self, id: GraphicId) -> SceneResult<()> {
        if !self.contains(id) {
            return Err(SceneError::GraphicNotFound(id));
        }
        *self.pulses.entry(id).or_insert(0) += 1;
        Ok(())
    }

    fn run(&mut self, id: GraphicId, animation: Animation, then: Continuation) -> SceneResult<()> {
        if !self.contains(id) {
            return Err(SceneError::GraphicNotFound(id));
        }
        self.pending.push(PendingAnimation {
            due: self.clock + animation.duration(),
            graphic: id,
            animation,
            then,
        });
        Ok(())
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<Continuation> {
        self.clock += elapsed;
        let now = self.clock;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|pending| pending.due <= now);
        self.pending = waiting;
        // Stable sort keeps scheduling order for animations finishing together.
        due.sort_by_key(|pending| pending.due);

        due.into_iter()
            .map(|pending| {
                if let Some(graphic) = self.graphic_mut(pending.graphic) {
                    match pending.animation {
                        Animation::ScaleTo { scale, .. } => graphic.scale = scale,
                    }
                }
                pending.then
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::picker::{PickerKind, PickerValue};

    fn selection(session: u64) -> Continuation {
        Continuation::Selection {
            picker: PickerKind::Thickness,
            session,
            value: PickerValue::Thickness(3),
        }
    }

    #[test]
    fn test_remove_named_only_touches_tagged_graphics() {
        let mut scene = RecordingScene::new();
        scene.place(Graphic::circle(4.0, Color::BLACK).named("grid"), Point::ZERO, Anchor::Center);
        scene.place(Graphic::circle(4.0, Color::BLACK).named("grid"), Point::ZERO, Anchor::Center);
        let kept = scene.place(Graphic::circle(4.0, Color::BLACK), Point::ZERO, Anchor::Center);

        assert_eq!(scene.remove_graphics_named("grid"), 2);
        assert_eq!(scene.remove_graphics_named("grid"), 0);
        assert!(scene.contains(kept));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_target_at_prefers_higher_z_then_latest() {
        let mut scene = RecordingScene::new();
        let low = scene.place(Graphic::circle(10.0, Color::BLACK), Point::ZERO, Anchor::Center);
        let high = scene.place(Graphic::circle(10.0, Color::BLACK), Point::ZERO, Anchor::Center);
        scene.set_touch_target(low, TouchTarget::BrushIcon(0)).unwrap();
        scene.set_touch_target(high, TouchTarget::BrushIcon(1)).unwrap();
        assert_eq!(scene.touch_target(low), Some(TouchTarget::BrushIcon(0)));
        assert_eq!(scene.target_at(Point::ZERO), Some(TouchTarget::BrushIcon(1)));

        scene.graphic_mut(low).unwrap().z_position = 10.0;
        assert_eq!(scene.target_at(Point::ZERO), Some(TouchTarget::BrushIcon(0)));
        assert_eq!(scene.target_at(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_unknown_graphic_is_an_error() {
        let mut scene = RecordingScene::new();
        let missing = GraphicId::new();
        assert_eq!(scene.pulse(missing), Err(SceneError::GraphicNotFound(missing)));
        assert!(scene.set_touch_target(missing, TouchTarget::BrushIcon(0)).is_err());
    }

    #[test]
    fn test_animation_completes_after_duration() {
        let mut scene = RecordingScene::new();
        let id = scene.place(Graphic::circle(4.0, Color::BLACK), Point::ZERO, Anchor::Center);
        let animation = Animation::ScaleTo {
            scale: 2.0,
            duration: Duration::from_millis(200),
        };
        scene.run(id, animation, selection(1)).unwrap();

        assert!(scene.advance(Duration::from_millis(100)).is_empty());
        assert_eq!(scene.advance(Duration::from_millis(100)), vec![selection(1)]);
        assert_eq!(scene.graphic(id).unwrap().scale, 2.0);
        assert_eq!(scene.pending_animations(), 0);
        assert_eq!(scene.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn test_continuation_survives_removed_graphic() {
        let mut scene = RecordingScene::new();
        let id = scene.place(Graphic::circle(4.0, Color::BLACK), Point::ZERO, Anchor::Center);
        let animation = Animation::ScaleTo {
            scale: 2.0,
            duration: Duration::from_millis(200),
        };
        scene.run(id, animation, selection(7)).unwrap();
        scene.remove(&[id]);

        assert_eq!(scene.advance(Duration::from_secs(1)), vec![selection(7)]);
    }
}
