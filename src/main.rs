use std::time::Duration;

use drawing_toolbar::{
    Brush, BrushKind, DrawingToolBar, Eraser, EventLog, GridCell, Lines, Pen, PickerKind,
    RecordingScene, Scene, SprayPaint, ToolbarConfig, TouchEvent, TouchTarget,
};

const FRAME: Duration = Duration::from_millis(16);

/// Plays a short scripted session against the in-memory scene. An optional JSON
/// file argument overrides the toolbar layout.
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ToolbarConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("Using default layout, could not load {path}: {e}");
            ToolbarConfig::default()
        }),
        None => ToolbarConfig::default(),
    };

    let brushes: Vec<BrushKind> = vec![
        Pen::new().into(),
        Lines::new().into(),
        Eraser::new().into(),
        SprayPaint::new().into(),
    ];
    let mut toolbar = DrawingToolBar::with_config(RecordingScene::new(), brushes, config);
    let log = EventLog::new();
    toolbar.events().subscribe(log.handle());

    // A short pen stroke across the canvas.
    for step in 0..10 {
        toolbar.handle_touch(TouchEvent::moved(-200.0 + step as f32 * 10.0, 0.0));
    }
    toolbar.handle_touch(TouchEvent::ended(-110.0, 0.0));

    // Pick a color, then a thickness, then switch to the spray can.
    tap_target(&mut toolbar, TouchTarget::PickerIcon(PickerKind::Color));
    tap_target(
        &mut toolbar,
        TouchTarget::PickerCell {
            picker: PickerKind::Color,
            cell: GridCell::new(2, 3),
        },
    );
    settle(&mut toolbar);

    tap_target(&mut toolbar, TouchTarget::PickerIcon(PickerKind::Thickness));
    tap_target(
        &mut toolbar,
        TouchTarget::PickerCell {
            picker: PickerKind::Thickness,
            cell: GridCell::new(1, 4),
        },
    );
    settle(&mut toolbar);

    tap_target(&mut toolbar, TouchTarget::BrushIcon(3));
    for step in 0..5 {
        toolbar.handle_touch(TouchEvent::moved(0.0, step as f32 * 12.0));
    }

    let selected = toolbar.selected_brush();
    log::info!(
        "Session done: {} selected with thickness {}, {} graphics on screen, {} toolbar events",
        selected.name(),
        selected.thickness(),
        toolbar.scene().len(),
        log.events().len()
    );
}

/// Touch whatever graphic currently carries `target`
fn tap_target(toolbar: &mut DrawingToolBar<RecordingScene>, target: TouchTarget) {
    let scene = toolbar.scene();
    let Some(position) = scene
        .find_target(target)
        .and_then(|id| scene.graphic(id))
        .map(|graphic| graphic.bounds().center())
    else {
        log::warn!("Nothing on screen for {target:?}");
        return;
    };
    toolbar.handle_touch(TouchEvent::began(position.x, position.y));
}

/// Run frames until pending animations have finished
fn settle(toolbar: &mut DrawingToolBar<RecordingScene>) {
    while toolbar.scene().pending_animations() > 0 {
        toolbar.advance(FRAME);
    }
}
