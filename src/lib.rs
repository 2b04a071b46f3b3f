#![warn(clippy::all, rust_2018_idioms)]

pub mod brush;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod graphic;
pub mod input;
pub mod picker;
pub mod scene;
pub mod toolbar;

pub use brush::{Brush, BrushKind, Eraser, Lines, Pen, SprayPaint};
pub use color::Color;
pub use config::ToolbarConfig;
pub use error::{ConfigError, SceneError};
pub use event::{EventBus, EventHandler, EventLog, ToolbarEvent};
pub use geometry::{Point, Size};
pub use graphic::{Anchor, Animation, Graphic, GraphicId, Shape};
pub use input::{TouchEvent, TouchPhase};
pub use picker::{ColorPicker, GridCell, Picker, PickerKind, PickerValue, ThicknessPicker};
pub use scene::{Continuation, RecordingScene, Scene, TouchTarget};
pub use toolbar::{CanvasMode, DrawingToolBar};
