use crate::color::Color;
use crate::picker::PickerKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarEvent {
    BrushSelected {
        previous: usize,
        current: usize,
        brush: &'static str,
    },
    PickerOpened(PickerKind),
    /// A picker was closed without a value being applied
    PickerDismissed(PickerKind),
    /// A finished selection arrived after its picker had already closed
    SelectionDiscarded(PickerKind),
    ColorApplied(Color),
    ThicknessApplied(u32),
    DrawingEnabled,
    DrawingDisabled,
}
