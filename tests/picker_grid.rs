use std::time::Duration;

use drawing_toolbar::config::{ColorPickerLayout, ThicknessPickerLayout};
use drawing_toolbar::picker::PickerState;
use drawing_toolbar::{
    Color, ColorPicker, Continuation, GridCell, Picker, PickerKind, PickerValue, Point,
    RecordingScene, Scene, ThicknessPicker,
};

#[test]
fn test_color_cells_map_to_hue_and_saturation() {
    let picker = ColorPicker::default();
    let (rows, columns) = (picker.rows(), picker.columns());

    for row in 1..=rows {
        for column in 1..columns {
            let expected = Color::hsb(column as f32 / columns as f32, row as f32 / rows as f32, 1.0);
            assert_eq!(picker.cell_value(GridCell::new(row, column)), Some(expected));
        }
    }
}

#[test]
fn test_last_color_column_is_grayscale() {
    let picker = ColorPicker::default();
    let columns = picker.columns();

    for row in 1..=picker.rows() {
        let white = row as f32 / picker.rows() as f32;
        assert_eq!(
            picker.cell_value(GridCell::new(row, columns)),
            Some(Color::gray(white))
        );
    }
}

#[test]
fn test_color_cell_row_two_column_three() {
    let picker = ColorPicker::default();
    assert_eq!(
        picker.cell_value(GridCell::new(2, 3)),
        Some(Color::hsb(0.3, 0.4, 1.0))
    );
    assert_eq!(picker.cell_value(GridCell::new(0, 3)), None);
    assert_eq!(picker.cell_value(GridCell::new(6, 3)), None);
}

#[test]
fn test_thickness_cells_step_by_three() {
    let picker = ThicknessPicker::default();
    for column in 1..=picker.columns() {
        assert_eq!(
            picker.cell_value(GridCell::new(1, column)),
            Some(3 * column as u32)
        );
    }
}

#[test]
fn test_custom_layout_changes_the_grid() {
    let picker = ColorPicker::new(ColorPickerLayout {
        width: 120.0,
        height: 80.0,
        ..ColorPickerLayout::default()
    });
    assert_eq!((picker.rows(), picker.columns()), (2, 3));
    assert_eq!(picker.cell_value(GridCell::new(1, 3)), Some(Color::gray(0.5)));

    let picker = ThicknessPicker::new(ThicknessPickerLayout {
        step: 2,
        ..ThicknessPickerLayout::default()
    });
    assert_eq!(picker.cell_value(GridCell::new(1, 5)), Some(10));
}

#[test]
fn test_dismiss_is_idempotent() {
    let mut scene = RecordingScene::new();
    let mut color = ColorPicker::default();
    let mut thickness = ThicknessPicker::default();
    color.place_icon(&mut scene, Point::ZERO);
    thickness.place_icon(&mut scene, Point::new(0.0, -85.0));
    let untouched = scene.len();

    assert!(!color.dismiss(&mut scene));
    assert!(!thickness.dismiss(&mut scene));
    assert_eq!(scene.len(), untouched);

    color.draw(&mut scene, Point::ZERO);
    assert!(color.dismiss(&mut scene));
    assert!(!color.dismiss(&mut scene));
    assert_eq!(scene.len(), untouched);
    assert_eq!(color.state(), PickerState::Closed);
}

#[test]
fn test_selection_animates_then_continues_with_value() {
    let mut scene = RecordingScene::new();
    let mut picker = ColorPicker::default();
    picker.draw(&mut scene, Point::ZERO);

    assert!(picker.select_cell(&mut scene, GridCell::new(2, 3)));
    assert_eq!(
        picker.state(),
        PickerState::Selecting {
            cell: GridCell::new(2, 3)
        }
    );
    assert!(scene.advance(Duration::from_millis(150)).is_empty());

    let finished = scene.advance(Duration::from_millis(50));
    assert_eq!(
        finished,
        vec![Continuation::Selection {
            picker: PickerKind::Color,
            session: picker.session(),
            value: PickerValue::Color(Color::hsb(0.3, 0.4, 1.0)),
        }]
    );
    assert!(picker.accepts(picker.session()));
}

#[test]
fn test_second_cell_touch_is_ignored_while_selecting() {
    let mut scene = RecordingScene::new();
    let mut picker = ThicknessPicker::default();
    picker.draw(&mut scene, Point::ZERO);

    assert!(picker.select_cell(&mut scene, GridCell::new(1, 2)));
    assert!(!picker.select_cell(&mut scene, GridCell::new(1, 7)));
    assert_eq!(scene.pending_animations(), 1);
}

#[test]
fn test_closed_picker_ignores_cells() {
    let mut scene = RecordingScene::new();
    let mut picker = ColorPicker::default();
    assert!(!picker.select_cell(&mut scene, GridCell::new(1, 1)));

    picker.draw(&mut scene, Point::ZERO);
    picker.dismiss(&mut scene);
    assert!(!picker.select_cell(&mut scene, GridCell::new(1, 1)));
    assert_eq!(scene.pending_animations(), 0);
}
