use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::Arc;
use teestudio_core::{EditorEvent, GarmentColor, GarmentPart, Point, RgbaColor};
use teestudio_designer::{
    DesignEditor, ElementPatch, Key, KeyEvent, MemoryAssetLoader, Modifiers, ShapeType,
    TextPayload,
};
use teestudio_settings::{EditorConfig, FeatureSettings};

fn editor_with(config: EditorConfig) -> DesignEditor {
    DesignEditor::new(
        config,
        Arc::new(MemoryAssetLoader::new()),
        GarmentPart::Front,
        GarmentColor::White,
    )
    .unwrap()
}

fn editor() -> DesignEditor {
    editor_with(EditorConfig::default())
}

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255]))
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = EditorConfig::default();
    config.canvas.width = 0;
    let result = DesignEditor::new(
        config,
        Arc::new(MemoryAssetLoader::new()),
        GarmentPart::Front,
        GarmentColor::White,
    );
    assert!(result.is_err());
}

#[test]
fn test_add_selects_and_commits() {
    let mut ed = editor();
    assert!(!ed.can_undo());
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();
    assert_eq!(ed.selection(), Some(id));
    assert!(ed.can_undo());
    assert_eq!(ed.history().len(), 2);
}

#[test]
fn test_events_after_add() {
    let mut ed = editor();
    let mut rx = ed.subscribe();
    let id = ed.add_shape(ShapeType::Circle, RgbaColor::BLACK).unwrap();

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert!(events.contains(&EditorEvent::ElementsChanged {
        on_active_part: 1,
        total: 1
    }));
    assert!(events.contains(&EditorEvent::HistoryChanged {
        can_undo: true,
        can_redo: false
    }));
    assert!(events.contains(&EditorEvent::SelectionChanged(Some(id))));
}

#[test]
fn test_hiding_selected_element_clears_selection() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();
    let mut rx = ed.subscribe();

    assert!(ed.toggle_visible(id));
    assert_eq!(ed.selection(), None);
    assert!(!ed.element(id).unwrap().visible);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert!(events.contains(&EditorEvent::SelectionChanged(None)));

    assert!(ed.set_visible(id, true));
    assert_eq!(ed.selection(), None);
}

#[test]
fn test_undo_redo_clear_selection() {
    let mut ed = editor();
    ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK);

    assert!(ed.undo());
    assert!(ed.scene().is_empty());
    assert_eq!(ed.selection(), None);
    assert!(!ed.undo());

    assert!(ed.redo());
    assert_eq!(ed.scene().len(), 1);
    assert_eq!(ed.selection(), None);
    assert!(!ed.redo());
}

#[test]
fn test_noop_update_does_not_commit() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();
    assert!(!ed.update_element(id, &ElementPatch::default()));
    assert_eq!(ed.history().len(), 2);
    assert!(ed.update_element(id, &ElementPatch::position(210.0, 210.0)));
    assert_eq!(ed.history().len(), 3);
}

#[test]
fn test_drag_commits_once_on_pointer_up() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();

    ed.pointer_down(Point::new(300.0, 340.0));
    ed.pointer_move(Point::new(305.0, 345.0));
    ed.pointer_move(Point::new(310.0, 350.0));
    assert_eq!(ed.history().len(), 2);
    assert!(ed.pointer_up());
    assert_eq!(ed.history().len(), 3);

    let e = ed.element(id).unwrap();
    assert_eq!((e.x, e.y), (250.0, 290.0));
}

#[test]
fn test_click_without_drag_does_not_commit() {
    let mut ed = editor();
    ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK);
    ed.pointer_down(Point::new(300.0, 340.0));
    assert!(!ed.pointer_up());
    assert_eq!(ed.history().len(), 2);
}

#[test]
fn test_undo_mid_gesture_commits_gesture_first() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();
    ed.pointer_down(Point::new(300.0, 340.0));
    ed.pointer_move(Point::new(310.0, 350.0));

    assert!(ed.undo());
    let e = ed.element(id).unwrap();
    assert_eq!((e.x, e.y), (240.0, 280.0));
    assert!(ed.can_redo());

    assert!(ed.redo());
    let e = ed.element(id).unwrap();
    assert_eq!((e.x, e.y), (250.0, 290.0));
}

#[test]
fn test_text_placement_by_click() {
    let mut ed = editor();
    ed.begin_text_placement(TextPayload::new("Hello", "Arial", 20.0));
    ed.pointer_down(Point::new(40.0, 30.0));
    ed.pointer_up();

    let id = ed.selection().unwrap();
    let e = ed.element(id).unwrap();
    assert_eq!((e.x, e.y), (40.0, 30.0));
    assert_eq!(ed.history().len(), 2);
}

#[test]
fn test_reduced_features_block_operations() {
    let mut config = EditorConfig::default();
    config.features = FeatureSettings::reduced();
    let mut ed = editor_with(config);

    let upload = teestudio_designer::Bitmap::decode(&png_bytes(10, 10)).unwrap();
    assert!(ed.add_upload(upload.clone()).is_none());
    let clip = ed.add_clipart(upload).unwrap();
    assert!(ed.duplicate_element(clip).is_none());
    assert!(!ed.rotate_by(clip, 15.0));
    assert!(ed.add_shape(ShapeType::Circle, RgbaColor::WHITE).is_some());
    assert_eq!(ed.scene().len(), 2);
}

#[test]
fn test_upload_bytes() {
    let mut ed = editor();
    assert!(ed.add_upload_bytes(b"garbage").is_err());
    let id = ed.add_upload_bytes(&png_bytes(40, 20)).unwrap().unwrap();
    assert!(ed.element(id).unwrap().locked_aspect().is_some());
}

#[test]
fn test_duplicate_selects_copy() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();
    let copy = ed.duplicate_selected().unwrap();
    assert_ne!(id, copy);
    assert_eq!(ed.selection(), Some(copy));
}

#[test]
fn test_keyboard_nudge_undo_delete() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();

    let right = KeyEvent::new(Key::ArrowRight, Modifiers::shift());
    assert!(!ed.handle_key(&right, true));
    assert_eq!(ed.element(id).unwrap().x, 240.0);

    assert!(ed.handle_key(&right, false));
    assert_eq!(ed.element(id).unwrap().x, 250.0);

    assert!(ed.handle_key(&KeyEvent::new(Key::Char('z'), Modifiers::ctrl()), false));
    assert_eq!(ed.element(id).unwrap().x, 240.0);

    assert!(!ed.handle_key(&KeyEvent::plain(Key::Delete), false));
    ed.select(Some(id));
    assert!(ed.handle_key(&KeyEvent::plain(Key::Delete), false));
    assert!(ed.scene().is_empty());
}

#[test]
fn test_keyboard_snap_and_rotate() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();

    assert!(ed.handle_key(&KeyEvent::plain(Key::End), false));
    let e = ed.element(id).unwrap();
    assert_eq!((e.x, e.y), (280.0, 360.0));

    assert!(ed.handle_key(&KeyEvent::plain(Key::Char('r')), false));
    assert_eq!(ed.element(id).unwrap().rotation, 15.0);
}

#[test]
fn test_part_switch_clears_selection_color_keeps_it() {
    let mut ed = editor();
    let id = ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK).unwrap();

    assert!(ed.set_color(GarmentColor::Black));
    assert_eq!(ed.selection(), Some(id));
    assert!(!ed.set_color(GarmentColor::Black));

    assert!(ed.set_part(GarmentPart::Back));
    assert_eq!(ed.selection(), None);
    assert!(ed.layers().is_empty());
    assert_eq!(ed.scene().len(), 1);
}

#[test]
fn test_zone_outline_visibility() {
    let mut ed = editor();
    assert!(ed.zone_outline_visible());

    ed.add_text(TextPayload::new("Hi", "Arial", 20.0), Point::new(10.0, 10.0));
    assert!(!ed.zone_outline_visible());

    ed.set_zone_outline_override(Some(true));
    assert!(ed.zone_outline_visible());
    ed.set_zone_outline_override(None);
    ed.select(None);
    assert!(ed.zone_outline_visible());

    let mut config = EditorConfig::default();
    config.show_zone_outline = false;
    assert!(!editor_with(config).zone_outline_visible());
}

#[test]
fn test_dirty_flag() {
    let mut ed = editor();
    assert!(ed.take_dirty());
    assert!(!ed.is_dirty());
    ed.add_shape(ShapeType::Rectangle, RgbaColor::BLACK);
    assert!(ed.is_dirty());
}
