use teestudio_core::{GarmentColor, GarmentPart, Point, RgbaColor};
use teestudio_designer::{
    CursorIcon, InteractionController, InteractionState, NewElement, ResizeHandle, SceneStore,
    ShapeType, TextPayload, Tool,
};
use teestudio_settings::{EditorConfig, HandleSettings};

/// Store with one 120x120 rectangle centred in the front zone at (240, 280).
fn setup() -> (SceneStore, teestudio_core::ElementId) {
    let mut store = SceneStore::new(&EditorConfig::default(), GarmentPart::Front, GarmentColor::White);
    let id = store.add_element(NewElement::shape(ShapeType::Rectangle, RgbaColor::BLACK));
    (store, id)
}

fn controller() -> InteractionController {
    InteractionController::new(HandleSettings::default(), true)
}

#[test]
fn test_click_selects_and_drags() {
    let (mut store, id) = setup();
    let mut ctl = controller();

    let fb = ctl.pointer_down(&mut store, Point::new(300.0, 340.0));
    assert!(fb.selection_changed);
    assert_eq!(store.selection(), Some(id));
    assert!(matches!(ctl.state(), InteractionState::Dragging { .. }));

    let fb = ctl.pointer_move(&mut store, Point::new(310.0, 350.0));
    assert!(fb.scene_changed);
    let e = store.get(id).unwrap();
    assert_eq!((e.x, e.y), (250.0, 290.0));

    assert!(ctl.pointer_up());
    assert!(ctl.is_idle());
}

#[test]
fn test_selected_short_text_drags_from_inside() {
    let (mut store, _) = setup();
    let id = store.add_element(NewElement::text(
        TextPayload::new("Summer Camp!", "Arial", 24.0),
        Point::new(100.0, 100.0),
    ));
    store.select(Some(id));
    let before = store.get(id).unwrap().bounds();
    assert_eq!(before.height, 24.0);
    let mut ctl = controller();

    ctl.pointer_down(&mut store, Point::new(130.0, 112.0));
    assert!(matches!(ctl.state(), InteractionState::Dragging { .. }));
    ctl.pointer_move(&mut store, Point::new(230.0, 212.0));
    assert!(ctl.pointer_up());

    let e = store.get(id).unwrap();
    assert_eq!((e.x, e.y), (200.0, 200.0));
    assert_eq!(e.width, before.width);
}

#[test]
fn test_hidden_selection_has_no_handles() {
    let (mut store, id) = setup();
    store.select(Some(id));
    assert!(store.set_visible(id, false));
    assert_eq!(store.selection(), None);

    let mut ctl = controller();
    ctl.pointer_down(&mut store, Point::new(360.0, 400.0));
    assert!(ctl.is_idle());
    ctl.pointer_down(&mut store, Point::new(300.0, 245.0));
    assert!(ctl.is_idle());
}

#[test]
fn test_click_without_move_does_not_mutate() {
    let (mut store, _) = setup();
    let mut ctl = controller();
    ctl.pointer_down(&mut store, Point::new(300.0, 340.0));
    assert!(!ctl.pointer_up());
}

#[test]
fn test_click_on_empty_canvas_deselects() {
    let (mut store, id) = setup();
    store.select(Some(id));
    let mut ctl = controller();
    let fb = ctl.pointer_down(&mut store, Point::new(50.0, 50.0));
    assert!(fb.selection_changed);
    assert_eq!(store.selection(), None);
    assert!(ctl.is_idle());
}

#[test]
fn test_drag_is_clamped_to_zone() {
    let (mut store, id) = setup();
    let mut ctl = controller();
    ctl.pointer_down(&mut store, Point::new(300.0, 340.0));
    ctl.pointer_move(&mut store, Point::new(0.0, 0.0));
    let e = store.get(id).unwrap();
    assert_eq!((e.x, e.y), (200.0, 200.0));
}

#[test]
fn test_resize_from_corner_handle() {
    let (mut store, id) = setup();
    store.select(Some(id));
    let mut ctl = controller();

    ctl.pointer_down(&mut store, Point::new(360.0, 400.0));
    assert!(matches!(
        ctl.state(),
        InteractionState::Resizing {
            handle: ResizeHandle::Se,
            ..
        }
    ));

    ctl.pointer_move(&mut store, Point::new(370.0, 410.0));
    ctl.pointer_move(&mut store, Point::new(380.0, 420.0));
    let e = store.get(id).unwrap();
    assert_eq!((e.x, e.y, e.width, e.height), (240.0, 280.0, 140.0, 140.0));
    assert!(ctl.pointer_up());
}

#[test]
fn test_rotate_from_rotation_handle() {
    let (mut store, id) = setup();
    store.select(Some(id));
    let mut ctl = controller();

    ctl.pointer_down(&mut store, Point::new(300.0, 245.0));
    assert!(matches!(ctl.state(), InteractionState::Rotating { .. }));

    ctl.pointer_move(&mut store, Point::new(400.0, 340.0));
    assert!((store.get(id).unwrap().rotation - 90.0).abs() < 1e-9);
}

#[test]
fn test_rotation_handle_ignored_when_disabled() {
    let (mut store, id) = setup();
    store.select(Some(id));
    let mut ctl = InteractionController::new(HandleSettings::default(), false);

    ctl.pointer_down(&mut store, Point::new(300.0, 245.0));
    assert!(ctl.is_idle());
    assert_eq!(store.selection(), None);
    assert_eq!(store.get(id).unwrap().rotation, 0.0);
}

#[test]
fn test_text_tool_places_pending_text() {
    let (mut store, _) = setup();
    let mut ctl = controller();
    ctl.set_tool(Tool::Text);
    ctl.set_pending_text(Some(TextPayload::new("Hello", "Arial", 20.0)));

    let fb = ctl.pointer_down(&mut store, Point::new(50.0, 60.0));
    assert!(fb.scene_changed && fb.selection_changed);
    assert_eq!(ctl.tool(), Tool::Move);
    assert!(ctl.pending_text().is_none());

    let placed = store.selected_element().unwrap();
    assert!(placed.is_text());
    assert_eq!((placed.x, placed.y), (50.0, 60.0));
}

#[test]
fn test_blank_pending_text_is_not_placed() {
    let (mut store, _) = setup();
    let mut ctl = controller();
    ctl.set_tool(Tool::Text);
    ctl.set_pending_text(Some(TextPayload::new("   ", "Arial", 20.0)));

    let fb = ctl.pointer_down(&mut store, Point::new(50.0, 60.0));
    assert!(!fb.scene_changed);
    assert_eq!(store.scene().len(), 1);
}

#[test]
fn test_hover_cursor() {
    let (mut store, id) = setup();
    let ctl = controller();
    assert_eq!(ctl.hover_cursor(&store, Point::new(50.0, 50.0)), CursorIcon::Default);
    assert_eq!(ctl.hover_cursor(&store, Point::new(300.0, 340.0)), CursorIcon::Move);

    store.select(Some(id));
    let corner = ctl.hover_cursor(&store, Point::new(361.0, 401.0));
    assert_eq!(corner, CursorIcon::Resize(ResizeHandle::Se));
    assert_eq!(corner.css_name(), "se-resize");
    assert_eq!(ctl.hover_cursor(&store, Point::new(300.0, 245.0)), CursorIcon::Grab);
}

#[test]
fn test_hover_cursor_during_gesture() {
    let (mut store, _) = setup();
    let mut ctl = controller();
    ctl.pointer_down(&mut store, Point::new(300.0, 340.0));
    assert_eq!(ctl.hover_cursor(&store, Point::new(0.0, 0.0)), CursorIcon::Move);
}
