use image::RgbaImage;
use teestudio_core::{ElementId, GarmentPart, Rect, RgbaColor};
use teestudio_designer::transform::{resize_from_handle, Limits, ResizeHandle};
use teestudio_designer::model::{ImagePayload, ShapePayload};
use teestudio_designer::{Bitmap, Element, Payload, ShapeType, TextPayload};

const ZONE: Rect = Rect {
    x: 200.0,
    y: 200.0,
    width: 200.0,
    height: 280.0,
};

fn element(payload: Payload, x: f64, y: f64, w: f64, h: f64) -> Element {
    Element {
        id: ElementId(1),
        part: GarmentPart::Front,
        x,
        y,
        width: w,
        height: h,
        rotation: 0.0,
        visible: true,
        payload,
    }
}

fn image(w: u32, h: u32) -> Payload {
    Payload::Image(ImagePayload {
        bitmap: Bitmap::from_rgba(RgbaImage::new(w, h)).unwrap(),
    })
}

fn rect() -> Payload {
    Payload::Shape(ShapePayload {
        shape: ShapeType::Rectangle,
        fill: RgbaColor::BLACK,
    })
}

#[test]
fn test_se_resize_grows_from_fixed_top_left() {
    let start = element(rect(), 250.0, 250.0, 50.0, 50.0);
    let out = resize_from_handle(&start, ResizeHandle::Se, (30.0, 10.0), &ZONE, &Limits::default());
    assert_eq!(out.bounds, Rect::new(250.0, 250.0, 80.0, 60.0));
    assert!(out.font_size.is_none());
}

#[test]
fn test_nw_resize_keeps_bottom_right_anchor() {
    let start = element(rect(), 250.0, 250.0, 50.0, 50.0);
    let out = resize_from_handle(&start, ResizeHandle::Nw, (-20.0, -10.0), &ZONE, &Limits::default());
    assert_eq!(out.bounds, Rect::new(230.0, 240.0, 70.0, 60.0));
}

#[test]
fn test_edge_handle_changes_one_dimension() {
    let start = element(rect(), 250.0, 250.0, 50.0, 50.0);
    let out = resize_from_handle(&start, ResizeHandle::E, (25.0, 40.0), &ZONE, &Limits::default());
    assert_eq!(out.bounds, Rect::new(250.0, 250.0, 75.0, 50.0));
    let out = resize_from_handle(&start, ResizeHandle::N, (25.0, 20.0), &ZONE, &Limits::default());
    assert_eq!(out.bounds, Rect::new(250.0, 270.0, 50.0, 30.0));
}

#[test]
fn test_floor_when_dragged_past_opposite_edge() {
    let start = element(rect(), 250.0, 250.0, 50.0, 50.0);
    let out = resize_from_handle(&start, ResizeHandle::Se, (-500.0, -500.0), &ZONE, &Limits::default());
    assert_eq!(out.bounds.width, 20.0);
    assert_eq!(out.bounds.height, 20.0);
    let out = resize_from_handle(&start, ResizeHandle::Nw, (500.0, 500.0), &ZONE, &Limits::default());
    assert_eq!(out.bounds, Rect::new(280.0, 280.0, 20.0, 20.0));
}

#[test]
fn test_shape_resize_capped_by_zone() {
    let start = element(rect(), 250.0, 250.0, 50.0, 50.0);
    let out = resize_from_handle(&start, ResizeHandle::Se, (1000.0, 1000.0), &ZONE, &Limits::default());
    assert_eq!(out.bounds, ZONE);
}

#[test]
fn test_image_edge_resize_drives_other_axis() {
    let start = element(image(200, 100), 250.0, 250.0, 100.0, 50.0);
    let out = resize_from_handle(&start, ResizeHandle::E, (20.0, 0.0), &ZONE, &Limits::default());
    assert!((out.bounds.width - 120.0).abs() < 1e-9);
    assert!((out.bounds.height - 60.0).abs() < 1e-9);

    let out = resize_from_handle(&start, ResizeHandle::S, (0.0, 20.0), &ZONE, &Limits::default());
    assert!((out.bounds.width - 140.0).abs() < 1e-9);
    assert!((out.bounds.height - 70.0).abs() < 1e-9);
}

#[test]
fn test_image_corner_uses_larger_change() {
    let start = element(image(100, 100), 250.0, 250.0, 60.0, 60.0);
    let out = resize_from_handle(&start, ResizeHandle::Se, (10.0, 30.0), &ZONE, &Limits::default());
    assert!((out.bounds.width - 90.0).abs() < 1e-9);
    assert!((out.bounds.height - 90.0).abs() < 1e-9);
}

#[test]
fn test_image_nw_resize_anchors_bottom_right() {
    let start = element(image(100, 50), 300.0, 300.0, 80.0, 40.0);
    let out = resize_from_handle(&start, ResizeHandle::Nw, (-20.0, 0.0), &ZONE, &Limits::default());
    assert!((out.bounds.right() - 380.0).abs() < 1e-9);
    assert!((out.bounds.bottom() - 340.0).abs() < 1e-9);
    assert!((out.bounds.width / out.bounds.height - 2.0).abs() < 1e-9);
}

#[test]
fn test_image_in_tiny_zone_keeps_floor_over_aspect() {
    let sleeve = Rect::new(300.0, 210.0, 50.0, 80.0);
    let start = element(image(500, 100), 300.0, 240.0, 50.0, 20.0);
    let out = resize_from_handle(&start, ResizeHandle::Se, (-30.0, 0.0), &sleeve, &Limits::default());
    assert_eq!((out.bounds.width, out.bounds.height), (50.0, 20.0));
    assert!(sleeve.contains_rect(&out.bounds, 1e-9));
}

#[test]
fn test_image_in_small_zone_keeps_aspect_when_floor_fits() {
    let sleeve = Rect::new(300.0, 210.0, 50.0, 80.0);
    let start = element(image(200, 100), 300.0, 240.0, 50.0, 25.0);
    let out = resize_from_handle(&start, ResizeHandle::Se, (-40.0, -40.0), &sleeve, &Limits::default());
    assert!((out.bounds.width - 40.0).abs() < 1e-9);
    assert!((out.bounds.height - 20.0).abs() < 1e-9);
}

#[test]
fn test_text_resize_scales_font_and_ignores_zone() {
    let text = TextPayload::new("ABCDE", "Arial", 20.0);
    let start = element(Payload::Text(text), 10.0, 10.0, 60.0, 20.0);
    let out = resize_from_handle(&start, ResizeHandle::E, (60.0, 0.0), &ZONE, &Limits::default());
    assert_eq!(out.font_size, Some(40.0));
    assert_eq!(out.bounds, Rect::new(10.0, 10.0, 120.0, 40.0));
}

#[test]
fn test_text_font_floor() {
    let text = TextPayload::new("ABCDE", "Arial", 20.0);
    let start = element(Payload::Text(text), 10.0, 10.0, 60.0, 20.0);
    let out = resize_from_handle(&start, ResizeHandle::E, (-1000.0, 0.0), &ZONE, &Limits::default());
    assert_eq!(out.font_size, Some(8.0));
    assert!(out.bounds.width >= 20.0 && out.bounds.height >= 20.0);
}
