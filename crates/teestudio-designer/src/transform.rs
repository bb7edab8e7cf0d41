//! Transform math for the design canvas.
//!
//! Everything in this module is a pure function of its arguments:
//! - handle hit-testing (8 resize handles and the rotation handle)
//! - anchored resize with aspect lock, size floor and zone fit
//! - rotation angle from a pointer position
//! - initial placement of images and shapes inside a zone
//! - position clamping (zone for artwork, canvas margin for text)
//!
//! When an aspect-locked image cannot meet both the zone and the size floor,
//! the zone and the floor hold and the aspect ratio gives way.

use crate::model::{estimate_text_size, Element, Payload};
use teestudio_core::{fit_within, Point, Rect};
use teestudio_settings::{EditorConfig, HandleSettings, PlacementProfile};

/// One of the eight resize handles around a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeHandle {
    /// Hit-test order: corners before edges.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Nw,
        ResizeHandle::Ne,
        ResizeHandle::Sw,
        ResizeHandle::Se,
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::W,
        ResizeHandle::E,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeHandle::Ne | ResizeHandle::Se | ResizeHandle::Sw | ResizeHandle::Nw
        )
    }

    /// The handle drags the left edge; the right edge is the anchor.
    pub fn moves_left(self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::Nw | ResizeHandle::Sw)
    }

    /// The handle drags the top edge; the bottom edge is the anchor.
    pub fn moves_top(self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::Nw | ResizeHandle::Ne)
    }

    pub fn changes_width(self) -> bool {
        !matches!(self, ResizeHandle::N | ResizeHandle::S)
    }

    pub fn changes_height(self) -> bool {
        !matches!(self, ResizeHandle::E | ResizeHandle::W)
    }

    /// Centre of the handle on the element's bounding box.
    pub fn position(self, bounds: &Rect) -> Point {
        let cx = bounds.x + bounds.width / 2.0;
        let cy = bounds.y + bounds.height / 2.0;
        match self {
            ResizeHandle::N => Point::new(cx, bounds.y),
            ResizeHandle::Ne => Point::new(bounds.right(), bounds.y),
            ResizeHandle::E => Point::new(bounds.right(), cy),
            ResizeHandle::Se => Point::new(bounds.right(), bounds.bottom()),
            ResizeHandle::S => Point::new(cx, bounds.bottom()),
            ResizeHandle::Sw => Point::new(bounds.x, bounds.bottom()),
            ResizeHandle::W => Point::new(bounds.x, cy),
            ResizeHandle::Nw => Point::new(bounds.x, bounds.y),
        }
    }

    /// Square hot zone centred on the handle, `hit_size` out from its centre on each side.
    pub fn hit_zone(self, bounds: &Rect, hit_size: f64) -> Rect {
        Rect::square_around(self.position(bounds), hit_size * 2.0)
    }
}

/// Returns the first resize handle whose hot zone contains `p`.
pub fn hit_test_handle(bounds: &Rect, p: Point, hit_size: f64) -> Option<ResizeHandle> {
    ResizeHandle::ALL
        .into_iter()
        .find(|h| h.hit_zone(bounds, hit_size).contains_point(p))
}

/// Centre of the rotation handle, above the middle of the top edge.
pub fn rotation_handle_center(bounds: &Rect, offset: f64) -> Point {
    Point::new(bounds.x + bounds.width / 2.0, bounds.y - offset)
}

pub fn hit_test_rotation(bounds: &Rect, p: Point, handles: &HandleSettings) -> bool {
    rotation_handle_center(bounds, handles.rotation_offset).distance_to(&p)
        <= handles.rotation_hit_radius
}

/// Rotation in degrees that points the rotation handle at `pointer`.
///
/// 0° keeps the handle straight up. The result is not normalized.
pub fn rotation_angle(center: Point, pointer: Point) -> f64 {
    let (dx, dy) = pointer.offset_from(&center);
    dy.atan2(dx).to_degrees() + 90.0
}

/// Limits shared by every placement rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub canvas: Rect,
    pub min_size: f64,
    pub min_font_size: f64,
    pub text_margin: f64,
}

impl Limits {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            canvas: config.canvas.bounds(),
            min_size: config.constraints.min_element_size,
            min_font_size: config.constraints.min_font_size,
            text_margin: config.constraints.text_canvas_margin,
        }
    }

    /// Area text may occupy: the canvas inset by the margin.
    pub fn text_area(&self) -> Rect {
        self.canvas.inflate(-self.text_margin)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

/// Text box for `content` at `font_size`, floored at the minimum element size.
pub fn text_box(content: &str, font_size: f64, limits: &Limits) -> (f64, f64) {
    let (w, h) = estimate_text_size(content, font_size);
    (w.max(limits.min_size), h.max(limits.min_size))
}

/// Applies the size floor and, for artwork, the zone fit.
///
/// With an aspect lock the floor and the zone fit both scale uniformly. If the
/// zone is too small for an aspect-locked box at the floor, each side is floored
/// and capped on its own.
pub fn constrain_size(
    width: f64,
    height: f64,
    aspect: Option<f64>,
    zone: Option<&Rect>,
    min_size: f64,
) -> (f64, f64) {
    match aspect {
        Some(ratio) => {
            let (mut w, mut h) = (width, width / ratio);
            if w.min(h) < min_size {
                if ratio >= 1.0 {
                    h = min_size;
                    w = min_size * ratio;
                } else {
                    w = min_size;
                    h = min_size / ratio;
                }
            }
            match zone {
                Some(z) => floor_within(fit_within(w, h, z.width, z.height), z, min_size),
                None => (w, h),
            }
        }
        None => {
            let (mut w, mut h) = (width.max(min_size), height.max(min_size));
            if let Some(z) = zone {
                w = w.min(z.width);
                h = h.min(z.height);
            }
            (w, h)
        }
    }
}

/// Raises each side to `min_size` without leaving `zone`.
fn floor_within((w, h): (f64, f64), zone: &Rect, min_size: f64) -> (f64, f64) {
    if w.min(h) >= min_size {
        return (w, h);
    }
    (
        w.max(min_size).min(zone.width.max(min_size)),
        h.max(min_size).min(zone.height.max(min_size)),
    )
}

/// Clamps a top-left position for an element of the given kind.
///
/// Text stays inside the canvas margin; everything else stays inside `zone`.
pub fn clamp_position(
    is_text: bool,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    zone: &Rect,
    limits: &Limits,
) -> (f64, f64) {
    if is_text {
        limits.text_area().clamp_position(x, y, width, height)
    } else {
        zone.clamp_position(x, y, width, height)
    }
}

/// Result of a resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    pub bounds: Rect,
    /// New font size, text only.
    pub font_size: Option<f64>,
}

/// Resizes `start` by the total pointer delta since the gesture began.
///
/// The edge or corner opposite `handle` stays fixed unless the result has to be
/// pushed back inside its zone or the canvas.
pub fn resize_from_handle(
    start: &Element,
    handle: ResizeHandle,
    delta: (f64, f64),
    zone: &Rect,
    limits: &Limits,
) -> ResizeOutcome {
    let (dx, dy) = delta;
    let mut raw_w = start.width;
    let mut raw_h = start.height;
    if handle.changes_width() {
        raw_w += if handle.moves_left() { -dx } else { dx };
    }
    if handle.changes_height() {
        raw_h += if handle.moves_top() { -dy } else { dy };
    }

    let (w, h, font_size) = match &start.payload {
        Payload::Text(text) => {
            let ratio = raw_w.max(limits.min_size) / start.width;
            let size = (text.font_size * ratio).round().max(limits.min_font_size);
            let (w, h) = text_box(&text.content, size, limits);
            (w, h, Some(size))
        }
        Payload::Image(img) => {
            let ratio = img.bitmap.aspect_ratio();
            let width_drives = if !handle.changes_height() {
                true
            } else if !handle.changes_width() {
                false
            } else {
                (raw_w - start.width).abs() > (raw_h - start.height).abs()
            };
            let (w, h) = if width_drives {
                (raw_w, raw_w / ratio)
            } else {
                (raw_h * ratio, raw_h)
            };
            let (w, h) = constrain_size(w, h, Some(ratio), Some(zone), limits.min_size);
            (w, h, None)
        }
        Payload::Shape(_) => {
            let (w, h) = constrain_size(raw_w, raw_h, None, Some(zone), limits.min_size);
            (w, h, None)
        }
    };

    let x = if handle.moves_left() {
        start.x + start.width - w
    } else {
        start.x
    };
    let y = if handle.moves_top() {
        start.y + start.height - h
    } else {
        start.y
    };
    let (x, y) = clamp_position(start.is_text(), x, y, w, h, zone, limits);

    ResizeOutcome {
        bounds: Rect::new(x, y, w, h),
        font_size,
    }
}

/// Initial bounds of an image or shape centred in `zone`.
///
/// The natural size is scaled to at most `max_fraction` of the zone, the smaller
/// side is raised to the profile floor and the result is fitted back into the zone.
/// Neither side ends up below `min_size`.
pub fn place_in_zone(
    natural_width: f64,
    natural_height: f64,
    zone: &Rect,
    profile: &PlacementProfile,
    min_size: f64,
) -> Rect {
    let aspect = natural_width / natural_height;
    let max_w = zone.width * profile.max_fraction;
    let max_h = zone.height * profile.max_fraction;

    let (mut w, mut h) = if aspect > 1.0 {
        let w = max_w.min(max_h * aspect);
        (w, w / aspect)
    } else {
        let h = max_h.min(max_w / aspect);
        (h * aspect, h)
    };

    if w < profile.min_size {
        w = profile.min_size;
        h = w / aspect;
    }
    if h < profile.min_size {
        h = profile.min_size;
        w = h * aspect;
    }

    let (w, h) = floor_within(fit_within(w, h, zone.width, zone.height), zone, min_size);
    let (x, y) = zone.centered(w, h);
    Rect::new(x, y, w, h)
}
