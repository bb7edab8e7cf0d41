//! Geometry primitives in canvas coordinates.
//!
//! The canvas origin is the top-left corner, x grows right and y grows down.
//! Everything here is pure: containment, clamping and fitting helpers used by
//! the placement rules of the design editor.

use serde::{Deserialize, Serialize};

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(&self, other: &Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// True when `other` lies fully inside `self`, within `epsilon`.
    pub fn contains_rect(&self, other: &Rect, epsilon: f64) -> bool {
        other.x >= self.x - epsilon
            && other.y >= self.y - epsilon
            && other.right() <= self.right() + epsilon
            && other.bottom() <= self.bottom() + epsilon
    }

    /// Grows the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Square of side `size` centred on `center`.
    pub fn square_around(center: Point, size: f64) -> Rect {
        Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    /// Clamps a top-left position so a box of `width`×`height` stays inside `self`.
    ///
    /// When the box is larger than `self` the lower bound wins, matching the
    /// `max(lo, min(v, hi))` order used by every placement rule.
    pub fn clamp_position(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        let cx = self.x.max(x.min(self.right() - width));
        let cy = self.y.max(y.min(self.bottom() - height));
        (cx, cy)
    }

    /// Top-left position that centres a `width`×`height` box in `self`.
    pub fn centered(&self, width: f64, height: f64) -> (f64, f64) {
        (
            self.x + (self.width - width) / 2.0,
            self.y + (self.height - height) / 2.0,
        )
    }
}

/// Shrinks `width`×`height` uniformly so it fits in `max_w`×`max_h`. Never grows.
pub fn fit_within(width: f64, height: f64, max_w: f64, max_h: f64) -> (f64, f64) {
    let factor = (max_w / width).min(max_h / height);
    if factor < 1.0 {
        (width * factor, height * factor)
    } else {
        (width, height)
    }
}
