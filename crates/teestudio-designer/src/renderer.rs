//! Canvas renderer for the design editor
//! Draws one frame into an RGBA image using tiny-skia for anti-aliased 2D rendering.
//!
//! Draw order:
//! - Background fill and the base garment artwork (or a placeholder card)
//! - Dashed design area outline with its label
//! - Visible elements of the active part, bottom to top, rotated about their centres
//! - Selection outline, resize handles and rotation handle
//!
//! Rendering is a pure function of the [`Frame`]; the renderer keeps no drawing state.

use crate::assets::BaseArtwork;
use crate::font_manager;
use crate::model::{Bitmap, Element, FontStyle, Payload, ShapeType, TextPayload};
use crate::scene::Scene;
use crate::transform::{rotation_handle_center, ResizeHandle};
use image::RgbaImage;
use rusttype::{point as rt_point, OutlineBuilder, Scale};
use teestudio_core::{ElementId, ExportError, GarmentPart, Rect, RgbaColor};
use teestudio_settings::{CanvasSettings, HandleSettings};
use tiny_skia::{
    Color, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, StrokeDash,
    Transform,
};

const ZONE_LABEL: &str = "Design Area";
const ASPECT_LABEL: &str = "Aspect Locked";
const MISSING_LABEL: &str = "Image not found";
const UI_FONT: &str = "Arial, sans-serif";

fn accent_color() -> Color {
    Color::from_rgba8(0x3B, 0x82, 0xF6, 255)
}
fn edge_handle_color() -> Color {
    Color::from_rgba8(0x60, 0xA5, 0xFA, 255)
}
fn rotation_color() -> Color {
    Color::from_rgba8(0x10, 0xB9, 0x81, 255)
}
fn aspect_label_color() -> Color {
    Color::from_rgba8(0x05, 0x96, 0x69, 255)
}
fn placeholder_color() -> Color {
    Color::from_rgba8(0x4A, 0x55, 0x68, 255)
}

fn to_skia(c: RgbaColor) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

/// Everything one frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub scene: &'a Scene,
    pub part: GarmentPart,
    pub zone: Rect,
    pub selection: Option<ElementId>,
    /// `None` while the artwork has not been resolved yet.
    pub artwork: Option<&'a BaseArtwork>,
    pub show_zone_outline: bool,
    /// Draw selection outline and handles.
    pub show_selection: bool,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    canvas: CanvasSettings,
    handles: HandleSettings,
}

impl Renderer {
    pub fn new(canvas: CanvasSettings, handles: HandleSettings) -> Self {
        Self { canvas, handles }
    }

    pub fn canvas(&self) -> &CanvasSettings {
        &self.canvas
    }

    /// Renders `frame` at the canvas size.
    pub fn render(&self, frame: &Frame<'_>) -> Result<RgbaImage, ExportError> {
        let (width, height) = (self.canvas.width, self.canvas.height);
        let mut pixmap =
            Pixmap::new(width, height).ok_or(ExportError::InvalidCanvasSize { width, height })?;
        pixmap.fill(to_skia(self.canvas.background));

        match frame.artwork {
            Some(BaseArtwork::Loaded { bitmap, .. }) => self.draw_artwork(&mut pixmap, bitmap),
            Some(BaseArtwork::Missing) => self.draw_placeholder(&mut pixmap),
            None => {}
        }

        if frame.show_zone_outline {
            draw_zone_outline(&mut pixmap, &frame.zone);
        }

        for element in frame
            .scene
            .on_part(frame.part)
            .filter(|e| e.visible)
        {
            draw_element(&mut pixmap, element);
            if frame.show_selection && frame.selection == Some(element.id) {
                self.draw_selection(&mut pixmap, element);
            }
        }

        Ok(to_rgba_image(&pixmap))
    }

    fn draw_artwork(&self, pixmap: &mut Pixmap, bitmap: &Bitmap) {
        let Some(src) = bitmap.pixmap() else {
            return;
        };
        let (cw, ch) = (self.canvas.width as f32, self.canvas.height as f32);
        let (iw, ih) = (bitmap.width() as f32, bitmap.height() as f32);
        let scale = (cw / iw).min(ch / ih) * self.canvas.garment_fill as f32;
        let x = (cw - iw * scale) / 2.0;
        let y = (ch - ih * scale) / 2.0;
        let paint = PixmapPaint {
            quality: FilterQuality::Bicubic,
            ..Default::default()
        };
        pixmap.draw_pixmap(
            0,
            0,
            src.as_ref(),
            &paint,
            Transform::from_scale(scale, scale).post_translate(x, y),
            None,
        );
    }

    fn draw_placeholder(&self, pixmap: &mut Pixmap) {
        let (cw, ch) = (self.canvas.width as f32, self.canvas.height as f32);
        let (w, h) = (cw * 0.6, ch * 0.6);
        let (x, y) = ((cw - w) / 2.0, (ch - h) / 2.0);
        if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, w, h) {
            pixmap.fill_rect(rect, &paint_for(placeholder_color()), Transform::identity(), None);
        }
        draw_label(
            pixmap,
            MISSING_LABEL,
            UI_FONT,
            16.0,
            true,
            cw / 2.0,
            ch / 2.0 + 8.0,
            Color::WHITE,
        );
    }

    fn draw_selection(&self, pixmap: &mut Pixmap, element: &Element) {
        let bounds = element.bounds();
        let outline = bounds.inflate(self.handles.selection_padding);
        stroke_rect(pixmap, &outline, accent_color(), 3.0, Some((8.0, 4.0)));

        let size = self.handles.visual_size;
        for handle in ResizeHandle::ALL {
            let center = handle.position(&bounds);
            let square = Rect::square_around(center, size);
            let fill = if handle.is_corner() {
                accent_color()
            } else {
                edge_handle_color()
            };
            if let Some(r) = to_skia_rect(&square) {
                pixmap.fill_rect(r, &paint_for(fill), Transform::identity(), None);
            }
            stroke_rect(pixmap, &square, Color::WHITE, 3.0, None);
            fill_circle(pixmap, center.x as f32, center.y as f32, 2.0, Color::WHITE);
        }

        let rc = rotation_handle_center(&bounds, self.handles.rotation_offset);
        let (rx, ry) = (rc.x as f32, rc.y as f32);
        let radius = self.handles.rotation_visual_radius as f32;
        fill_circle(pixmap, rx, ry, radius, rotation_color());
        if let Some(circle) = PathBuilder::from_circle(rx, ry, radius) {
            stroke_path(pixmap, &circle, Color::WHITE, 3.0);
        }
        draw_rotation_icon(pixmap, rx, ry, radius / 2.0);

        if matches!(element.payload, Payload::Image(_)) {
            draw_label(
                pixmap,
                ASPECT_LABEL,
                UI_FONT,
                10.0,
                true,
                (bounds.x + bounds.width / 2.0) as f32,
                (bounds.y - 5.0) as f32,
                aspect_label_color(),
            );
        }
    }
}

fn to_skia_rect(r: &Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
}

fn stroke_path(pixmap: &mut Pixmap, path: &tiny_skia::Path, color: Color, width: f32) {
    let stroke = Stroke {
        width,
        ..Default::default()
    };
    pixmap.stroke_path(path, &paint_for(color), &stroke, Transform::identity(), None);
}

fn stroke_rect(pixmap: &mut Pixmap, r: &Rect, color: Color, width: f32, dash: Option<(f32, f32)>) {
    let Some(rect) = to_skia_rect(r) else {
        return;
    };
    let path = PathBuilder::from_rect(rect);
    let stroke = Stroke {
        width,
        dash: dash.and_then(|(on, off)| StrokeDash::new(vec![on, off], 0.0)),
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint_for(color), &stroke, Transform::identity(), None);
}

fn fill_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, r: f32, color: Color) {
    if let Some(path) = PathBuilder::from_circle(cx, cy, r) {
        pixmap.fill_path(&path, &paint_for(color), FillRule::Winding, Transform::identity(), None);
    }
}

/// Three-quarter arc with an arrow head.
fn draw_rotation_icon(pixmap: &mut Pixmap, cx: f32, cy: f32, r: f32) {
    let mut pb = PathBuilder::new();
    let steps = 24;
    for i in 0..=steps {
        let t = (i as f32 / steps as f32) * 1.5 * std::f32::consts::PI;
        let (x, y) = (cx + r * t.cos(), cy + r * t.sin());
        if i == 0 {
            pb.move_to(x, y);
        } else {
            pb.line_to(x, y);
        }
    }
    let (ex, ey) = (cx, cy - r);
    pb.move_to(ex, ey);
    pb.line_to(ex - 2.0, ey - 2.0);
    pb.move_to(ex, ey);
    pb.line_to(ex - 2.0, ey + 2.0);
    if let Some(path) = pb.finish() {
        stroke_path(pixmap, &path, Color::WHITE, 2.0);
    }
}

fn draw_zone_outline(pixmap: &mut Pixmap, zone: &Rect) {
    stroke_rect(pixmap, zone, accent_color(), 2.0, Some((10.0, 5.0)));
    draw_label(
        pixmap,
        ZONE_LABEL,
        UI_FONT,
        14.0,
        true,
        (zone.x + zone.width / 2.0) as f32,
        (zone.y - 10.0) as f32,
        accent_color(),
    );
}

fn draw_element(pixmap: &mut Pixmap, element: &Element) {
    let c = element.center();
    let transform = Transform::from_rotate_at(element.rotation as f32, c.x as f32, c.y as f32);

    match &element.payload {
        Payload::Text(text) => draw_text(pixmap, element, text, transform),
        Payload::Shape(shape) => {
            let Some(rect) = to_skia_rect(&element.bounds()) else {
                return;
            };
            let path = match shape.shape {
                ShapeType::Rectangle => Some(PathBuilder::from_rect(rect)),
                ShapeType::Circle => PathBuilder::from_oval(rect),
            };
            if let Some(path) = path {
                pixmap.fill_path(
                    &path,
                    &paint_for(to_skia(shape.fill)),
                    FillRule::Winding,
                    transform,
                    None,
                );
            }
        }
        Payload::Image(img) => {
            let Some(src) = img.bitmap.pixmap() else {
                return;
            };
            let sx = (element.width / img.bitmap.width() as f64) as f32;
            let sy = (element.height / img.bitmap.height() as f64) as f32;
            let paint = PixmapPaint {
                quality: FilterQuality::Bicubic,
                ..Default::default()
            };
            let placed = Transform::from_scale(sx, sy)
                .post_translate(element.x as f32, element.y as f32)
                .post_concat(transform);
            pixmap.draw_pixmap(0, 0, src.as_ref(), &paint, placed, None);
        }
    }
}

/// Collects rusttype glyph outlines into a tiny-skia path.
struct GlyphPathBuilder {
    pb: PathBuilder,
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.pb.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.pb.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.pb.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.pb.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.pb.close();
    }
}

/// Glyph outlines for `content` with the top of the line box at `top`.
fn text_path(
    content: &str,
    family: &str,
    size: f32,
    bold: bool,
    italic: bool,
    left: f32,
    top: f32,
) -> Option<tiny_skia::Path> {
    let font = font_manager::get_font_for(family, bold, italic)?;
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let start = rt_point(left, top + v_metrics.ascent);

    let mut builder = GlyphPathBuilder {
        pb: PathBuilder::new(),
    };
    for glyph in font.layout(content, scale, start) {
        glyph.build_outline(&mut builder);
    }
    builder.pb.finish()
}

fn draw_text(pixmap: &mut Pixmap, element: &Element, text: &TextPayload, transform: Transform) {
    let path = text_path(
        &text.content,
        &text.font_family,
        text.font_size as f32,
        text.font_weight.is_bold(),
        text.font_style == FontStyle::Italic,
        element.x as f32,
        element.y as f32,
    );
    match path {
        Some(path) => pixmap.fill_path(
            &path,
            &paint_for(to_skia(text.fill)),
            FillRule::Winding,
            transform,
            None,
        ),
        None => tracing::trace!("Skipped text {} without glyphs", element.id),
    }
}

/// Single-line caption centred on `cx` with its baseline at `baseline`.
#[allow(clippy::too_many_arguments)]
fn draw_label(
    pixmap: &mut Pixmap,
    content: &str,
    family: &str,
    size: f32,
    bold: bool,
    cx: f32,
    baseline: f32,
    color: Color,
) {
    let Some(font) = font_manager::get_font_for(family, bold, false) else {
        return;
    };
    let scale = Scale::uniform(size);
    let width = font
        .layout(content, scale, rt_point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);
    let top = baseline - font.v_metrics(scale).ascent;
    if let Some(path) = text_path(content, family, size, bold, false, cx - width / 2.0, top) {
        pixmap.fill_path(&path, &paint_for(color), FillRule::Winding, Transform::identity(), None);
    }
}

fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .unwrap_or_else(|| RgbaImage::new(pixmap.width(), pixmap.height()))
}
