//! Placed design elements and their payloads.

use super::bitmap::Bitmap;
use teestudio_core::{ElementId, GarmentPart, Point, Rect, RgbaColor};

/// Width of one character relative to the font size in the text box estimate.
pub const TEXT_CHAR_WIDTH: f64 = 0.6;

/// Estimated box of a single line of text.
pub fn estimate_text_size(content: &str, font_size: f64) -> (f64, f64) {
    let chars = content.chars().count() as f64;
    (chars * font_size * TEXT_CHAR_WIDTH, font_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Shape,
    Image,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Text => write!(f, "Text"),
            ElementKind::Shape => write!(f, "Shape"),
            ElementKind::Image => write!(f, "Image"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// CSS-style numeric font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn is_bold(self) -> bool {
        self.0 >= 600
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextPayload {
    pub content: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub fill: RgbaColor,
}

impl TextPayload {
    pub fn new(content: impl Into<String>, font_family: impl Into<String>, font_size: f64) -> Self {
        Self {
            content: content.into(),
            font_family: font_family.into(),
            font_size,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            fill: RgbaColor::BLACK,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    pub fn with_fill(mut self, fill: RgbaColor) -> Self {
        self.fill = fill;
        self
    }

    pub fn estimated_size(&self) -> (f64, f64) {
        estimate_text_size(&self.content, self.font_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Rectangle,
    Circle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapePayload {
    pub shape: ShapeType,
    pub fill: RgbaColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub bitmap: Bitmap,
}

/// Kind-specific content of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(TextPayload),
    Shape(ShapePayload),
    Image(ImagePayload),
}

impl Payload {
    pub fn kind(&self) -> ElementKind {
        match self {
            Payload::Text(_) => ElementKind::Text,
            Payload::Shape(_) => ElementKind::Shape,
            Payload::Image(_) => ElementKind::Image,
        }
    }
}

/// A placed design unit.
///
/// Z-order is the element's index in its scene; there is no z field.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub part: GarmentPart,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise degrees about the element's own centre.
    pub rotation: f64,
    pub visible: bool,
    pub payload: Payload,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        self.payload.kind()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.payload, Payload::Text(_))
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Natural aspect ratio that resizing must keep, images only.
    pub fn locked_aspect(&self) -> Option<f64> {
        match &self.payload {
            Payload::Image(img) => Some(img.bitmap.aspect_ratio()),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&TextPayload> {
        match &self.payload {
            Payload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Short label for the layer panel.
    pub fn label(&self) -> String {
        match &self.payload {
            Payload::Text(t) => t.content.clone(),
            Payload::Shape(s) => match s.shape {
                ShapeType::Rectangle => "Rectangle".to_string(),
                ShapeType::Circle => "Circle".to_string(),
            },
            Payload::Image(img) => format!("Image {}x{}", img.bitmap.width(), img.bitmap.height()),
        }
    }
}

/// Partial update applied by `SceneStore::update_element`.
///
/// `None` fields are left untouched. Text-only fields are ignored for other kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub visible: Option<bool>,
    pub fill: Option<RgbaColor>,
    pub content: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
}

impl ElementPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn rotation(degrees: f64) -> Self {
        Self {
            rotation: Some(degrees),
            ..Default::default()
        }
    }
}

/// How a new image or shape is sized and placed inside its zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Gallery clipart sizing, centred in the zone.
    Clipart,
    /// User upload sizing, centred in the zone.
    Upload,
    /// Explicit top-left position; text is clamped to the canvas only.
    At(Point),
}

/// An element that has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewElement {
    pub payload: Payload,
    pub placement: Placement,
}

impl NewElement {
    pub fn text(payload: TextPayload, at: Point) -> Self {
        Self {
            payload: Payload::Text(payload),
            placement: Placement::At(at),
        }
    }

    pub fn upload(bitmap: Bitmap) -> Self {
        Self {
            payload: Payload::Image(ImagePayload { bitmap }),
            placement: Placement::Upload,
        }
    }

    pub fn clipart(bitmap: Bitmap) -> Self {
        Self {
            payload: Payload::Image(ImagePayload { bitmap }),
            placement: Placement::Clipart,
        }
    }

    pub fn shape(shape: ShapeType, fill: RgbaColor) -> Self {
        Self {
            payload: Payload::Shape(ShapePayload { shape, fill }),
            placement: Placement::Clipart,
        }
    }
}
