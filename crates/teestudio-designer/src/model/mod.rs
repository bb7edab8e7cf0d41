//! Element model: placed elements, their payloads and shared bitmaps.

mod bitmap;
mod element;
mod presets;

pub use bitmap::Bitmap;
pub use element::{
    estimate_text_size, Element, ElementKind, ElementPatch, FontStyle, FontWeight, ImagePayload,
    NewElement, Payload, Placement, ShapePayload, ShapeType, TextPayload, TEXT_CHAR_WIDTH,
};
pub use presets::{FontChoice, TextPreset, FONT_CATALOG, PRESET_POSITION, TEXT_PRESETS};
