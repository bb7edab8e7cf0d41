//! Sample headlines and the font picker catalogue.

use super::element::{FontWeight, TextPayload};
use teestudio_core::{Point, RgbaColor};

/// Where preset headlines are dropped on the canvas.
pub const PRESET_POSITION: Point = Point { x: 100.0, y: 150.0 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPreset {
    pub content: &'static str,
    pub font_family: &'static str,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub fill: RgbaColor,
}

impl TextPreset {
    pub fn payload(&self) -> TextPayload {
        TextPayload::new(self.content, self.font_family, self.font_size)
            .with_weight(self.font_weight)
            .with_fill(self.fill)
    }
}

pub const TEXT_PRESETS: [TextPreset; 6] = [
    TextPreset {
        content: "Bridge",
        font_family: "Impact, Arial Black, sans-serif",
        font_size: 48.0,
        font_weight: FontWeight::BOLD,
        fill: RgbaColor::rgb(0x25, 0x63, 0xEB),
    },
    TextPreset {
        content: "Text Mask",
        font_family: "Brush Script MT, cursive",
        font_size: 36.0,
        font_weight: FontWeight::NORMAL,
        fill: RgbaColor::rgb(0xDC, 0x26, 0x26),
    },
    TextPreset {
        content: "Oswald",
        font_family: "Oswald, sans-serif",
        font_size: 42.0,
        font_weight: FontWeight::BOLD,
        fill: RgbaColor::rgb(0x00, 0x00, 0x00),
    },
    TextPreset {
        content: "Anton",
        font_family: "Anton, sans-serif",
        font_size: 44.0,
        font_weight: FontWeight::NORMAL,
        fill: RgbaColor::rgb(0x7C, 0x3A, 0xED),
    },
    TextPreset {
        content: "Pacifico",
        font_family: "Pacifico, cursive",
        font_size: 32.0,
        font_weight: FontWeight::NORMAL,
        fill: RgbaColor::rgb(0x05, 0x96, 0x69),
    },
    TextPreset {
        content: "Quicksand",
        font_family: "Arial, sans-serif",
        font_size: 28.0,
        font_weight: FontWeight(600),
        fill: RgbaColor::rgb(0xEA, 0x58, 0x0C),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontChoice {
    pub category: &'static str,
    pub name: &'static str,
    pub family: &'static str,
}

const fn font(category: &'static str, name: &'static str, family: &'static str) -> FontChoice {
    FontChoice {
        category,
        name,
        family,
    }
}

/// Fonts offered by the text tool, grouped by category.
pub const FONT_CATALOG: [FontChoice; 23] = [
    font("Sans Serif", "Arial", "Arial, sans-serif"),
    font("Sans Serif", "Helvetica", "Helvetica, Arial, sans-serif"),
    font("Sans Serif", "Verdana", "Verdana, sans-serif"),
    font("Sans Serif", "Trebuchet MS", "Trebuchet MS, sans-serif"),
    font("Sans Serif", "Tahoma", "Tahoma, sans-serif"),
    font("Sans Serif", "Century Gothic", "Century Gothic, sans-serif"),
    font("Sans Serif", "Calibri", "Calibri, sans-serif"),
    font("Sans Serif", "Open Sans", "Open Sans, sans-serif"),
    font("Serif", "Times New Roman", "Times New Roman, serif"),
    font("Serif", "Georgia", "Georgia, serif"),
    font("Serif", "Palatino", "Palatino, serif"),
    font("Serif", "Book Antiqua", "Book Antiqua, serif"),
    font("Serif", "Garamond", "Garamond, serif"),
    font("Display", "Impact", "Impact, Arial Black, sans-serif"),
    font("Display", "Copperplate", "Copperplate, fantasy"),
    font("Display", "Bebas Neue", "Bebas Neue, cursive"),
    font("Display", "Anton", "Anton, sans-serif"),
    font("Display", "Oswald", "Oswald, sans-serif"),
    font("Script", "Brush Script MT", "Brush Script MT, cursive"),
    font("Script", "Lucida Handwriting", "Lucida Handwriting, cursive"),
    font("Script", "Pacifico", "Pacifico, cursive"),
    font("Script", "Dancing Script", "Dancing Script, cursive"),
    font("Script", "Alex Brush", "Alex Brush, cursive"),
];
