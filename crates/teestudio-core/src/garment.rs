//! Garment parts and base colour variants.

use crate::color::RgbaColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four printable garment surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentPart {
    Front,
    Back,
    LeftSleeve,
    RightSleeve,
}

impl GarmentPart {
    pub const ALL: [GarmentPart; 4] = [
        GarmentPart::Front,
        GarmentPart::Back,
        GarmentPart::LeftSleeve,
        GarmentPart::RightSleeve,
    ];

    /// Position in [`GarmentPart::ALL`]; used for per-part tables.
    pub fn index(self) -> usize {
        match self {
            GarmentPart::Front => 0,
            GarmentPart::Back => 1,
            GarmentPart::LeftSleeve => 2,
            GarmentPart::RightSleeve => 3,
        }
    }

    /// File-name slug used in asset paths.
    pub fn slug(self) -> &'static str {
        match self {
            GarmentPart::Front => "front",
            GarmentPart::Back => "back",
            GarmentPart::LeftSleeve => "left-sleeve",
            GarmentPart::RightSleeve => "right-sleeve",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GarmentPart::Front => "Front",
            GarmentPart::Back => "Back",
            GarmentPart::LeftSleeve => "Left Sleeve",
            GarmentPart::RightSleeve => "Right Sleeve",
        }
    }
}

impl Default for GarmentPart {
    fn default() -> Self {
        Self::Front
    }
}

impl fmt::Display for GarmentPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GarmentPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        GarmentPart::ALL
            .into_iter()
            .find(|p| p.slug() == normalized)
            .ok_or_else(|| format!("Unknown garment part: {}", s))
    }
}

/// Base colour variant of the garment artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentColor {
    White,
    Black,
    Blue,
    Camel,
    Lavender,
    Lime,
    Pink,
    Yellow,
}

impl GarmentColor {
    pub const ALL: [GarmentColor; 8] = [
        GarmentColor::White,
        GarmentColor::Black,
        GarmentColor::Blue,
        GarmentColor::Camel,
        GarmentColor::Lavender,
        GarmentColor::Lime,
        GarmentColor::Pink,
        GarmentColor::Yellow,
    ];

    /// Asset folder holding the artwork for this colour.
    pub fn folder(self) -> &'static str {
        match self {
            GarmentColor::White => "white",
            GarmentColor::Black => "black",
            GarmentColor::Blue => "blue",
            GarmentColor::Camel => "camel",
            GarmentColor::Lavender => "lavender",
            GarmentColor::Lime => "lime",
            GarmentColor::Pink => "pink",
            GarmentColor::Yellow => "yellow",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GarmentColor::White => "White",
            GarmentColor::Black => "Black",
            GarmentColor::Blue => "Blue",
            GarmentColor::Camel => "Camel",
            GarmentColor::Lavender => "Lavender",
            GarmentColor::Lime => "Lime",
            GarmentColor::Pink => "Pink",
            GarmentColor::Yellow => "Yellow",
        }
    }

    /// Swatch shown in the colour picker.
    pub fn swatch(self) -> RgbaColor {
        match self {
            GarmentColor::White => RgbaColor::rgb(0xFF, 0xFF, 0xFF),
            GarmentColor::Black => RgbaColor::rgb(0x00, 0x00, 0x00),
            GarmentColor::Blue => RgbaColor::rgb(0x00, 0x66, 0xCC),
            GarmentColor::Camel => RgbaColor::rgb(0xC1, 0x9A, 0x6B),
            GarmentColor::Lavender => RgbaColor::rgb(0xE6, 0xE6, 0xFA),
            GarmentColor::Lime => RgbaColor::rgb(0x32, 0xCD, 0x32),
            GarmentColor::Pink => RgbaColor::rgb(0xFF, 0xC0, 0xCB),
            GarmentColor::Yellow => RgbaColor::rgb(0xFF, 0xFF, 0x00),
        }
    }
}

impl Default for GarmentColor {
    fn default() -> Self {
        Self::White
    }
}

impl fmt::Display for GarmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for GarmentColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        GarmentColor::ALL
            .into_iter()
            .find(|c| c.folder() == normalized)
            .ok_or_else(|| format!("Unknown garment colour: {}", s))
    }
}
