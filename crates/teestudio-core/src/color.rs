//! RGBA colours parsed from CSS-style hex strings.

use crate::error::ColorParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit straight-alpha colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const BLACK: RgbaColor = RgbaColor::rgb(0, 0, 0);
    pub const WHITE: RgbaColor = RgbaColor::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let parsed = match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                (nibble(0), nibble(1), nibble(2), Ok(255))
            }
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(ColorParseError::InvalidLength(s.to_string())),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self { r, g, b, a }),
            _ => Err(ColorParseError::InvalidDigit(s.to_string())),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbaColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for RgbaColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbaColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Quick-pick fill colours offered next to the canvas.
pub const PALETTE: [RgbaColor; 16] = [
    RgbaColor::rgb(0x00, 0x00, 0x00),
    RgbaColor::rgb(0xFF, 0xFF, 0xFF),
    RgbaColor::rgb(0xFF, 0x00, 0x00),
    RgbaColor::rgb(0x00, 0xFF, 0x00),
    RgbaColor::rgb(0x00, 0x00, 0xFF),
    RgbaColor::rgb(0xFF, 0xFF, 0x00),
    RgbaColor::rgb(0xFF, 0x00, 0xFF),
    RgbaColor::rgb(0x00, 0xFF, 0xFF),
    RgbaColor::rgb(0xFF, 0xA5, 0x00),
    RgbaColor::rgb(0x80, 0x00, 0x80),
    RgbaColor::rgb(0xFF, 0xC0, 0xCB),
    RgbaColor::rgb(0xA5, 0x2A, 0x2A),
    RgbaColor::rgb(0x80, 0x80, 0x80),
    RgbaColor::rgb(0x00, 0xCE, 0xD1),
    RgbaColor::rgb(0x32, 0xCD, 0x32),
    RgbaColor::rgb(0xDC, 0x14, 0x3C),
];
