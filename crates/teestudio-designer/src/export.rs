//! One-shot export of the current view to an encoded image.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use teestudio_core::{ExportError, GarmentPart};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    /// Quality 1-100.
    Jpeg { quality: u8 },
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg { .. } => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg { .. } => "image/jpeg",
        }
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Png
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Keep the zone outline and selection decorations in the output.
    pub include_guides: bool,
}

/// An encoded snapshot ready to hand to a save or share collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
    pub suggested_name: String,
}

/// `tshirt-{part}.{ext}`
pub fn suggested_file_name(part: GarmentPart, format: ExportFormat) -> String {
    format!("tshirt-{}.{}", part.slug(), format.extension())
}

/// Encodes a rendered frame.
pub fn encode(image: &RgbaImage, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let mut out = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => {
            image
                .write_to(&mut out, ImageFormat::Png)
                .map_err(|e| ExportError::Encode {
                    format: "PNG".to_string(),
                    reason: e.to_string(),
                })?;
        }
        ExportFormat::Jpeg { quality } => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
                .encode_image(&rgb)
                .map_err(|e| ExportError::Encode {
                    format: "JPEG".to_string(),
                    reason: e.to_string(),
                })?;
        }
    }
    Ok(out.into_inner())
}
