//! Immutable decoded bitmaps shared between elements.

use image::RgbaImage;
use std::fmt;
use std::sync::{Arc, OnceLock};
use teestudio_core::DecodeError;
use tiny_skia::{IntSize, Pixmap};
use uuid::Uuid;

struct BitmapInner {
    id: Uuid,
    image: RgbaImage,
    pixmap: OnceLock<Option<Pixmap>>,
}

/// A decoded image handle.
///
/// Cloning shares the pixels. Two handles are equal when they come from the same
/// decode, never by comparing pixel data.
#[derive(Clone)]
pub struct Bitmap {
    inner: Arc<BitmapInner>,
}

impl Bitmap {
    /// Wraps already decoded pixels.
    pub fn from_rgba(image: RgbaImage) -> Result<Self, DecodeError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(DecodeError::Empty { width, height });
        }
        Ok(Self {
            inner: Arc::new(BitmapInner {
                id: Uuid::new_v4(),
                image,
                pixmap: OnceLock::new(),
            }),
        })
    }

    /// Decodes PNG, JPEG, GIF, WebP or any other format the `image` crate recognises.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Malformed {
                reason: "no data".to_string(),
            });
        }
        let decoded = image::load_from_memory(bytes).map_err(|e| match e {
            image::ImageError::Unsupported(err) => DecodeError::UnsupportedFormat {
                reason: err.to_string(),
            },
            other => DecodeError::Malformed {
                reason: other.to_string(),
            },
        })?;
        Self::from_rgba(decoded.to_rgba8())
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn width(&self) -> u32 {
        self.inner.image.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.image.height()
    }

    /// Natural width divided by natural height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }

    pub fn image(&self) -> &RgbaImage {
        &self.inner.image
    }

    /// Premultiplied copy for blitting, built on first use.
    pub(crate) fn pixmap(&self) -> Option<&Pixmap> {
        self.inner
            .pixmap
            .get_or_init(|| {
                let size = IntSize::from_wh(self.width(), self.height())?;
                let mut data = self.inner.image.as_raw().clone();
                for px in data.chunks_exact_mut(4) {
                    let a = px[3] as u16;
                    px[0] = (px[0] as u16 * a / 255) as u8;
                    px[1] = (px[1] as u16 * a / 255) as u8;
                    px[2] = (px[2] as u16 * a / 255) as u8;
                }
                Pixmap::from_vec(data, size)
            })
            .as_ref()
    }
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("id", &self.inner.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
