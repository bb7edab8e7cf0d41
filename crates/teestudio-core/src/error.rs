//! Error handling for TeeStudio
//!
//! Provides error types for the layers of the design editor:
//! - Asset errors (base garment artwork lookups)
//! - Decode errors (user uploads and asset bytes)
//! - Export errors (rasterizing the current view)
//! - Colour parse errors (hex strings from config and palettes)
//!
//! None of these are fatal to an editing session. Asset failures are recovered by the
//! fallback chain, decode failures are handed back to the upload collaborator.

use thiserror::Error;

/// Asset error type
///
/// Raised by asset loaders when a garment artwork path cannot be turned into a bitmap.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// Nothing exists at the requested path
    #[error("Asset not found: {path}")]
    NotFound {
        /// The asset path that was requested.
        path: String,
    },

    /// The asset exists but could not be read
    #[error("Failed to read asset {path}: {reason}")]
    Unreadable {
        /// The asset path that was requested.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },

    /// The asset bytes are not a usable image
    #[error("Failed to decode asset {path}: {source}")]
    Decode {
        /// The asset path that was requested.
        path: String,
        /// The decode failure.
        source: DecodeError,
    },
}

impl AssetError {
    /// Path of the asset that failed to load.
    pub fn path(&self) -> &str {
        match self {
            AssetError::NotFound { path }
            | AssetError::Unreadable { path, .. }
            | AssetError::Decode { path, .. } => path,
        }
    }
}

/// Decode error type
///
/// Represents failures turning encoded bytes into an immutable bitmap.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The bytes are not in a supported image format
    #[error("Unsupported image format: {reason}")]
    UnsupportedFormat {
        /// The reason reported by the decoder.
        reason: String,
    },

    /// The image is malformed or truncated
    #[error("Malformed image: {reason}")]
    Malformed {
        /// The reason reported by the decoder.
        reason: String,
    },

    /// The image decoded to zero pixels in one dimension
    #[error("Image has no pixels ({width}x{height})")]
    Empty {
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
    },
}

/// Export error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The canvas size cannot back a pixmap
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The encoder rejected the frame
    #[error("Failed to encode {format}: {reason}")]
    Encode {
        /// The output format name.
        format: String,
        /// The reason reported by the encoder.
        reason: String,
    },
}

/// Colour parse error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Missing leading `#`
    #[error("Colour '{0}' must start with '#'")]
    MissingHash(String),

    /// Wrong number of hex digits
    #[error("Colour '{0}' must have 3, 6 or 8 hex digits")]
    InvalidLength(String),

    /// A digit is not hexadecimal
    #[error("Colour '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// Main error type for TeeStudio
///
/// Aggregates the layer errors so hosts can propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Asset error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Decode error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Colour parse error
    #[error(transparent)]
    Color(#[from] ColorParseError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an asset error
    pub fn is_asset_error(&self) -> bool {
        matches!(self, Error::Asset(_))
    }

    /// Check if this is a decode error
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::Asset(AssetError::Decode { .. }))
    }
}

/// Result type alias for TeeStudio operations
pub type Result<T> = std::result::Result<T, Error>;
