//! # TeeStudio Core
//!
//! Core types and utilities for TeeStudio.
//! Provides the geometry primitives, garment parts and colour variants,
//! the per-part zone registry, error taxonomy and the editor event dispatcher.

pub mod color;
pub mod error;
pub mod event;
pub mod garment;
pub mod geometry;
pub mod types;
pub mod zones;

pub use color::{RgbaColor, PALETTE};
pub use error::{AssetError, ColorParseError, DecodeError, Error, ExportError, Result};
pub use event::{EditorEvent, EventDispatcher};
pub use garment::{GarmentColor, GarmentPart};
pub use geometry::{fit_within, Point, Rect};
pub use types::ElementId;
pub use zones::{ZoneRegistry, DEFAULT_ZONES};
