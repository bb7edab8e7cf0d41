//! # TeeStudio
//!
//! A multi-part garment design canvas. Shoppers place text, shapes and
//! artwork on the front, back and sleeves of a T-shirt, then export a
//! snapshot of the finished view.
//!
//! ## Architecture
//!
//! TeeStudio is organized as a workspace with multiple crates:
//!
//! 1. **teestudio-core** - Geometry, garment parts and colours, zones, errors, events
//! 2. **teestudio-settings** - Editor configuration, validation and persistence
//! 3. **teestudio-designer** - Element model, transforms, scene store, history,
//!    interaction, assets, rendering and export
//! 4. **teestudio** - Logging bootstrap and re-exports for the hosting page
//!
//! ## Features
//!
//! - **Per-part design areas**: artwork stays inside the print zone of its part
//! - **Direct manipulation**: drag, eight resize handles, rotation handle
//! - **Aspect-locked images**: uploads and clipart keep their natural proportions
//! - **Undo/Redo**: linear history of full scene snapshots
//! - **Keyboard shortcuts**: nudge, snap, rotate, duplicate, delete
//! - **Export**: PNG or JPEG of the current part

pub use teestudio_designer as designer;
pub use teestudio_settings as settings;

pub use teestudio_core::{
    EditorEvent, ElementId, Error, EventDispatcher, GarmentColor, GarmentPart, Point, Rect,
    Result, RgbaColor,
};

pub use teestudio_designer::{
    BaseArtwork, Bitmap, DesignEditor, Element, ElementPatch, ExportFormat, ExportOptions,
    ExportedImage, FsAssetLoader, KeyEvent, NewElement, ShapeType, TextPayload, FONT_CATALOG,
    TEXT_PRESETS,
};

pub use teestudio_settings::{EditorConfig, FeatureSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
