//! # TeeStudio Designer
//!
//! This crate provides the multi-part garment design canvas: an interactive 2D
//! scene editor for placing, moving, resizing, rotating and layering text, shape
//! and image elements on the front, back and sleeves of a shirt.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Elements**: text, rectangles, circles and images, each owned by one garment part
//! - **Bitmaps**: immutable decoded images shared between elements
//! - **Presets**: sample headlines and the font catalogue
//!
//! ### Editing
//! - **Scene Store**: ordered element list, selection and active (part, colour)
//! - **History**: linear undo/redo over full scene snapshots
//! - **Interaction**: pointer state machine with cursor feedback
//! - **Keyboard**: nudge, snap, rotate, duplicate, delete, undo and redo shortcuts
//!
//! ### Output
//! - **Assets**: base garment artwork with a generic fallback
//! - **Renderer**: tiny-skia frame rendering with selection decorations
//! - **Export**: PNG or JPEG snapshot of the current view
//!
//! ## Architecture
//!
//! ```text
//! DesignEditor
//!   ├── InteractionController (pointer gestures)
//!   ├── SceneStore (elements, selection, context)
//!   │     └── ZoneRegistry (per-part design areas)
//!   ├── History (scene snapshots)
//!   ├── AssetResolver (garment artwork)
//!   └── Renderer (frames)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use teestudio_designer::{DesignEditor, FsAssetLoader};
//!
//! let config = EditorConfig::default();
//! let loader = Arc::new(FsAssetLoader::from_settings(&config.assets));
//! let mut editor = DesignEditor::new(config, loader, GarmentPart::Front, GarmentColor::Black)?;
//! editor.load_artwork().await;
//!
//! editor.add_text_preset(&TEXT_PRESETS[0]);
//! let frame = editor.render()?;
//! ```

pub mod assets;
pub mod editor;
pub mod export;
pub mod font_manager;
pub mod history;
pub mod interaction;
pub mod keyboard;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod scene_store;
pub mod transform;

pub use assets::{
    ArtworkSource, AssetLoader, AssetResolver, BaseArtwork, FsAssetLoader, MemoryAssetLoader,
};
pub use editor::DesignEditor;
pub use export::{ExportFormat, ExportOptions, ExportedImage};
pub use history::History;
pub use interaction::{CursorIcon, Feedback, InteractionController, InteractionState, Tool};
pub use keyboard::{Key, KeyEvent, Modifiers, Shortcut, Snap};
pub use model::{
    Bitmap, Element, ElementKind, ElementPatch, FontStyle, FontWeight, NewElement, Payload,
    Placement, ShapeType, TextPayload, TextPreset, FONT_CATALOG, TEXT_PRESETS,
};
pub use renderer::{Frame, Renderer};
pub use scene::Scene;
pub use scene_store::{LayerRow, SceneStore, ZOrder};
pub use transform::{Limits, ResizeHandle, ResizeOutcome};
