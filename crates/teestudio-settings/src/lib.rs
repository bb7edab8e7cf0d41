//! TeeStudio Settings Crate
//!
//! Handles editor configuration: canvas size, design areas, handle geometry,
//! placement rules, asset locations and feature switches.

pub mod config;
pub mod error;

pub use config::{
    AssetSettings, CanvasSettings, ConstraintSettings, EditorConfig, FeatureSettings,
    HandleSettings, HistorySettings, PlacementProfile, PlacementSettings, ZoneSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
