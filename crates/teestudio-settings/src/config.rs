//! Editor configuration for TeeStudio
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats, with a default location in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas (pixel size, background, garment fit)
//! - Zones (design area per garment part)
//! - Handles (visual and hit sizes of the selection controls)
//! - Constraints (size floors, nudge and rotation steps)
//! - Placement (initial sizing of clipart, uploads and shapes)
//! - Assets (where garment artwork lives)
//! - Features (switches for the reduced tool variant)
//! - History (snapshot limit)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use teestudio_core::{GarmentPart, Rect, RgbaColor, ZoneRegistry, DEFAULT_ZONES};

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Fill behind the garment artwork
    pub background: RgbaColor,
    /// Fraction of the canvas the garment artwork may occupy
    pub garment_fill: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 700,
            background: RgbaColor::rgb(0x2D, 0x37, 0x48),
            garment_fill: 0.95,
        }
    }
}

impl CanvasSettings {
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

/// Design area for every garment part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneSettings {
    pub front: Rect,
    pub back: Rect,
    pub left_sleeve: Rect,
    pub right_sleeve: Rect,
}

impl Default for ZoneSettings {
    fn default() -> Self {
        let [front, back, left_sleeve, right_sleeve] = DEFAULT_ZONES;
        Self {
            front,
            back,
            left_sleeve,
            right_sleeve,
        }
    }
}

impl ZoneSettings {
    pub fn registry(&self) -> ZoneRegistry {
        ZoneRegistry::new([self.front, self.back, self.left_sleeve, self.right_sleeve])
    }
}

/// Selection handle geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleSettings {
    /// Drawn size of a resize handle
    pub visual_size: f64,
    /// Half-extent of the square hot zone around each resize handle
    pub hit_size: f64,
    /// Distance of the rotation handle centre above the element's top edge
    pub rotation_offset: f64,
    /// Hit radius of the rotation handle
    pub rotation_hit_radius: f64,
    /// Drawn radius of the rotation handle
    pub rotation_visual_radius: f64,
    /// Gap between the element and its dashed selection outline
    pub selection_padding: f64,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            visual_size: 16.0,
            hit_size: 20.0,
            rotation_offset: 35.0,
            rotation_hit_radius: 15.0,
            rotation_visual_radius: 12.0,
            selection_padding: 3.0,
        }
    }
}

/// Size floors and keyboard steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSettings {
    /// Smallest width or height any element may have
    pub min_element_size: f64,
    /// Smallest font size reachable by resizing text
    pub min_font_size: f64,
    /// Gap kept between text and the canvas edge
    pub text_canvas_margin: f64,
    /// Offset applied to both axes when duplicating
    pub duplicate_offset: f64,
    /// Arrow key nudge
    pub nudge_step: f64,
    /// Arrow key nudge with Shift held
    pub nudge_step_large: f64,
    /// Rotation applied by the rotate shortcuts, in degrees
    pub rotate_step: f64,
}

impl Default for ConstraintSettings {
    fn default() -> Self {
        Self {
            min_element_size: 20.0,
            min_font_size: 8.0,
            text_canvas_margin: 5.0,
            duplicate_offset: 20.0,
            nudge_step: 1.0,
            nudge_step_large: 10.0,
            rotate_step: 15.0,
        }
    }
}

/// Initial sizing rule for images and shapes added to a zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementProfile {
    /// Largest share of the zone's width and height the element may take
    pub max_fraction: f64,
    /// Floor applied to each dimension before fitting
    pub min_size: f64,
}

/// Placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Clipart picked from the gallery
    pub clipart: PlacementProfile,
    /// Images uploaded by the user
    pub upload: PlacementProfile,
    /// Requested size of a new shape before fitting
    pub default_shape_size: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            clipart: PlacementProfile {
                max_fraction: 0.6,
                min_size: 40.0,
            },
            upload: PlacementProfile {
                max_fraction: 0.7,
                min_size: 50.0,
            },
            default_shape_size: 100.0,
        }
    }
}

/// Garment artwork locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory that `url_prefix` maps onto
    pub root: PathBuf,
    /// Prefix of every asset path
    pub url_prefix: String,
    /// Folder holding the colour-less fallback artwork
    pub generic_folder: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            url_prefix: "/assets".to_string(),
            generic_folder: "generic".to_string(),
        }
    }
}

/// Feature switches
///
/// The full tool has everything on; [`FeatureSettings::reduced`] matches the
/// thinner split tools/canvas page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSettings {
    pub duplicate: bool,
    pub rotate: bool,
    pub upload: bool,
    pub shapes: bool,
}

impl Default for FeatureSettings {
    fn default() -> Self {
        Self {
            duplicate: true,
            rotate: true,
            upload: true,
            shapes: true,
        }
    }
}

impl FeatureSettings {
    pub fn reduced() -> Self {
        Self {
            duplicate: false,
            rotate: false,
            upload: false,
            shapes: true,
        }
    }
}

/// History settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum snapshots kept; unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_snapshots: Option<usize>,
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Whether the design area outline is drawn
    pub show_zone_outline: bool,
    pub canvas: CanvasSettings,
    pub zones: ZoneSettings,
    pub handles: HandleSettings,
    pub constraints: ConstraintSettings,
    pub placement: PlacementSettings,
    pub assets: AssetSettings,
    pub features: FeatureSettings,
    pub history: HistorySettings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_zone_outline: true,
            canvas: CanvasSettings::default(),
            zones: ZoneSettings::default(),
            handles: HandleSettings::default(),
            constraints: ConstraintSettings::default(),
            placement: PlacementSettings::default(),
            assets: AssetSettings::default(),
            features: FeatureSettings::default(),
            history: HistorySettings::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config path: `<config dir>/teestudio/editor.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(base.join("teestudio").join("editor.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config
            .validate()
            .inspect_err(|e| tracing::warn!("Rejected editor config {}: {}", path.display(), e))?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No editor config at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_for(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::out_of_range(
                "canvas",
                format!("{}x{}", self.canvas.width, self.canvas.height),
            ));
        }
        if !(self.canvas.garment_fill > 0.0 && self.canvas.garment_fill <= 1.0) {
            return Err(ConfigError::out_of_range(
                "canvas.garment_fill",
                self.canvas.garment_fill,
            ));
        }

        let c = &self.constraints;
        for (key, value) in [
            ("constraints.min_element_size", c.min_element_size),
            ("constraints.min_font_size", c.min_font_size),
            ("constraints.nudge_step", c.nudge_step),
            ("constraints.nudge_step_large", c.nudge_step_large),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        if !(c.text_canvas_margin >= 0.0) {
            return Err(ConfigError::out_of_range(
                "constraints.text_canvas_margin",
                c.text_canvas_margin,
            ));
        }

        let h = &self.handles;
        if !(h.visual_size > 0.0) {
            return Err(ConfigError::out_of_range("handles.visual_size", h.visual_size));
        }
        if h.hit_size < h.visual_size / 2.0 {
            return Err(ConfigError::out_of_range("handles.hit_size", h.hit_size));
        }
        if !(h.rotation_hit_radius > 0.0) {
            return Err(ConfigError::out_of_range(
                "handles.rotation_hit_radius",
                h.rotation_hit_radius,
            ));
        }

        for (key, profile) in [
            ("placement.clipart", self.placement.clipart),
            ("placement.upload", self.placement.upload),
        ] {
            if !(profile.max_fraction > 0.0 && profile.max_fraction <= 1.0) {
                return Err(ConfigError::out_of_range(key, profile.max_fraction));
            }
            if !(profile.min_size > 0.0) {
                return Err(ConfigError::out_of_range(key, profile.min_size));
            }
        }

        if self.history.max_snapshots == Some(0) {
            return Err(ConfigError::out_of_range("history.max_snapshots", 0));
        }

        let canvas = self.canvas.bounds();
        let registry = self.zones.registry();
        for (part, zone) in registry.iter() {
            self.validate_zone(part, &zone, &canvas)?;
        }

        Ok(())
    }

    fn validate_zone(&self, part: GarmentPart, zone: &Rect, canvas: &Rect) -> Result<(), ConfigError> {
        let min = self.constraints.min_element_size;
        if zone.width < min || zone.height < min {
            return Err(ConfigError::InvalidZone {
                part: part.display_name().to_string(),
                reason: format!("smaller than the {}px element floor", min),
            });
        }
        if !canvas.contains_rect(zone, 0.0) {
            return Err(ConfigError::InvalidZone {
                part: part.display_name().to_string(),
                reason: "outside canvas".to_string(),
            });
        }
        Ok(())
    }
}
