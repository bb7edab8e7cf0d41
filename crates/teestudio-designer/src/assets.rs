//! Base garment artwork lookup.
//!
//! Artwork lives at `{prefix}/{colour}/{part}.png`. When the colour-specific file
//! cannot be loaded the resolver tries `{prefix}/{generic}/{part}.png` once, and
//! when that fails too the renderer draws a placeholder instead.

use crate::model::Bitmap;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};
use teestudio_core::{AssetError, GarmentColor, GarmentPart};
use teestudio_settings::AssetSettings;

/// Loads a bitmap from an asset path.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    async fn load(&self, path: &str) -> Result<Bitmap, AssetError>;
}

/// Loader backed by a directory on disk.
///
/// `/assets/black/front.png` maps to `{root}/black/front.png` when the prefix is `/assets`.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
    url_prefix: String,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn from_settings(settings: &AssetSettings) -> Self {
        Self::new(settings.root.clone(), settings.url_prefix.clone())
    }

    /// File backing `path`, or `None` when the path escapes the root.
    pub fn file_for(&self, path: &str) -> Option<PathBuf> {
        let relative = path
            .strip_prefix(self.url_prefix.as_str())
            .unwrap_or(path)
            .trim_start_matches('/');
        let relative = Path::new(relative);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl AssetLoader for FsAssetLoader {
    async fn load(&self, path: &str) -> Result<Bitmap, AssetError> {
        let file = self.file_for(path).ok_or_else(|| AssetError::NotFound {
            path: path.to_string(),
        })?;
        let bytes = tokio::fs::read(&file).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AssetError::NotFound {
                path: path.to_string(),
            },
            _ => AssetError::Unreadable {
                path: path.to_string(),
                reason: e.to_string(),
            },
        })?;
        Bitmap::decode(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Loader serving bitmaps registered in memory.
///
/// Keeps a log of requested paths.
#[derive(Debug, Default)]
pub struct MemoryAssetLoader {
    assets: HashMap<String, Bitmap>,
    requests: Mutex<Vec<String>>,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bitmap: Bitmap) {
        self.assets.insert(path.into(), bitmap);
    }

    pub fn with(mut self, path: impl Into<String>, bitmap: Bitmap) -> Self {
        self.insert(path, bitmap);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

#[async_trait]
impl AssetLoader for MemoryAssetLoader {
    async fn load(&self, path: &str) -> Result<Bitmap, AssetError> {
        self.requests
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(path.to_string());
        self.assets
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_string(),
            })
    }
}

/// Which step of the lookup produced the artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkSource {
    /// Colour-specific asset.
    Primary,
    /// Generic part asset.
    Fallback,
}

/// Base garment artwork for one (colour, part).
#[derive(Debug, Clone, PartialEq)]
pub enum BaseArtwork {
    Loaded {
        bitmap: Bitmap,
        source: ArtworkSource,
    },
    /// Both lookups failed; rendered as a placeholder.
    Missing,
}

impl BaseArtwork {
    pub fn bitmap(&self) -> Option<&Bitmap> {
        match self {
            BaseArtwork::Loaded { bitmap, .. } => Some(bitmap),
            BaseArtwork::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, BaseArtwork::Missing)
    }
}

/// `{prefix}/{colour}/{part}.png`
pub fn asset_path(url_prefix: &str, color: GarmentColor, part: GarmentPart) -> String {
    format!(
        "{}/{}/{}.png",
        url_prefix.trim_end_matches('/'),
        color.folder(),
        part.slug()
    )
}

/// `{prefix}/{generic}/{part}.png`
pub fn generic_asset_path(url_prefix: &str, generic_folder: &str, part: GarmentPart) -> String {
    format!(
        "{}/{}/{}.png",
        url_prefix.trim_end_matches('/'),
        generic_folder,
        part.slug()
    )
}

/// Resolves and caches base garment artwork.
pub struct AssetResolver {
    loader: Arc<dyn AssetLoader>,
    url_prefix: String,
    generic_folder: String,
    cache: HashMap<(GarmentColor, GarmentPart), BaseArtwork>,
}

impl AssetResolver {
    pub fn new(loader: Arc<dyn AssetLoader>, settings: &AssetSettings) -> Self {
        Self {
            loader,
            url_prefix: settings.url_prefix.clone(),
            generic_folder: settings.generic_folder.clone(),
            cache: HashMap::new(),
        }
    }

    /// Artwork for (`color`, `part`). Never fails: a terminal miss is [`BaseArtwork::Missing`].
    pub async fn resolve(&mut self, color: GarmentColor, part: GarmentPart) -> BaseArtwork {
        if let Some(hit) = self.cache.get(&(color, part)) {
            return hit.clone();
        }

        let primary = asset_path(&self.url_prefix, color, part);
        let artwork = match self.loader.load(&primary).await {
            Ok(bitmap) => BaseArtwork::Loaded {
                bitmap,
                source: ArtworkSource::Primary,
            },
            Err(err) => {
                tracing::debug!("{}, trying generic artwork", err);
                let fallback = generic_asset_path(&self.url_prefix, &self.generic_folder, part);
                match self.loader.load(&fallback).await {
                    Ok(bitmap) => BaseArtwork::Loaded {
                        bitmap,
                        source: ArtworkSource::Fallback,
                    },
                    Err(err) => {
                        tracing::warn!("No artwork for {} {}: {}", color, part, err);
                        BaseArtwork::Missing
                    }
                }
            }
        };

        if !artwork.is_missing() {
            self.cache.insert((color, part), artwork.clone());
        }
        artwork
    }

    pub fn cached(&self, color: GarmentColor, part: GarmentPart) -> Option<&BaseArtwork> {
        self.cache.get(&(color, part))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl std::fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetResolver")
            .field("url_prefix", &self.url_prefix)
            .field("generic_folder", &self.generic_folder)
            .field("cached", &self.cache.len())
            .finish()
    }
}
