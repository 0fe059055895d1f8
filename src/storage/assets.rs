//! Image asset resolution.
//!
//! Asset identifiers used by show records and action buttons resolve through
//! an [`AssetCatalog`] built from a TOML manifest. Unknown identifiers never
//! fail: they resolve to a 1x1 placeholder so a missing poster or icon leaves
//! an empty slot instead of aborting the screen.
//!
//! # Manifest Format
//!
//! ```toml
//! [show-s1e1]
//! width = 1280
//! height = 720
//! glyph = "S1E1"
//! ```

use crate::domain::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUNDLED_MANIFEST: &str = include_str!("../../data/assets.toml");

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AssetEntry {
    width: u32,
    height: u32,
    #[serde(default)]
    glyph: String,
}

/// A resolved image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    /// Identifier the asset was requested with.
    pub name: String,
    /// Pixel width (1 for placeholders).
    pub width: f32,
    /// Pixel height (1 for placeholders).
    pub height: f32,
    /// Text drawn in place of the bitmap on a terminal.
    pub glyph: String,
    /// Whether the identifier was unknown.
    pub is_placeholder: bool,
}

impl ImageAsset {
    /// Empty 1x1 image standing in for an unresolved identifier.
    #[must_use]
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            width: 1.0,
            height: 1.0,
            glyph: String::new(),
            is_placeholder: true,
        }
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Lookup table from asset identifier to image metadata.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    entries: BTreeMap<String, AssetEntry>,
}

impl AssetCatalog {
    /// Loads the manifest bundled with the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Asset`] if the embedded manifest fails to parse.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_MANIFEST)
    }

    /// Loads a manifest from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Io`] if the file cannot be read and
    /// [`ScreenError::Asset`] if it is not a valid manifest.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parses manifest TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Asset`] on invalid TOML or missing fields.
    pub fn parse(contents: &str) -> Result<Self> {
        let entries = toml::from_str(contents)
            .map_err(|e| ScreenError::Asset(format!("Failed to parse asset manifest: {e}")))?;
        Ok(Self { entries })
    }

    /// Resolves an identifier, degrading to a placeholder on a miss.
    #[must_use]
    pub fn resolve(&self, name: &str) -> ImageAsset {
        match self.entries.get(name) {
            Some(entry) => ImageAsset {
                name: name.to_string(),
                width: entry.width as f32,
                height: entry.height as f32,
                glyph: entry.glyph.clone(),
                is_placeholder: false,
            },
            None => {
                tracing::debug!(asset = %name, "asset not found, using placeholder");
                ImageAsset::placeholder(name)
            }
        }
    }

    /// Number of known assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the manifest is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_asset() {
        let assets = AssetCatalog::bundled().unwrap();
        let add = assets.resolve("add");
        assert!(!add.is_placeholder);
        assert_eq!(add.glyph, "+");
        assert!((add.aspect_ratio() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_asset_degrades_to_placeholder() {
        let assets = AssetCatalog::default();
        let missing = assets.resolve("nope");
        assert!(missing.is_placeholder);
        assert_eq!(missing.name, "nope");
        assert!((missing.width - 1.0).abs() < f32::EPSILON);
        assert!(missing.glyph.is_empty());
    }

    #[test]
    fn invalid_manifest_is_asset_error() {
        let err = AssetCatalog::parse("[add]\nwidth = \"wide\"").unwrap_err();
        assert!(matches!(err, ScreenError::Asset(_)));
    }
}
