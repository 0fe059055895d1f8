//! Bundled data sources for the screen.
//!
//! This module loads the static resources the screen is built from: the show
//! catalog and the image asset manifest. Both are embedded at compile time and
//! can be replaced by files named in the plugin configuration.
//!
//! # Modules
//!
//! - `catalog`: JSON show catalog ("load all records")
//! - `assets`: Asset identifier resolution with placeholder fallback

pub mod assets;
pub mod catalog;

pub use assets::{AssetCatalog, ImageAsset};
