//! JSON show catalog.
//!
//! The screen's records ship as a bundled JSON resource embedded at compile
//! time. A catalog file with the same format can be supplied through the
//! `catalog_file` configuration key.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "shows": [
//!     { "title": "A Study in Pink", "detail": "...", "image": "show-s1e1" }
//!   ]
//! }
//! ```

use crate::domain::error::{Result, ScreenError};
use crate::domain::{Show, ShowCollection};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../data/shows.json");

/// Catalog container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    /// Version of the catalog format.
    version: u32,

    /// Records in display order.
    #[serde(default)]
    shows: Vec<Show>,
}

/// Loads the catalog bundled with the plugin.
///
/// # Errors
///
/// Returns [`ScreenError::Catalog`] if the embedded resource fails to parse.
pub fn load_bundled() -> Result<ShowCollection> {
    parse(BUNDLED_CATALOG)
}

/// Loads a catalog from a JSON file.
///
/// # Errors
///
/// Returns [`ScreenError::Io`] if the file cannot be read and
/// [`ScreenError::Catalog`] if its content is not a valid catalog.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ShowCollection> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading show catalog");
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

/// Parses catalog JSON into a collection, keeping record order.
///
/// # Errors
///
/// Returns [`ScreenError::Catalog`] on malformed JSON or missing fields.
pub fn parse(contents: &str) -> Result<ShowCollection> {
    let data: CatalogData = serde_json::from_str(contents)
        .map_err(|e| ScreenError::Catalog(format!("Failed to parse catalog: {e}")))?;

    tracing::debug!(version = data.version, show_count = data.shows.len(), "catalog parsed");
    Ok(ShowCollection::new(data.shows))
}
