//! FlexChill: A Zellij plugin rendering a show detail screen.
//!
//! The screen is a tree of view nodes laid out by a flexbox engine and painted
//! onto the terminal grid:
//! - A poster image of the featured show
//! - Rating stars and an info row (year, rating, length)
//! - Series label and title
//! - Description with cast and creators
//! - Action buttons and tab selector
//! - A scrollable list with one row per show in the catalog

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Viewport, scroll and list cursor                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Layout Layer  │   │ Storage Layer │
//! │ (ui/)         │   │ (layout/)     │   │ (storage/)    │
//! │ - Composition │   │ - Flexbox     │   │ - Catalog     │
//! │ - List model  │   │ - Text measure│   │ - Assets      │
//! │ - Rendering   │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  View tree (view/), Domain (domain/),               │
//! │  Platform paths (infrastructure/)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Screen state with event/action model
//! - [`domain`]: Show records and errors
//! - [`infrastructure`]: Sandbox paths
//! - [`layout`]: Flexbox layout pass over the view tree
//! - [`storage`]: Bundled and on-disk catalog and asset manifest
//! - [`ui`]: Screen composition, list model, theming and rendering
//! - [`view`]: Node tree and content kinds
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/flexchill.wasm" {
//!         featured_index "2"
//!         row_height "100"
//!         screen_file "~/.config/flexchill/screen.toml"
//!         catalog_file "~/.config/flexchill/shows.json"
//!         assets_file "~/.config/flexchill/assets.toml"
//!         theme "chill-light"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: parse configuration, build the node tree once. A failed build
//!    replaces the whole screen with an unavailable message.
//! 2. **Render**: every pane size change re-runs the layout pass, then the
//!    tree is painted into a cell grid and printed as ANSI.
//! 3. **Input**: `j`/`k` move the list cursor, `Enter` reports the row,
//!    `PageDown`/`PageUp` scroll the screen, `q` hides the plugin.
//!
//! # Example
//!
//! ```rust
//! use flexchill::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::Resize { rows: 48, cols: 80 })?;
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), flexchill::ScreenError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod layout;
pub mod storage;
pub mod ui;
pub mod view;

pub mod observability;

pub use app::{handle_event, Action, Event, Phase, ScreenState};
pub use domain::{Result, ScreenError, Show, ShowCollection};
pub use ui::Theme;

use crate::infrastructure::expand_tilde;
use crate::layout::MonospaceMetrics;
use crate::storage::{catalog, AssetCatalog};
use crate::ui::{ScreenConfig, ShowListModel, TracingSink};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Every field is optional. Numeric overrides win over the values in
/// `screen_file`; missing files fall back to the bundled data.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Overrides [`ScreenConfig::featured_index`].
    pub featured_index: Option<usize>,

    /// Overrides [`ScreenConfig::row_height`], in points.
    pub row_height: Option<f32>,

    /// TOML file with a full or partial [`ScreenConfig`].
    pub screen_file: Option<String>,

    /// JSON show catalog. Default: the bundled catalog.
    pub catalog_file: Option<String>,

    /// TOML asset manifest. Default: the bundled manifest.
    pub assets_file: Option<String>,

    /// Built-in theme name: `chill-dark` or `chill-light`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Numbers that do not parse are ignored rather than rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use flexchill::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("featured_index".to_string(), "3".to_string());
    /// map.insert("row_height".to_string(), "tall".to_string());
    /// map.insert("theme".to_string(), "chill-light".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.featured_index, Some(3));
    /// assert_eq!(config.row_height, None);
    /// assert_eq!(config.theme_name.as_deref(), Some("chill-light"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let featured_index = config
            .get("featured_index")
            .and_then(|s| s.trim().parse::<usize>().ok());

        let row_height = config
            .get("row_height")
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|h| h.is_finite() && *h > 0.0);

        Self {
            featured_index,
            row_height,
            screen_file: config.get("screen_file").cloned(),
            catalog_file: config.get("catalog_file").cloned(),
            assets_file: config.get("assets_file").cloned(),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Resolves the theme: `theme_file` first, then `theme_name`, then the
/// default. A file or name that fails to load gives the default theme.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(
                    theme_file = %theme_file,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            })
        },
    )
}

/// Loads the screen configuration and applies the numeric overrides.
fn screen_config(config: &Config) -> Result<ScreenConfig> {
    let mut screen = match &config.screen_file {
        Some(path) => ScreenConfig::load_from_file(expand_tilde(path))?,
        None => ScreenConfig::default(),
    };
    if let Some(index) = config.featured_index {
        screen.featured_index = index;
    }
    if let Some(height) = config.row_height {
        screen.row_height = height;
    }
    Ok(screen)
}

/// Builds the detail screen from configuration.
///
/// Loads the screen config, catalog and asset manifest, builds the node tree
/// and binds the list model to the catalog with a [`TracingSink`]. No layout
/// runs until the first viewport arrives.
///
/// # Errors
///
/// Returns an error if any configured file cannot be read or parsed, or if
/// the featured index does not address a show.
///
/// # Example
///
/// ```rust
/// use flexchill::{initialize, Config, ScreenError};
///
/// let config = Config { featured_index: Some(99), ..Default::default() };
/// assert!(matches!(
///     initialize(&config),
///     Err(ScreenError::FeaturedIndexOutOfRange { index: 99, .. })
/// ));
/// ```
pub fn initialize(config: &Config) -> Result<ScreenState> {
    let _span = tracing::debug_span!("initialize").entered();

    let theme = resolve_theme(config);
    let screen_config = screen_config(config)?;

    let shows = match &config.catalog_file {
        Some(path) => catalog::load_from_file(expand_tilde(path))?,
        None => catalog::load_bundled()?,
    };
    let assets = match &config.assets_file {
        Some(path) => AssetCatalog::load_from_file(expand_tilde(path))?,
        None => AssetCatalog::bundled()?,
    };
    tracing::debug!(
        shows = shows.len(),
        assets = assets.len(),
        theme = %theme.name,
        "sources loaded"
    );

    let screen = ui::build(
        &shows,
        &screen_config,
        &assets,
        &theme,
        &MonospaceMetrics::default(),
    )?;
    let list = ShowListModel::new(shows, screen_config.row_height, Box::new(TracingSink));

    Ok(ScreenState::new(screen, list, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ListModel;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_default_config() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.featured_index, None);
        assert_eq!(config.row_height, None);
        assert!(config.screen_file.is_none());
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("featured_index", " 4 "),
            ("row_height", "80.5"),
            ("screen_file", "~/screen.toml"),
            ("catalog_file", "/tmp/shows.json"),
            ("assets_file", "/tmp/assets.toml"),
            ("theme", "chill-light"),
            ("theme_file", "/tmp/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.featured_index, Some(4));
        assert_eq!(config.row_height, Some(80.5));
        assert_eq!(config.screen_file.as_deref(), Some("~/screen.toml"));
        assert_eq!(config.catalog_file.as_deref(), Some("/tmp/shows.json"));
        assert_eq!(config.assets_file.as_deref(), Some("/tmp/assets.toml"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_numbers_are_ignored() {
        let config = Config::from_zellij(&map(&[("featured_index", "-1"), ("row_height", "0")]));
        assert_eq!(config.featured_index, None);
        assert_eq!(config.row_height, None);
    }

    #[test]
    fn overrides_apply_over_screen_defaults() {
        let config = Config {
            featured_index: Some(1),
            row_height: Some(64.0),
            ..Default::default()
        };
        let screen = screen_config(&config).unwrap();
        assert_eq!(screen.featured_index, 1);
        assert_eq!(screen.row_height, 64.0);
        assert_eq!(screen.series_label, ScreenConfig::default().series_label);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_theme(&config).name, Theme::default().name);
    }

    #[test]
    fn initializes_from_bundled_data() {
        let state = initialize(&Config::default()).unwrap();
        assert_eq!(state.phase(), Phase::UnderConstruction);
        assert!(state.list.count() > 0);
    }
}
