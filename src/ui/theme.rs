//! Theme management and ANSI escape sequence generation.
//!
//! Colors used by the screen (background, dimmed text, rating stars, the
//! selected-tab accent, image placeholders and list selection) come from a
//! theme instead of literals, so tests and users can swap them.
//!
//! # Built-in Themes
//!
//! - `chill-dark`: Black background with red accents (default)
//! - `chill-light`: Light background variant
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#000000"
//! text_normal = "#ffffff"
//! text_dim = "#aaaaaa"
//! rating = "#ff0000"
//! accent = "#ff0000"
//! image_placeholder = "#996633"
//! selection_fg = "#ffffff"
//! selection_bg = "#3a3a3a"
//! empty_state_fg = "#ff5f5f"
//! ```

use crate::domain::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for the screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions, all as hex strings (e.g. `"#aaaaaa"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Screen and list background.
    pub background: String,
    /// Primary text (list titles).
    pub text_normal: String,
    /// Secondary text (labels, summary, description).
    pub text_dim: String,
    /// Popularity stars.
    pub rating: String,
    /// Selected tab indicator.
    pub accent: String,
    /// Fill behind images and unresolved assets.
    pub image_placeholder: String,
    /// Cursor row foreground.
    pub selection_fg: String,
    /// Cursor row background.
    pub selection_bg: String,
    /// Message shown when the screen cannot be built.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flexchill::Theme;
    ///
    /// let theme = Theme::from_name("chill-light").unwrap();
    /// assert_eq!(theme.name, "chill-light");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "chill-dark" => include_str!("../../themes/chill-dark.toml"),
            "chill-light" => include_str!("../../themes/chill-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Io`] if the file cannot be read and
    /// [`ScreenError::Theme`] if the TOML content does not describe a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ScreenError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(255)
        };

        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape sequence for a hex color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flexchill::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI reset (`\x1b[0m`), clears colors and weight.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`chill-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("chill-dark").expect("Built-in chill-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "chill-dark");
        assert!(Theme::from_name("chill-light").is_some());
        assert!(Theme::from_name("unknown").is_none());
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#12"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("zz0000"), (255, 0, 0));
        assert_eq!(Theme::bg("#3a3a3a"), "\u{1b}[48;2;58;58;58m");
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", include_str!("../../themes/chill-light.toml")).unwrap();
        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.colors.accent, "#d70000");
    }

    #[test]
    fn invalid_theme_file_is_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(ScreenError::Theme(_))));
    }
}
