//! Text measurement.
//!
//! The layout pass asks a [`TextMeasure`] for the size of every text node.
//! [`MonospaceMetrics`] models a fixed-advance font, which is what a terminal
//! grid actually draws.

use super::geometry::Size;
use crate::view::Font;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measures text for the layout pass.
pub trait TextMeasure {
    /// Size of `text` in `font`, wrapped to `max_width` when given and limited
    /// to `max_lines` lines.
    fn measure(
        &self,
        text: &str,
        font: Font,
        max_lines: Option<u32>,
        max_width: Option<f32>,
    ) -> Size;

    /// Unwrapped single-line width.
    fn text_width(&self, text: &str, font: Font) -> f32 {
        self.measure(text, font, Some(1), None).width
    }

    /// Width of the widest word: the narrowest the text wraps to.
    fn min_content_width(&self, text: &str, font: Font) -> f32 {
        text.split_whitespace()
            .map(|word| self.text_width(word, font))
            .fold(0.0, f32::max)
    }
}

/// Fixed-advance font metrics expressed as ratios of the point size.
///
/// One advance is one terminal column; wide characters take two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Horizontal advance of one column.
    pub advance: f32,
    /// Height of one line.
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.25,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure(
        &self,
        text: &str,
        font: Font,
        max_lines: Option<u32>,
        max_width: Option<f32>,
    ) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let advance = font.size * self.advance;
        let line_height = font.size * self.line_height;
        let columns = max_width.map_or(usize::MAX, |w| columns_for(w, advance));

        let mut lines = wrap_text(text, columns);
        if let Some(limit) = max_lines {
            lines.truncate(limit.max(1) as usize);
        }

        let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        Size::new(widest as f32 * advance, lines.len() as f32 * line_height)
    }
}

/// Number of whole columns of `advance` width that fit in `width`.
fn columns_for(width: f32, advance: f32) -> usize {
    if advance <= 0.0 {
        return usize::MAX;
    }
    // Small epsilon so a width measured for N columns fits N again.
    ((width + 0.001) / advance).floor().max(1.0) as usize
}

/// Greedy word wrap to `columns` terminal columns per line.
///
/// Widths are display widths, so a CJK character fills two columns. Words
/// longer than a line are split between characters. Explicit newlines start a
/// new line.
#[must_use]
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if line_width > 0 && line_width + 1 + word_width <= columns {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }

            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width > 0 && line_width + ch_width > columns {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_width_is_columns_times_advance() {
        let metrics = MonospaceMetrics::default();
        let size = metrics.measure("EPISODES", Font::regular(14.0), None, None);
        assert_eq!(size, Size::new(8.0 * 7.0, 17.5));
    }

    #[test]
    fn wide_characters_take_two_columns() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(metrics.text_width("名探偵", Font::regular(14.0)), 42.0);
        assert_eq!(metrics.text_width("Café", Font::regular(14.0)), 28.0);
    }

    #[test]
    fn wraps_and_clamps_lines() {
        let metrics = MonospaceMetrics::default();
        let text = "one two three four five six seven eight";
        let size = metrics.measure(text, Font::regular(14.0), Some(3), Some(70.0));
        // 10 columns per line; more than three lines of text, clamped to three.
        assert_eq!(size.height, 3.0 * 17.5);
        assert!(size.width <= 70.0);
    }

    #[test]
    fn min_content_is_the_widest_word() {
        let metrics = MonospaceMetrics::default();
        let width = metrics.min_content_width("My List", Font::regular(14.0));
        assert_eq!(width, 4.0 * 7.0);
    }

    #[test]
    fn empty_text_has_no_size() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(metrics.measure("", Font::bold(16.0), None, None), Size::ZERO);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert_eq!(wrap_text("a b\nc", 10), vec!["a b", "c"]);
    }

    #[test]
    fn wrap_counts_display_columns() {
        // Three wide characters need six columns; four fit two per line.
        assert_eq!(wrap_text("名探偵", 4), vec!["名探", "偵"]);
        assert_eq!(wrap_text("名探偵 ok", 6), vec!["名探偵", "ok"]);
    }
}
