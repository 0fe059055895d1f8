//! Image, button and bar painters.
//!
//! A terminal cannot show the bitmaps, so images and icons are drawn as their
//! manifest glyph centered in the area. Placeholders draw nothing but their
//! background.

use crate::storage::ImageAsset;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellArea, Frame};
use unicode_width::UnicodeWidthStr;

/// Character used for indicator bars.
const BAR_GLYPH: char = '\u{2501}';

fn paint_glyph(frame: &mut Frame, asset: &ImageAsset, area: CellArea, color: &str) {
    if asset.is_placeholder || asset.glyph.is_empty() {
        return;
    }

    let area = area.at_least_one();
    let len = asset.glyph.width() as i64;
    let col = area.col + ((area.cols - len) / 2).max(0);
    let row = area.row + (area.rows - 1) / 2;
    frame.put_str(row, col, &asset.glyph, area.cols, color, true);
}

/// Paints a poster image: the node background is already filled, the glyph
/// goes in the middle.
pub fn paint_image(frame: &mut Frame, asset: &ImageAsset, area: CellArea, theme: &Theme) {
    paint_glyph(frame, asset, area, &theme.colors.text_normal);
}

/// Paints an icon button.
pub fn paint_button(frame: &mut Frame, icon: &ImageAsset, area: CellArea, theme: &Theme) {
    paint_glyph(frame, icon, area, &theme.colors.text_normal);
}

/// Paints an indicator bar one row tall. Uncolored bars are invisible.
pub fn paint_bar(frame: &mut Frame, color: Option<&str>, area: CellArea) {
    let Some(color) = color else {
        return;
    };

    let area = area.at_least_one();
    let line: String = std::iter::repeat(BAR_GLYPH)
        .take(usize::try_from(area.cols).unwrap_or(1))
        .collect();
    frame.put_str(area.row, area.col, &line, area.cols, color, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(glyph: &str) -> ImageAsset {
        ImageAsset {
            name: "show-s1e1".to_string(),
            width: 1280.0,
            height: 720.0,
            glyph: glyph.to_string(),
            is_placeholder: false,
        }
    }

    #[test]
    fn glyph_is_centered() {
        let mut frame = Frame::new(5, 10, "#000000");
        let area = CellArea { row: 0, col: 0, rows: 5, cols: 10 };
        paint_image(&mut frame, &asset("S1E1"), area, &Theme::default());
        assert_eq!(frame.find("S1E1"), Some((2, 3)));
    }

    #[test]
    fn placeholder_draws_nothing() {
        let mut frame = Frame::new(2, 4, "#000000");
        let area = CellArea { row: 0, col: 0, rows: 2, cols: 4 };
        paint_button(&mut frame, &ImageAsset::placeholder("add"), area, &Theme::default());
        assert_eq!(frame.text(), "\n");
    }

    #[test]
    fn only_colored_bars_are_drawn() {
        let mut frame = Frame::new(1, 8, "#000000");
        let area = CellArea { row: 0, col: 0, rows: 0, cols: 8 };

        paint_bar(&mut frame, None, area);
        assert_eq!(frame.text(), "");

        paint_bar(&mut frame, Some("#ff0000"), area);
        assert_eq!(frame.line(0), "\u{2501}".repeat(8));
        assert_eq!(frame.cell(0, 0).unwrap().style.fg.as_deref(), Some("#ff0000"));
    }
}
