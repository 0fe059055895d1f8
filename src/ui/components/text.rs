//! Text painter.

use crate::layout::wrap_text;
use crate::ui::viewmodel::{CellArea, Frame};
use crate::view::TextContent;

/// Paints `text` wrapped to the area's width.
///
/// Lines beyond the area's height or the text's own line limit are dropped.
pub fn paint_text(frame: &mut Frame, text: &TextContent, area: CellArea) {
    let area = area.at_least_one();
    let width = usize::try_from(area.cols).unwrap_or(1);
    let height = usize::try_from(area.rows).unwrap_or(1);
    let limit = text
        .max_lines
        .map_or(height, |lines| (lines.max(1) as usize).min(height));

    for (offset, line) in wrap_text(&text.text, width).iter().take(limit).enumerate() {
        frame.put_str(
            area.row + offset as i64,
            area.col,
            line,
            area.cols,
            &text.color,
            text.font.is_bold(),
        );
    }
}
