//! Episode list painter.
//!
//! Rows are drawn top to bottom from the first record until the list area is
//! full. Each row shows the record title in bold and its detail text
//! dimmed on the lines below. The cursor row gets the selection colors across
//! its full height and width.
//!
//! ```text
//! The Great Game                      <- cursor row, selection background
//! Mrs Hudson takes Sherlock to task
//!
//! A Scandal in Belgravia
//! Compromising photographs and a ...
//! ```

use crate::domain::Show;
use crate::layout::wrap_text;
use crate::ui::list::ListModel;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellArea, CellMetrics, Frame};

/// Paints every row of `model` that falls inside `area` and on screen.
///
/// `area` may start above the frame when the screen is scrolled; rows there
/// are clipped by the frame.
pub fn paint_rows<M>(
    frame: &mut Frame,
    model: &M,
    area: CellArea,
    cursor: usize,
    theme: &Theme,
    metrics: CellMetrics,
) where
    M: ListModel<Item = Show>,
{
    let bottom = area.row + area.rows;
    let mut row = area.row;

    for index in 0..model.count() {
        if row >= bottom {
            break;
        }
        let Some(show) = model.item_at(index) else {
            break;
        };

        let height = ((model.row_height(index) / metrics.height).round() as i64).max(1);
        let row_area = CellArea {
            row,
            col: area.col,
            rows: height.min(bottom - row),
            cols: area.cols,
        };

        let (title_fg, detail_fg) = if index == cursor {
            frame.tint(row_area, &theme.colors.selection_bg);
            (&theme.colors.selection_fg, &theme.colors.selection_fg)
        } else {
            (&theme.colors.text_normal, &theme.colors.text_dim)
        };

        let inner_cols = (area.cols - 2).max(1);
        frame.put_str(row, area.col + 1, &show.title, inner_cols, title_fg, true);

        let detail_rows = usize::try_from(row_area.rows - 1).unwrap_or(0);
        let width = usize::try_from(inner_cols).unwrap_or(1);
        let lines = wrap_text(&show.detail, width);
        for (offset, line) in lines.iter().take(detail_rows).enumerate() {
            let line_row = row + 1 + offset as i64;
            frame.put_str(line_row, area.col + 1, line, inner_cols, detail_fg, false);
        }

        row += height;
    }
}
