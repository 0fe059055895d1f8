//! Shared rendering utilities and helpers.
//!
//! Low-level ANSI output used by the renderer: cursor positioning and the
//! conversion of a painted [`Frame`] into escape sequences. Style changes are
//! only emitted where consecutive cells differ.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellStyle, Frame};

/// ANSI sequence moving the cursor to a 1-indexed row and column.
#[must_use]
pub fn cursor_to(row: usize, col: usize) -> String {
    format!("\u{1b}[{row};{col}H")
}

/// Escape sequence selecting `style` from a reset state.
fn style_sequence(style: &CellStyle) -> String {
    let mut out = String::from(Theme::reset());
    if style.bold {
        out.push_str(Theme::bold());
    }
    if let Some(fg) = &style.fg {
        out.push_str(&Theme::fg(fg));
    }
    if let Some(bg) = &style.bg {
        out.push_str(&Theme::bg(bg));
    }
    out
}

/// Serializes a frame to ANSI output, one positioned line per row.
#[must_use]
pub fn frame_to_ansi(frame: &Frame) -> String {
    let mut out = String::new();

    for row in 0..frame.rows() {
        out.push_str(&cursor_to(row + 1, 1));
        let mut current: Option<&CellStyle> = None;

        for col in 0..frame.cols() {
            let Some(cell) = frame.cell(row, col).filter(|cell| !cell.continuation) else {
                continue;
            };
            if current != Some(&cell.style) {
                out.push_str(&style_sequence(&cell.style));
                current = Some(&cell.style);
            }
            out.push(cell.ch);
        }

        out.push_str(Theme::reset());
    }

    out
}
