//! Empty state painter.
//!
//! Shown in place of the whole screen when it cannot be built, for example
//! when the configured featured index addresses no record.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, Frame};
use unicode_width::UnicodeWidthStr;

/// First row of the message.
const MESSAGE_ROW: i64 = 5;

/// Paints a centered two-line message.
///
/// # Layout
///
/// ```text
/// [5 blank lines]
/// [left padding] MESSAGE
/// [left padding] subtitle
/// ```
///
/// The message uses the `empty_state_fg` theme color in bold and the
/// subtitle uses `text_dim`. Lines wider than the frame are cut.
pub fn paint_empty_state(frame: &mut Frame, empty: &EmptyState, theme: &Theme) {
    let cols = frame.cols() as i64;
    let row = MESSAGE_ROW.min((frame.rows() as i64 - 2).max(0));

    let lines = [
        (&empty.message, &theme.colors.empty_state_fg, true),
        (&empty.subtitle, &theme.colors.text_dim, false),
    ];
    for (offset, (text, color, bold)) in lines.into_iter().enumerate() {
        let len = text.width() as i64;
        let padding = ((cols - len) / 2).max(0);
        frame.put_str(row + offset as i64, padding, text, cols, color, bold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_centered_below_blank_lines() {
        let mut frame = Frame::new(10, 20, "#000000");
        let empty = EmptyState {
            message: "Unavailable".to_string(),
            subtitle: "bad index".to_string(),
        };
        paint_empty_state(&mut frame, &empty, &Theme::default());

        assert_eq!(frame.find("Unavailable"), Some((5, 4)));
        assert_eq!(frame.find("bad index"), Some((6, 5)));
    }

    #[test]
    fn short_frames_keep_both_lines() {
        let mut frame = Frame::new(3, 20, "#000000");
        let empty = EmptyState {
            message: "Unavailable".to_string(),
            subtitle: "bad index".to_string(),
        };
        paint_empty_state(&mut frame, &empty, &Theme::default());

        assert_eq!(frame.find("Unavailable").map(|(row, _)| row), Some(1));
        assert_eq!(frame.find("bad index").map(|(row, _)| row), Some(2));
    }
}
