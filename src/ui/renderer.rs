//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **Frame Composition**: Paint the laid-out tree of a [`ScreenState`] into
//!    a [`Frame`], walking nodes in paint order
//! 2. **Output**: Serialize the frame to ANSI sequences and print it
//!
//! A screen that could not be built is never partially drawn; the host shows
//! the unavailable message from [`render_unavailable`] instead.

use crate::app::ScreenState;
use crate::domain::error::ScreenError;
use crate::ui::components;
use crate::ui::helpers::frame_to_ansi;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, Frame};
use crate::view::Content;

/// Paints the current screen state into a frame the size of its viewport.
///
/// Before the first layout pass the frame is blank background.
#[must_use]
pub fn compose_frame(state: &ScreenState) -> Frame {
    let theme = &state.theme;
    let metrics = state.cells;
    let (rows, cols) = metrics.to_cells(state.viewport());
    let mut frame = Frame::new(rows, cols, &theme.colors.background);

    let Some(geometry) = state.geometry() else {
        return frame;
    };

    let tree = &state.screen.tree;
    let root = tree.root();

    for id in tree.descendants(root) {
        let Some(rect) = geometry.frame(id) else {
            continue;
        };
        let scroll_y = if id == root { 0.0 } else { state.scroll_y() };
        let area = metrics.area(rect, scroll_y);
        let node = tree.node(id);

        if let Some(background) = &node.background {
            frame.fill(area, background);
        }

        match &node.content {
            Content::Scroll | Content::Container => {}
            Content::Text(text) => components::paint_text(&mut frame, text, area),
            Content::Image(asset) => components::paint_image(&mut frame, asset, area, theme),
            Content::Button { icon } => components::paint_button(&mut frame, icon, area, theme),
            Content::Bar { color } => components::paint_bar(&mut frame, color.as_deref(), area),
            Content::List { .. } => {
                let cursor = state.cursor();
                components::paint_rows(&mut frame, &state.list, area, cursor, theme, metrics);
            }
        }
    }

    frame
}

/// Renders the screen to stdout for a pane of `rows` x `cols` cells.
///
/// The state must already be laid out for that pane size; the host sends a
/// resize event first.
pub fn render(state: &ScreenState, rows: usize, cols: usize) {
    let frame = compose_frame(state);
    if frame.rows() != rows || frame.cols() != cols {
        tracing::debug!(
            frame_rows = frame.rows(),
            frame_cols = frame.cols(),
            rows,
            cols,
            "frame size differs from pane"
        );
    }
    print!("{}", frame_to_ansi(&frame));
}

/// Frame holding the message shown when the screen cannot be built.
#[must_use]
pub fn compose_unavailable(
    error: &ScreenError,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> Frame {
    let mut frame = Frame::new(rows, cols, &theme.colors.background);
    let empty = EmptyState {
        message: "Show unavailable".to_string(),
        subtitle: error.to_string(),
    };
    components::paint_empty_state(&mut frame, &empty, theme);
    frame
}

/// Renders the unavailable message to stdout.
pub fn render_unavailable(error: &ScreenError, theme: &Theme, rows: usize, cols: usize) {
    print!("{}", frame_to_ansi(&compose_unavailable(error, theme, rows, cols)));
}
