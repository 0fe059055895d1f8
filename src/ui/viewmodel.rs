//! Display-ready frame types.
//!
//! The renderer does not print while walking the node tree. It first paints
//! into a [`Frame`], a grid of styled [`Cell`]s sized to the pane, and prints
//! the finished grid in one go. Tests inspect the grid directly.
//!
//! Layout works in points; [`CellMetrics`] converts between points and
//! terminal cells.
//!
//! # Example
//!
//! ```rust
//! use flexchill::ui::viewmodel::{CellMetrics, Frame};
//!
//! let metrics = CellMetrics::default();
//! let viewport = metrics.to_points(24, 80);
//! assert_eq!(viewport.width, 560.0);
//!
//! let mut frame = Frame::new(24, 80, "#000000");
//! frame.put_str(0, 2, "S3:E3", 10, "#aaaaaa", true);
//! assert_eq!(frame.find("S3:E3"), Some((0, 2)));
//! ```

use crate::layout::{Rect, Size};
use unicode_width::UnicodeWidthChar;

/// Size of one terminal cell in layout points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f32,
    pub height: f32,
}

impl Default for CellMetrics {
    /// One 14 pt monospace character per cell.
    fn default() -> Self {
        Self {
            width: 7.0,
            height: 17.5,
        }
    }
}

impl CellMetrics {
    /// Viewport in points for a pane of `rows` x `cols` cells.
    #[must_use]
    pub fn to_points(self, rows: usize, cols: usize) -> Size {
        Size::new(cols as f32 * self.width, rows as f32 * self.height)
    }

    /// Pane size in cells `(rows, cols)` for a viewport in points.
    #[must_use]
    pub fn to_cells(self, size: Size) -> (usize, usize) {
        let rows = (size.height / self.height).round().max(0.0) as usize;
        let cols = (size.width / self.width).round().max(0.0) as usize;
        (rows, cols)
    }

    /// Cell area covered by `rect`, shifted up by `scroll_y` points.
    ///
    /// Edges are rounded to the nearest cell boundary, so the area may be
    /// empty for rects thinner than half a cell.
    #[must_use]
    pub fn area(self, rect: Rect, scroll_y: f32) -> CellArea {
        let row = ((rect.y - scroll_y) / self.height).round() as i64;
        let bottom = ((rect.bottom() - scroll_y) / self.height).round() as i64;
        let col = (rect.x / self.width).round() as i64;
        let right = (rect.right() / self.width).round() as i64;
        CellArea {
            row,
            col,
            rows: (bottom - row).max(0),
            cols: (right - col).max(0),
        }
    }
}

/// A block of cells, possibly partly off screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellArea {
    pub row: i64,
    pub col: i64,
    pub rows: i64,
    pub cols: i64,
}

impl CellArea {
    /// Same area grown to at least one row and one column.
    #[must_use]
    pub fn at_least_one(self) -> Self {
        Self {
            rows: self.rows.max(1),
            cols: self.cols.max(1),
            ..self
        }
    }
}

/// Colors and weight of one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
}

/// One character position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
    /// Right half of a wide character drawn in the cell to the left.
    pub continuation: bool,
}

/// A painted pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Frame {
    /// Blank frame filled with `background`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, background: &str) -> Self {
        let blank = Cell {
            ch: ' ',
            style: CellStyle {
                fg: None,
                bg: Some(background.to_string()),
                bold: false,
            },
            continuation: false,
        };
        Self {
            rows,
            cols,
            cells: vec![blank; rows * cols],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, row: i64, col: i64) -> Option<&mut Cell> {
        let row = usize::try_from(row).ok().filter(|r| *r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|c| *c < self.cols)?;
        self.cells.get_mut(row * self.cols + col)
    }

    /// Blanks the on-screen part of `area` with background `bg`.
    pub fn fill(&mut self, area: CellArea, bg: &str) {
        for row in area.row..area.row + area.rows {
            for col in area.col..area.col + area.cols {
                if let Some(cell) = self.cell_mut(row, col) {
                    cell.ch = ' ';
                    cell.continuation = false;
                    cell.style = CellStyle {
                        fg: None,
                        bg: Some(bg.to_string()),
                        bold: false,
                    };
                }
            }
        }
    }

    /// Changes the background of `area` without touching its characters.
    pub fn tint(&mut self, area: CellArea, bg: &str) {
        for row in area.row..area.row + area.rows {
            for col in area.col..area.col + area.cols {
                if let Some(cell) = self.cell_mut(row, col) {
                    cell.style.bg = Some(bg.to_string());
                }
            }
        }
    }

    /// Writes `text` starting at a cell, using at most `max_cols` columns.
    ///
    /// Wide characters take two columns and are never split: one that would
    /// cross `max_cols` or the right edge ends the write. Characters falling
    /// outside the frame are dropped. Backgrounds are kept.
    pub fn put_str(
        &mut self,
        row: i64,
        col: i64,
        text: &str,
        max_cols: i64,
        fg: &str,
        bold: bool,
    ) {
        let mut offset = 0_i64;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as i64;
            if width == 0 {
                continue;
            }
            if offset + width > max_cols || col + offset + width > self.cols as i64 {
                break;
            }
            self.put_char(row, col + offset, ch, width, fg, bold);
            offset += width;
        }
    }

    fn put_char(&mut self, row: i64, col: i64, ch: char, width: i64, fg: &str, bold: bool) {
        // Overwriting half of a wide character blanks the other half.
        if self.cell_mut(row, col).is_some_and(|cell| cell.continuation) {
            if let Some(lead) = self.cell_mut(row, col - 1) {
                lead.ch = ' ';
            }
        }
        if let Some(next) = self.cell_mut(row, col + width) {
            if next.continuation {
                next.ch = ' ';
                next.continuation = false;
            }
        }

        for part in 0..width {
            if let Some(cell) = self.cell_mut(row, col + part) {
                cell.ch = if part == 0 { ch } else { ' ' };
                cell.continuation = part > 0;
                cell.style.fg = Some(fg.to_string());
                cell.style.bold = bold;
            }
        }
    }

    /// Characters of one row, trailing spaces included. Wide characters
    /// appear once.
    #[must_use]
    pub fn line(&self, row: usize) -> String {
        self.glyphs(row).into_iter().map(|(_, ch)| ch).collect()
    }

    /// Starting column and character of every glyph in a row.
    fn glyphs(&self, row: usize) -> Vec<(usize, char)> {
        (0..self.cols)
            .filter_map(|col| self.cell(row, col).map(|cell| (col, cell)))
            .filter(|(_, cell)| !cell.continuation)
            .map(|(col, cell)| (col, cell.ch))
            .collect()
    }

    /// All rows joined by newlines, trailing spaces trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        (0..self.rows)
            .map(|row| self.line(row).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Position `(row, col)` of the first occurrence of `needle`, with `col`
    /// in cells.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<(usize, usize)> {
        let needle: Vec<char> = needle.chars().collect();
        if needle.is_empty() {
            return None;
        }
        (0..self.rows).find_map(|row| {
            let glyphs = self.glyphs(row);
            glyphs
                .windows(needle.len())
                .find(|window| {
                    window
                        .iter()
                        .map(|(_, ch)| *ch)
                        .eq(needle.iter().copied())
                })
                .map(|window| (row, window[0].0))
        })
    }
}

/// Message shown instead of the screen.
///
/// Used when the screen cannot be built; nothing of a half-built tree is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Show unavailable").
    pub message: String,

    /// Secondary explanatory text, usually the error.
    pub subtitle: String,
}
