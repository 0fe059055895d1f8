//! Screen state management.
//!
//! This module defines [`ScreenState`], the single owner of everything the
//! plugin keeps between callbacks: the built screen, the list model bound to
//! it, the theme, the latest geometry and the scroll and cursor positions.
//!
//! # Geometry
//!
//! The screen tree never changes after it is built. Only its geometry does:
//! every viewport change re-runs the layout pass through
//! [`ScreenState::apply_viewport`], which also recomputes the content extent
//! of the root scroll container and clamps the scroll offset. Moving the list
//! cursor scrolls the root so the cursor row stays in view.
//!
//! # Example
//!
//! ```rust
//! use flexchill::app::ScreenState;
//! use flexchill::layout::{MonospaceMetrics, Size};
//! use flexchill::storage::{catalog, AssetCatalog};
//! use flexchill::ui::{composer, ScreenConfig, ShowListModel, Theme, TracingSink};
//!
//! let shows = catalog::load_bundled()?;
//! let config = ScreenConfig::default();
//! let theme = Theme::default();
//! let screen = composer::build(&shows, &config, &AssetCatalog::bundled()?, &theme, &MonospaceMetrics::default())?;
//! let list = ShowListModel::new(shows, config.row_height, Box::new(TracingSink));
//!
//! let mut state = ScreenState::new(screen, list, theme);
//! assert!(state.apply_viewport(Size::new(560.0, 840.0))?);
//! assert!(!state.apply_viewport(Size::new(560.0, 840.0))?);
//! # Ok::<(), flexchill::ScreenError>(())
//! ```

use super::modes::Phase;
use crate::domain::error::Result;
use crate::layout::{self, Geometry, MonospaceMetrics, Rect, Size};
use crate::ui::composer::Screen;
use crate::ui::list::{ListModel, ShowListModel};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CellMetrics;

/// Central state container of one detail screen.
#[derive(Debug)]
pub struct ScreenState {
    /// The built node tree and featured record.
    pub screen: Screen,

    /// Data source of the episode list.
    pub list: ShowListModel,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Point size of one terminal cell.
    pub cells: CellMetrics,

    phase: Phase,
    measure: MonospaceMetrics,
    geometry: Option<Geometry>,
    viewport: Size,

    /// Row under the list cursor.
    cursor: usize,

    /// Vertical scroll of the root container, in points.
    scroll_y: f32,
}

impl ScreenState {
    /// Wraps a freshly built screen. No layout has run yet.
    #[must_use]
    pub fn new(screen: Screen, list: ShowListModel, theme: Theme) -> Self {
        Self {
            screen,
            list,
            theme,
            cells: CellMetrics::default(),
            phase: Phase::UnderConstruction,
            measure: MonospaceMetrics::default(),
            geometry: None,
            viewport: Size::ZERO,
            cursor: 0,
            scroll_y: 0.0,
        }
    }

    /// Lays the screen out for `viewport` if it differs from the last one.
    ///
    /// Returns `true` when a layout pass ran.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScreenError::Layout`] when the layout pass fails. The
    /// previous geometry is kept in that case.
    pub fn apply_viewport(&mut self, viewport: Size) -> Result<bool> {
        if self.phase.is_laid_out() && viewport == self.viewport {
            return Ok(false);
        }

        let geometry = layout::layout(&self.screen.tree, viewport, &self.measure)?;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            content_height = geometry.content_size().height,
            "viewport applied"
        );

        self.geometry = Some(geometry);
        self.viewport = viewport;
        self.phase = Phase::LaidOut;
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll());
        Ok(true)
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Geometry of the last layout pass, `None` before the first one.
    #[must_use]
    pub const fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Extent of the root scroll container's children.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.geometry.as_ref().map_or(Size::ZERO, Geometry::content_size)
    }

    #[must_use]
    pub const fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Largest root scroll offset: content height minus viewport height.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_size().height - self.viewport.height).max(0.0)
    }

    /// Scrolls the root container by `delta` points, clamped to the content.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let next = (self.scroll_y + delta).clamp(0.0, self.max_scroll());
        let changed = (next - self.scroll_y).abs() > f32::EPSILON;
        self.scroll_y = next;
        changed
    }

    /// Half a viewport, and at least one cell.
    fn scroll_step(&self) -> f32 {
        (self.viewport.height / 2.0).max(self.cells.height)
    }

    /// Scrolls half a page down.
    pub fn scroll_down(&mut self) -> bool {
        self.scroll_by(self.scroll_step())
    }

    /// Scrolls half a page up.
    pub fn scroll_up(&mut self) -> bool {
        self.scroll_by(-self.scroll_step())
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the list cursor down by one row, wrapping to the top at the end.
    ///
    /// No-op on an empty list.
    pub fn move_cursor_down(&mut self) {
        let count = self.list.count();
        if count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % count;
        self.reveal_cursor();
    }

    /// Moves the list cursor up by one row, wrapping to the bottom at the start.
    ///
    /// No-op on an empty list.
    pub fn move_cursor_up(&mut self) {
        let count = self.list.count();
        if count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { count - 1 } else { self.cursor - 1 };
        self.reveal_cursor();
    }

    /// Reports the cursor row as selected through the list model.
    ///
    /// No-op on an empty list.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ScreenError::RowOutOfRange`] from the model.
    pub fn select_current(&mut self) -> Result<()> {
        if self.list.count() == 0 {
            tracing::debug!("select on empty list ignored");
            return Ok(());
        }
        self.list.select(self.cursor)
    }

    /// Frame of the cursor row in root coordinates, before scrolling.
    #[must_use]
    pub fn cursor_row_frame(&self) -> Option<Rect> {
        let list = self.geometry.as_ref()?.frame(self.screen.nodes.list)?;
        let top: f32 = (0..self.cursor).map(|row| self.list.row_height(row)).sum();
        Some(Rect::new(
            list.x,
            list.y + top,
            list.width,
            self.list.row_height(self.cursor),
        ))
    }

    /// Scrolls the root just enough to bring the cursor row into view.
    fn reveal_cursor(&mut self) {
        let Some(row) = self.cursor_row_frame() else {
            return;
        };
        let target = if row.y < self.scroll_y {
            row.y
        } else if row.bottom() > self.scroll_y + self.viewport.height {
            row.bottom() - self.viewport.height
        } else {
            return;
        };
        self.scroll_y = target.clamp(0.0, self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Show, ShowCollection};
    use crate::storage::AssetCatalog;
    use crate::ui::composer::{self, ScreenConfig};
    use crate::ui::list::TracingSink;

    fn state(n: usize, featured_index: usize) -> ScreenState {
        let shows: ShowCollection = (0..n)
            .map(|i| Show::new(format!("Title {i}"), "Detail", "show-s1e1"))
            .collect::<Vec<_>>()
            .into();
        let config = ScreenConfig {
            featured_index,
            ..ScreenConfig::default()
        };
        let theme = Theme::default();
        let screen = composer::build(
            &shows,
            &config,
            &AssetCatalog::bundled().unwrap(),
            &theme,
            &MonospaceMetrics::default(),
        )
        .unwrap();
        let list = ShowListModel::new(shows, config.row_height, Box::new(TracingSink));
        ScreenState::new(screen, list, theme)
    }

    #[test]
    fn starts_under_construction() {
        let state = state(3, 0);
        assert_eq!(state.phase(), Phase::UnderConstruction);
        assert!(state.geometry().is_none());
        assert_eq!(state.content_size(), Size::ZERO);
    }

    #[test]
    fn layout_runs_once_per_viewport() {
        let mut state = state(3, 0);
        assert!(state.apply_viewport(Size::new(560.0, 840.0)).unwrap());
        assert_eq!(state.phase(), Phase::LaidOut);
        assert!(!state.apply_viewport(Size::new(560.0, 840.0)).unwrap());
        assert!(state.apply_viewport(Size::new(700.0, 840.0)).unwrap());
        assert_eq!(state.geometry().unwrap().viewport(), Size::new(700.0, 840.0));
    }

    #[test]
    fn root_frame_tracks_viewport() {
        let mut state = state(3, 0);
        state.apply_viewport(Size::new(560.0, 840.0)).unwrap();
        let root = state.screen.nodes.root;
        let frame = state.geometry().unwrap().frame(root).unwrap();
        assert_eq!(frame.size(), Size::new(560.0, 840.0));
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut state = state(3, 0);
        // Short viewport: the fragments overflow it.
        state.apply_viewport(Size::new(560.0, 175.0)).unwrap();
        let max = state.max_scroll();
        assert!(max > 0.0);

        assert!(!state.scroll_up());
        while state.scroll_down() {}
        assert!((state.scroll_y() - max).abs() < f32::EPSILON);

        // Growing the viewport pulls the offset back in range.
        state.apply_viewport(Size::new(560.0, 5000.0)).unwrap();
        assert!(state.scroll_y().abs() < f32::EPSILON);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = state(3, 0);
        state.move_cursor_up();
        assert_eq!(state.cursor(), 2);
        state.move_cursor_down();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn cursor_scrolls_its_row_into_view() {
        let mut state = state(9, 0);
        state.apply_viewport(Size::new(560.0, 840.0)).unwrap();
        assert!(state.scroll_y().abs() < f32::EPSILON);

        for _ in 0..8 {
            state.move_cursor_down();
        }
        let last = state.cursor_row_frame().unwrap();
        assert_eq!(state.cursor(), 8);
        assert!((state.scroll_y() - (last.bottom() - 840.0)).abs() < 0.01);

        // Wrapping back to the first row scrolls up to it.
        state.move_cursor_down();
        let first = state.cursor_row_frame().unwrap();
        assert!(first.y < last.bottom() - 840.0);
        assert!((state.scroll_y() - first.y).abs() < 0.01);
    }

    #[test]
    fn select_on_valid_cursor_succeeds() {
        let mut state = state(3, 0);
        state.move_cursor_down();
        assert!(state.select_current().is_ok());
    }
}
