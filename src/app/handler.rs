//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns host callbacks into
//! state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The plugin runtime translates key presses and pane resizes into [`Event`]s
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `ScreenState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Geometry**: `Resize`
//! - **List**: `KeyDown`, `KeyUp`, `SelectRow`
//! - **Scrolling**: `ScrollDown`, `ScrollUp`
//! - **Lifecycle**: `CloseFocus`

use crate::app::{Action, ScreenState};
use crate::domain::error::Result;

/// Events triggered by user input or pane changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The pane now has `rows` x `cols` cells.
    Resize {
        rows: usize,
        cols: usize,
    },
    /// Moves the list cursor down by one row (wraps to top).
    KeyDown,
    /// Moves the list cursor up by one row (wraps to bottom).
    KeyUp,
    /// Selects the row under the cursor.
    SelectRow,
    /// Scrolls the screen half a page down.
    ScrollDown,
    /// Scrolls the screen half a page up.
    ScrollUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates screen state, and returns actions to execute.
///
/// The boolean is `true` when the screen needs to be redrawn.
///
/// # Errors
///
/// Returns errors from the list model when a selection is rejected.
///
/// # Example
///
/// ```rust
/// use flexchill::app::{handle_event, Event, ScreenState};
/// # use flexchill::layout::MonospaceMetrics;
/// # use flexchill::storage::{catalog, AssetCatalog};
/// # use flexchill::ui::{composer, ScreenConfig, ShowListModel, Theme, TracingSink};
/// # let shows = catalog::load_bundled()?;
/// # let theme = Theme::default();
/// # let screen = composer::build(&shows, &ScreenConfig::default(), &AssetCatalog::bundled()?, &theme, &MonospaceMetrics::default())?;
/// # let list = ShowListModel::new(shows, 100.0, Box::new(TracingSink));
/// let mut state = ScreenState::new(screen, list, theme);
///
/// let (redraw, actions) = handle_event(&mut state, &Event::Resize { rows: 48, cols: 80 })?;
/// assert!(redraw);
/// assert!(actions.is_empty());
/// # Ok::<(), flexchill::ScreenError>(())
/// ```
pub fn handle_event(state: &mut ScreenState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match *event {
        Event::Resize { rows, cols } => {
            let viewport = state.cells.to_points(rows, cols);
            Ok((state.apply_viewport(viewport)?, vec![]))
        }
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::SelectRow => {
            state.select_current()?;
            Ok((false, vec![]))
        }
        Event::ScrollDown => Ok((state.scroll_down(), vec![])),
        Event::ScrollUp => Ok((state.scroll_up(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Show, ShowCollection};
    use crate::layout::MonospaceMetrics;
    use crate::storage::AssetCatalog;
    use crate::ui::composer::{self, ScreenConfig};
    use crate::ui::list::{SelectionEvent, SelectionSink, ShowListModel};
    use crate::ui::theme::Theme;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<SelectionEvent>>>);

    impl SelectionSink for RecordingSink {
        fn record(&mut self, event: SelectionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn state(titles: &[&str]) -> (ScreenState, RecordingSink) {
        let shows: ShowCollection = titles
            .iter()
            .map(|t| Show::new(*t, "Detail", "show-s1e1"))
            .collect::<Vec<_>>()
            .into();
        let config = ScreenConfig {
            featured_index: 0,
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
        let sink = RecordingSink::default();
        let list = ShowListModel::new(shows, config.row_height, Box::new(sink.clone()));
        (ScreenState::new(screen, list, theme), sink)
    }

    #[test]
    fn resize_lays_out_only_on_change() {
        let (mut state, _) = state(&["A"]);
        let resize = Event::Resize { rows: 48, cols: 80 };

        assert_eq!(handle_event(&mut state, &resize).unwrap(), (true, vec![]));
        assert_eq!(handle_event(&mut state, &resize).unwrap(), (false, vec![]));
        assert_eq!(state.viewport(), state.cells.to_points(48, 80));
    }

    #[test]
    fn select_row_reports_cursor_row() {
        let (mut state, sink) = state(&["A", "B", "C"]);
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::SelectRow).unwrap();

        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].row, 2);
        assert_eq!(events[0].title, "C");
    }

    #[test]
    fn close_focus_emits_action() {
        let (mut state, _) = state(&["A"]);
        let (redraw, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!redraw);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
