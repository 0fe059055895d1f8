//! List model backing the episode list.
//!
//! The list asks its model how many rows exist, what each row shows and how
//! tall it is. Selecting a row produces a [`SelectionEvent`] that goes to the
//! [`SelectionSink`] the model was built with. Nothing else happens on
//! selection.

use crate::domain::error::{Result, ScreenError};
use crate::domain::{Show, ShowCollection};
use chrono::{DateTime, Utc};

/// Data source and selection handler of a list.
pub trait ListModel {
    /// Row payload.
    type Item;

    /// Number of rows.
    fn count(&self) -> usize;

    /// Payload of row `index`, `None` past the end.
    fn item_at(&self, index: usize) -> Option<&Self::Item>;

    /// Height of row `index` in layout points.
    fn row_height(&self, index: usize) -> f32;

    /// Reports that row `index` was selected.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::RowOutOfRange`] if `index >= count()`.
    fn select(&mut self, index: usize) -> Result<()>;
}

/// A row selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    pub row: usize,
    /// Title of the selected record.
    pub title: String,
    pub selected_at: DateTime<Utc>,
}

/// Receives row selections.
pub trait SelectionSink {
    fn record(&mut self, event: SelectionEvent);
}

/// Sink that forwards selections to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SelectionSink for TracingSink {
    fn record(&mut self, event: SelectionEvent) {
        tracing::info!(
            row = event.row,
            title = %event.title,
            selected_at = %event.selected_at.to_rfc3339(),
            "row selected"
        );
    }
}

/// List model over a [`ShowCollection`] with a constant row height.
pub struct ShowListModel {
    shows: ShowCollection,
    row_height: f32,
    sink: Box<dyn SelectionSink>,
}

impl ShowListModel {
    #[must_use]
    pub fn new(shows: ShowCollection, row_height: f32, sink: Box<dyn SelectionSink>) -> Self {
        Self {
            shows,
            row_height,
            sink,
        }
    }
}

impl std::fmt::Debug for ShowListModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowListModel")
            .field("count", &self.shows.len())
            .field("row_height", &self.row_height)
            .finish_non_exhaustive()
    }
}

impl ListModel for ShowListModel {
    type Item = Show;

    fn count(&self) -> usize {
        self.shows.len()
    }

    fn item_at(&self, index: usize) -> Option<&Show> {
        self.shows.get(index)
    }

    fn row_height(&self, _index: usize) -> f32 {
        self.row_height
    }

    fn select(&mut self, index: usize) -> Result<()> {
        let show = self.shows.get(index).ok_or(ScreenError::RowOutOfRange {
            index,
            len: self.shows.len(),
        })?;

        let event = SelectionEvent {
            row: index,
            title: show.title.clone(),
            selected_at: Utc::now(),
        };
        self.sink.record(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<SelectionEvent>>>);

    impl SelectionSink for RecordingSink {
        fn record(&mut self, event: SelectionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn shows(n: usize) -> ShowCollection {
        (0..n)
            .map(|i| {
                Show::new(
                    format!("Title {i}"),
                    format!("Detail {i}"),
                    format!("img-{i}"),
                )
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn model(n: usize) -> (ShowListModel, RecordingSink) {
        let sink = RecordingSink::default();
        (ShowListModel::new(shows(n), 100.0, Box::new(sink.clone())), sink)
    }

    #[test]
    fn count_matches_collection() {
        for n in [0, 1, 9] {
            assert_eq!(model(n).0.count(), n);
        }
    }

    #[test]
    fn rows_show_their_own_record() {
        let records = shows(4);
        let (model, _) = model(4);
        for i in 0..4 {
            let row = model.item_at(i).unwrap();
            assert_eq!(Some(row), records.get(i));
            assert_eq!(row.title, format!("Title {i}"));
            assert_eq!(row.detail, format!("Detail {i}"));
            assert_eq!(row.image, format!("img-{i}"));
        }
        assert!(model.item_at(4).is_none());
    }

    #[test]
    fn row_height_is_constant() {
        let (model, _) = model(3);
        assert!((0..3).all(|i| (model.row_height(i) - 100.0).abs() < f32::EPSILON));
    }

    #[test]
    fn select_reports_to_sink() {
        let (mut model, sink) = model(3);
        model.select(1).unwrap();

        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].row, 1);
        assert_eq!(events[0].title, "Title 1");
    }

    #[test]
    fn select_out_of_range_never_reaches_sink() {
        let (mut model, sink) = model(0);
        let err = model.select(0).unwrap_err();

        assert!(matches!(err, ScreenError::RowOutOfRange { index: 0, len: 0 }));
        assert!(sink.0.lock().unwrap().is_empty());
    }
}
