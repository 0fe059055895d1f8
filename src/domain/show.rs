//! Show records and the read-only show collection.
//!
//! A [`Show`] is one episode or series entry as shipped in the bundled catalog.
//! The [`ShowCollection`] wraps the loaded records in shared storage so the
//! screen composer and the list model can both hold it without copying.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single episode or series metadata entry.
///
/// # Fields
///
/// - `title`: Display title
/// - `detail`: Longer description text
/// - `image`: Asset identifier resolved through [`crate::storage::AssetCatalog`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
    pub detail: String,
    pub image: String,
}

impl Show {
    /// Creates a show record.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexchill::Show;
    ///
    /// let show = Show::new("A Study in Pink", "Dr Watson meets Sherlock.", "sherlock-1");
    /// assert_eq!(show.title, "A Study in Pink");
    /// ```
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            image: image.into(),
        }
    }
}

/// Ordered, immutable sequence of show records.
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCollection {
    shows: Arc<[Show]>,
}

impl ShowCollection {
    /// Wraps the given records, keeping their order.
    #[must_use]
    pub fn new(shows: Vec<Show>) -> Self {
        Self {
            shows: shows.into(),
        }
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Returns `true` when the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Record at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Show> {
        self.shows.get(index)
    }

    /// Iterates records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Show> {
        self.shows.iter()
    }
}

impl Default for ShowCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Show>> for ShowCollection {
    fn from(shows: Vec<Show>) -> Self {
        Self::new(shows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> ShowCollection {
        (0..n)
            .map(|i| Show::new(format!("title-{i}"), format!("detail-{i}"), format!("image-{i}")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn get_returns_record_at_position() {
        let shows = sample(3);
        assert_eq!(shows.len(), 3);
        assert_eq!(shows.get(1).map(|s| s.title.as_str()), Some("title-1"));
        assert!(shows.get(3).is_none());
    }

    #[test]
    fn clones_share_storage() {
        let shows = sample(2);
        let copy = shows.clone();
        assert!(Arc::ptr_eq(&shows.shows, &copy.shows));
    }

    #[test]
    fn empty_collection() {
        let shows = ShowCollection::default();
        assert!(shows.is_empty());
        assert_eq!(shows.iter().count(), 0);
    }
}
