//! Domain layer for the show detail screen.
//!
//! This module contains the core data types, independent of Zellij-specific APIs
//! or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`show`]: Show record and the read-only show collection
//!
//! # Examples
//!
//! ```
//! use flexchill::domain::{Show, ShowCollection};
//!
//! let shows = ShowCollection::new(vec![Show::new("Pilot", "First episode", "pilot")]);
//! assert_eq!(shows.len(), 1);
//! ```

pub mod error;
pub mod show;

pub use error::{Result, ScreenError};
pub use show::{Show, ShowCollection};
