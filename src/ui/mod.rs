//! User interface layer: screen composition and terminal rendering.
//!
//! This module builds the detail screen's node tree and turns its laid-out
//! geometry into ANSI-styled output.
//!
//! # Architecture
//!
//! ```text
//! ShowCollection + ScreenConfig → composer::build → Screen
//! ScreenState (laid out) → compose_frame → Frame → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`composer`]: Builds the full screen from data and configuration
//! - [`fragments`]: Label, action and tab builders
//! - [`list`]: List model and selection sink
//! - [`viewmodel`]: Frame, cell and point-to-cell conversion types
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Painters for each kind of node content
//! - [`helpers`]: ANSI serialization
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod composer;
pub mod fragments;
pub mod helpers;
pub mod list;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use composer::{build, ActionConfig, Screen, ScreenConfig, ScreenNodes, TabConfig};
pub use list::{ListModel, SelectionEvent, SelectionSink, ShowListModel, TracingSink};
pub use renderer::{compose_frame, compose_unavailable, render, render_unavailable};
pub use theme::Theme;
pub use viewmodel::{CellMetrics, Frame};
