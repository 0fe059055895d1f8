//! Flexbox layout of the screen tree.
//!
//! The layout hints of a [`crate::view::ViewTree`] are handed to Taffy and
//! resolved into absolute frames for a given viewport. The hints cover the
//! subset of flexbox the screen uses: direction, padding, margin, grow,
//! shrink, justification, alignment, explicit or percent dimensions and
//! aspect ratio.
//!
//! ```text
//! ViewTree + viewport ──layout()──▶ Geometry { frames, content_size }
//! ```
//!
//! # Modules
//!
//! - [`style`]: Layout hints (`Style`, `Edges`, `Dimension`, enums)
//! - [`taffy_bridge`]: The layout pass through Taffy
//! - [`geometry`]: `Rect`, `Size` and the pass output
//! - [`measure`]: Text measurement trait and monospace metrics

pub mod geometry;
pub mod measure;
pub mod style;
pub mod taffy_bridge;

pub use taffy_bridge::layout;
pub use geometry::{Geometry, Rect, Size};
pub use measure::{wrap_text, MonospaceMetrics, TextMeasure};
pub use style::{Align, Dimension, Edges, FlexDirection, Justify, Style};
