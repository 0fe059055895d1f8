//! Painters for each kind of node content.
//!
//! Each painter draws one node into a [`Frame`](crate::ui::viewmodel::Frame)
//! given the cell area its layout frame covers. Painters never look at other
//! nodes; the renderer walks the tree in paint order and calls them.
//!
//! # Components
//!
//! - [`text`]: Wrapped, line-limited text
//! - [`media`]: Images, icon buttons and indicator bars
//! - [`table`]: List rows with the cursor highlight
//! - [`empty`]: Message shown when the screen cannot be built

mod empty;
mod media;
mod table;
mod text;

pub use empty::paint_empty_state;
pub use media::{paint_bar, paint_button, paint_image};
pub use table::paint_rows;
pub use text::paint_text;
