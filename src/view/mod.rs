//! Visual node tree.
//!
//! Screen elements (images, text, containers, buttons, indicator bars and the
//! episode list) are plain data nodes carrying their content and flexbox
//! layout hints. The layout pass reads them; the renderer paints them.
//!
//! - [`node`]: Node arena, content kinds and fonts

pub mod node;

pub use node::{Content, Font, FontWeight, Node, NodeId, TextContent, ViewTree};
