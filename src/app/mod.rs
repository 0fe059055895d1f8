//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the pure build
//! and layout functions. The runtime only forwards events; everything that
//! changes the screen happens here.
//!
//! # Architecture
//!
//! ```text
//! Key / Resize → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                              ↓
//!                                   layout pass on viewport change
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen lifecycle phase
//! - [`state`]: Screen state container

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Phase;
pub use state::ScreenState;
