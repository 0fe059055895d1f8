//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin runtime performs them after the state has been updated.
//!
//! # Example
//!
//! ```rust
//! use flexchill::app::Action;
//!
//! let actions = vec![Action::CloseFocus];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,
}
