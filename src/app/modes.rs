//! Screen lifecycle phase.
//!
//! A screen is built once, then laid out every time its viewport changes:
//!
//! ```text
//! UnderConstruction ──first apply_viewport──▶ LaidOut ──resize──▶ LaidOut
//! ```
//!
//! Nothing is drawn from a screen that has not been laid out yet.

/// Where the screen is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Tree built, no geometry yet.
    #[default]
    UnderConstruction,

    /// Geometry computed for the current viewport.
    LaidOut,
}

impl Phase {
    #[must_use]
    pub const fn is_laid_out(self) -> bool {
        matches!(self, Self::LaidOut)
    }
}
