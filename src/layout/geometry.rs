//! Resolved positions and sizes.

use crate::view::NodeId;

/// Width and height in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in points, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    frames: Vec<Rect>,
    viewport: Size,
    content_size: Size,
}

impl Geometry {
    pub(crate) fn new(frames: Vec<Rect>, viewport: Size, content_size: Size) -> Self {
        Self {
            frames,
            viewport,
            content_size,
        }
    }

    /// Absolute frame of a node.
    #[must_use]
    pub fn frame(&self, id: NodeId) -> Option<Rect> {
        self.frames.get(id.index()).copied()
    }

    /// Viewport the pass was computed for.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Scrollable extent of the root: union of its direct children's frames.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }
}
