//! Flexbox layout hints attached to every node.
//!
//! Defaults follow Yoga rather than CSS: children stack in a column, stretch
//! across the cross axis, and neither grow nor shrink unless asked to.
//!
//! # Examples
//!
//! ```
//! use flexchill::layout::{Align, Edges, FlexDirection, Style};
//!
//! let row = Style::new()
//!     .direction(FlexDirection::Row)
//!     .padding(Edges::all(8.0))
//!     .align_items(Align::Center);
//! assert!(row.direction.is_row());
//! assert_eq!(row.padding.horizontal(), 16.0);
//! ```

/// A size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Sized by content, flex and alignment.
    #[default]
    Auto,
    /// Fixed size in points.
    Points(f32),
    /// Percentage (0-100) of the parent's content box.
    Percent(f32),
}

impl Dimension {
    /// Resolves to points against the parent's content size.
    ///
    /// Returns `None` for `Auto`, and for `Percent` when the parent size is not
    /// known yet.
    #[must_use]
    pub fn resolve(self, parent: Option<f32>) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Points(points) => Some(points.max(0.0)),
            Self::Percent(percent) => parent.map(|p| (p * percent / 100.0).max(0.0)),
        }
    }

    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Insets on the four sides of a box, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Self = Self::all(0.0);

    /// Same inset on every side.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Left and right set to `horizontal`, top and bottom to `vertical`.
    #[must_use]
    pub const fn horizontal_vertical(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Left plus right.
    #[must_use]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }
}

/// Direction of the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
    ColumnReverse,
    RowReverse,
}

impl FlexDirection {
    #[must_use]
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[must_use]
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Distribution along the main axis (justify-content).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    /// First child at the start, last at the end, equal gaps between.
    SpaceBetween,
    /// Equal gaps around each child; edge gaps are half the inner ones.
    SpaceAround,
    /// Equal gaps everywhere, edges included.
    SpaceEvenly,
}

/// Placement along the cross axis (align-items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    FlexStart,
    FlexEnd,
    Center,
    /// Fill the cross axis unless the child fixes its cross size.
    #[default]
    Stretch,
}

/// Complete set of layout hints for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub direction: FlexDirection,
    pub justify_content: Justify,
    pub align_items: Align,
    pub padding: Edges,
    pub margin: Edges,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub width: Dimension,
    pub height: Dimension,
    /// Width divided by height.
    pub aspect_ratio: Option<f32>,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            direction: FlexDirection::Column,
            justify_content: Justify::FlexStart,
            align_items: Align::Stretch,
            padding: Edges::ZERO,
            margin: Edges::ZERO,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            aspect_ratio: None,
        }
    }

    #[must_use]
    pub const fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn justify_content(mut self, justify: Justify) -> Self {
        self.justify_content = justify;
        self
    }

    #[must_use]
    pub const fn align_items(mut self, align: Align) -> Self {
        self.align_items = align;
        self
    }

    #[must_use]
    pub const fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn margin_left(mut self, value: f32) -> Self {
        self.margin.left = value;
        self
    }

    #[must_use]
    pub fn margin_right(mut self, value: f32) -> Self {
        self.margin.right = value;
        self
    }

    #[must_use]
    pub fn margin_bottom(mut self, value: f32) -> Self {
        self.margin.bottom = value;
        self
    }

    #[must_use]
    pub const fn flex_grow(mut self, grow: f32) -> Self {
        self.flex_grow = grow;
        self
    }

    #[must_use]
    pub const fn flex_shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = shrink;
        self
    }

    #[must_use]
    pub const fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub const fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub const fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_yoga() {
        let style = Style::default();
        assert_eq!(style.direction, FlexDirection::Column);
        assert_eq!(style.align_items, Align::Stretch);
        assert_eq!(style.justify_content, Justify::FlexStart);
        assert_eq!(style.flex_shrink, 0.0);
    }

    #[test]
    fn percent_needs_parent() {
        assert_eq!(Dimension::Percent(50.0).resolve(None), None);
        assert_eq!(Dimension::Percent(50.0).resolve(Some(300.0)), Some(150.0));
        assert_eq!(Dimension::Points(-4.0).resolve(None), Some(0.0));
        assert_eq!(Dimension::Auto.resolve(Some(300.0)), None);
    }

    #[test]
    fn single_edge_setters() {
        let style = Style::new().margin_left(20.0).margin_bottom(5.0);
        assert_eq!(style.margin, Edges::new(0.0, 0.0, 5.0, 20.0));
    }
}
