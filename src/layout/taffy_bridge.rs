//! Flexbox layout through Taffy.
//!
//! The bridge:
//!
//! 1. Converts each node's [`Style`] into a `taffy::Style`
//! 2. Mirrors the [`ViewTree`] into a `TaffyTree` whose node context is the
//!    view node id
//! 3. Measures leaves: text through a [`TextMeasure`], images and buttons by
//!    their asset size, lists by their rows
//! 4. Walks the computed layout back into absolute frames
//!
//! The root takes the viewport size unless its style fixes a dimension, and
//! sits at the origin. Rounding is disabled: frames stay in points and are
//! snapped to cells only when painted.

use super::geometry::{Geometry, Rect, Size};
use super::measure::TextMeasure;
use super::style::{Align, Dimension, Edges, FlexDirection, Justify, Style};
use crate::domain::error::{Result, ScreenError};
use crate::view::{Content, NodeId, ViewTree};
use taffy::{AvailableSpace, LengthPercentage, LengthPercentageAuto, TaffyTree};

/// Computes frames for every attached node and the root's content extent.
///
/// Pure: the same tree, viewport and metrics always produce the same geometry.
///
/// # Errors
///
/// Returns [`ScreenError::Layout`] when Taffy rejects the mirrored tree.
pub fn layout(tree: &ViewTree, viewport: Size, measure: &dyn TextMeasure) -> Result<Geometry> {
    let _span = tracing::debug_span!(
        "layout",
        nodes = tree.len(),
        width = viewport.width,
        height = viewport.height
    )
    .entered();

    let root = tree.root();
    let order = tree.descendants(root);

    let mut flex_tree: TaffyTree<NodeId> = TaffyTree::with_capacity(order.len());
    flex_tree.disable_rounding();

    let mut handles: Vec<Option<taffy::NodeId>> = vec![None; tree.len()];
    for &id in &order {
        let mut style = taffy_style(&tree.node(id).style);
        if id == root {
            style.size = root_size(&tree.node(id).style, viewport);
        }
        let handle = flex_tree
            .new_leaf_with_context(style, id)
            .map_err(layout_error)?;
        handles[id.index()] = Some(handle);
    }
    for &id in &order {
        let children: Vec<taffy::NodeId> = tree
            .children(id)
            .iter()
            .filter_map(|child| handles[child.index()])
            .collect();
        if let (Some(handle), false) = (handles[id.index()], children.is_empty()) {
            flex_tree.set_children(handle, &children).map_err(layout_error)?;
        }
    }

    let root_handle = handles[root.index()]
        .ok_or_else(|| ScreenError::Layout("root was not mirrored".to_string()))?;
    flex_tree
        .compute_layout_with_measure(
            root_handle,
            taffy::Size {
                width: AvailableSpace::Definite(viewport.width),
                height: AvailableSpace::Definite(viewport.height),
            },
            |known, available, _handle, context, _style| match context {
                Some(id) => measure_leaf(tree, *id, known, available, measure),
                None => taffy::Size {
                    width: 0.0,
                    height: 0.0,
                },
            },
        )
        .map_err(layout_error)?;

    let mut frames = vec![Rect::ZERO; tree.len()];
    for &id in &order {
        let Some(handle) = handles[id.index()] else {
            continue;
        };
        let computed = flex_tree.layout(handle).map_err(layout_error)?;
        let (origin_x, origin_y) = tree
            .node(id)
            .parent()
            .map_or((0.0, 0.0), |parent| {
                let frame = frames[parent.index()];
                (frame.x, frame.y)
            });
        frames[id.index()] = Rect::new(
            origin_x + computed.location.x,
            origin_y + computed.location.y,
            computed.size.width,
            computed.size.height,
        );
    }

    let origin = frames[root.index()];
    let extent = tree
        .children(root)
        .iter()
        .map(|&child| {
            let frame = frames[child.index()];
            Rect::new(frame.x - origin.x, frame.y - origin.y, frame.width, frame.height)
        })
        .fold(Rect::ZERO, Rect::union);

    tracing::debug!(
        content_width = extent.width,
        content_height = extent.height,
        "layout pass complete"
    );

    Ok(Geometry::new(frames, viewport, extent.size()))
}

fn layout_error(error: taffy::TaffyError) -> ScreenError {
    ScreenError::Layout(error.to_string())
}

/// Root box: fixed dimensions from its style, the viewport otherwise.
fn root_size(style: &Style, viewport: Size) -> taffy::Size<taffy::Dimension> {
    let width = style.width.resolve(Some(viewport.width)).unwrap_or(viewport.width);
    let height = style.height.resolve(Some(viewport.height)).unwrap_or(viewport.height);
    taffy::Size {
        width: taffy::Dimension::Length(width),
        height: taffy::Dimension::Length(height),
    }
}

/// Layout hints as a Taffy style.
///
/// Minimum sizes are zero as in Yoga: content never blocks shrinking.
fn taffy_style(style: &Style) -> taffy::Style {
    taffy::Style {
        flex_direction: match style.direction {
            FlexDirection::Column => taffy::FlexDirection::Column,
            FlexDirection::Row => taffy::FlexDirection::Row,
            FlexDirection::ColumnReverse => taffy::FlexDirection::ColumnReverse,
            FlexDirection::RowReverse => taffy::FlexDirection::RowReverse,
        },
        justify_content: Some(match style.justify_content {
            Justify::FlexStart => taffy::JustifyContent::FlexStart,
            Justify::FlexEnd => taffy::JustifyContent::FlexEnd,
            Justify::Center => taffy::JustifyContent::Center,
            Justify::SpaceBetween => taffy::JustifyContent::SpaceBetween,
            Justify::SpaceAround => taffy::JustifyContent::SpaceAround,
            Justify::SpaceEvenly => taffy::JustifyContent::SpaceEvenly,
        }),
        align_items: Some(match style.align_items {
            Align::FlexStart => taffy::AlignItems::FlexStart,
            Align::FlexEnd => taffy::AlignItems::FlexEnd,
            Align::Center => taffy::AlignItems::Center,
            Align::Stretch => taffy::AlignItems::Stretch,
        }),
        padding: padding(style.padding),
        margin: margin(style.margin),
        flex_grow: style.flex_grow.max(0.0),
        flex_shrink: style.flex_shrink.max(0.0),
        size: taffy::Size {
            width: dimension(style.width),
            height: dimension(style.height),
        },
        min_size: taffy::Size {
            width: taffy::Dimension::Length(0.0),
            height: taffy::Dimension::Length(0.0),
        },
        aspect_ratio: style.aspect_ratio.filter(|ratio| *ratio > 0.0),
        ..taffy::Style::default()
    }
}

fn dimension(dimension: Dimension) -> taffy::Dimension {
    match dimension {
        Dimension::Auto => taffy::Dimension::Auto,
        Dimension::Points(points) => taffy::Dimension::Length(points.max(0.0)),
        Dimension::Percent(percent) => taffy::Dimension::Percent(percent.max(0.0) / 100.0),
    }
}

fn padding(edges: Edges) -> taffy::Rect<LengthPercentage> {
    taffy::Rect {
        left: LengthPercentage::Length(edges.left),
        right: LengthPercentage::Length(edges.right),
        top: LengthPercentage::Length(edges.top),
        bottom: LengthPercentage::Length(edges.bottom),
    }
}

fn margin(edges: Edges) -> taffy::Rect<LengthPercentageAuto> {
    taffy::Rect {
        left: LengthPercentageAuto::Length(edges.left),
        right: LengthPercentageAuto::Length(edges.right),
        top: LengthPercentageAuto::Length(edges.top),
        bottom: LengthPercentageAuto::Length(edges.bottom),
    }
}

/// Content size of a leaf. Known dimensions win over measured ones.
fn measure_leaf(
    tree: &ViewTree,
    id: NodeId,
    known: taffy::Size<Option<f32>>,
    available: taffy::Size<AvailableSpace>,
    measure: &dyn TextMeasure,
) -> taffy::Size<f32> {
    let natural = match &tree.node(id).content {
        Content::Text(text) => {
            let max_width = known.width.or(match available.width {
                AvailableSpace::Definite(width) => Some(width),
                AvailableSpace::MinContent => {
                    Some(measure.min_content_width(&text.text, text.font))
                }
                AvailableSpace::MaxContent => None,
            });
            measure.measure(&text.text, text.font, text.max_lines, max_width)
        }
        Content::Image(asset) | Content::Button { icon: asset } => {
            Size::new(asset.width, asset.height)
        }
        Content::List { row_height, rows } => {
            Size::new(0.0, row_height.max(0.0) * *rows as f32)
        }
        Content::Bar { .. } | Content::Container | Content::Scroll => Size::ZERO,
    };

    taffy::Size {
        width: known.width.unwrap_or(natural.width),
        height: known.height.unwrap_or(natural.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceMetrics;
    use crate::storage::ImageAsset;
    use crate::view::{Font, Node, TextContent};

    fn boxed(width: f32, height: f32) -> Node {
        Node::new(Content::Container).with_style(
            Style::new()
                .width(Dimension::Points(width))
                .height(Dimension::Points(height)),
        )
    }

    fn container(style: Style) -> Node {
        Node::new(Content::Container).with_style(style)
    }

    fn root(style: Style) -> ViewTree {
        ViewTree::new(Node::new(Content::Scroll).with_style(style))
    }

    fn run(tree: &ViewTree, width: f32, height: f32) -> Geometry {
        layout(tree, Size::new(width, height), &MonospaceMetrics::default()).unwrap()
    }

    #[test]
    fn root_takes_viewport() {
        let tree = root(Style::new());
        let geometry = run(&tree, 320.0, 480.0);
        assert_eq!(
            geometry.frame(tree.root()),
            Some(Rect::new(0.0, 0.0, 320.0, 480.0))
        );
        assert_eq!(geometry.content_size(), Size::ZERO);
    }

    #[test]
    fn column_stacks_and_stretches() {
        let mut tree = root(Style::new().padding(Edges::all(8.0)));
        let r = tree.root();
        let a = tree.insert_child(
            r,
            container(Style::new().height(Dimension::Points(40.0))),
        );
        let b = tree.insert_child(
            r,
            container(
                Style::new()
                    .height(Dimension::Points(20.0))
                    .margin_bottom(5.0),
            ),
        );

        let g = run(&tree, 200.0, 400.0);
        assert_eq!(g.frame(a), Some(Rect::new(8.0, 8.0, 184.0, 40.0)));
        assert_eq!(g.frame(b), Some(Rect::new(8.0, 48.0, 184.0, 20.0)));
    }

    #[test]
    fn grow_shares_free_space() {
        let mut tree = root(Style::new().direction(FlexDirection::Row));
        let r = tree.root();
        let a = tree.insert_child(r, container(Style::new().flex_grow(1.0)));
        let b = tree.insert_child(r, container(Style::new().flex_grow(2.0)));
        let c = tree.insert_child(r, boxed(30.0, 10.0));

        let g = run(&tree, 330.0, 50.0);
        assert_eq!(g.frame(a).map(|f| f.width), Some(100.0));
        assert_eq!(g.frame(b).map(|f| (f.x, f.width)), Some((100.0, 200.0)));
        assert_eq!(g.frame(c).map(|f| f.x), Some(300.0));
    }

    #[test]
    fn shrink_weights_by_size() {
        let mut tree = root(Style::new().direction(FlexDirection::Row));
        let r = tree.root();
        let a = tree.insert_child(
            r,
            container(Style::new().width(Dimension::Points(100.0)).flex_shrink(1.0)),
        );
        let b = tree.insert_child(
            r,
            container(Style::new().width(Dimension::Points(300.0)).flex_shrink(1.0)),
        );

        let g = run(&tree, 200.0, 50.0);
        assert_eq!(g.frame(a).map(|f| f.width), Some(50.0));
        assert_eq!(g.frame(b).map(|f| f.width), Some(150.0));
    }

    #[test]
    fn no_shrink_by_default() {
        let mut tree = root(Style::new().direction(FlexDirection::Row));
        let r = tree.root();
        let a = tree.insert_child(r, boxed(150.0, 10.0));
        let b = tree.insert_child(r, boxed(150.0, 10.0));

        let g = run(&tree, 200.0, 10.0);
        assert_eq!(g.frame(a).map(|f| f.width), Some(150.0));
        assert_eq!(g.frame(b).map(|f| (f.x, f.width)), Some((150.0, 150.0)));
    }

    #[test]
    fn space_between_pins_ends() {
        let mut tree = root(
            Style::new()
                .direction(FlexDirection::Row)
                .justify_content(Justify::SpaceBetween),
        );
        let r = tree.root();
        let a = tree.insert_child(r, boxed(20.0, 10.0));
        let b = tree.insert_child(r, boxed(20.0, 10.0));
        let c = tree.insert_child(r, boxed(20.0, 10.0));

        let g = run(&tree, 100.0, 10.0);
        assert_eq!(g.frame(a).map(|f| f.x), Some(0.0));
        assert_eq!(g.frame(b).map(|f| f.x), Some(40.0));
        assert_eq!(g.frame(c).map(|f| f.x), Some(80.0));
    }

    #[test]
    fn center_alignment_uses_measured_text() {
        let mut tree = root(Style::new().align_items(Align::Center));
        let r = tree.root();
        let label = tree.insert_child(
            r,
            Node::new(Content::Text(TextContent::new(
                "Share",
                Font::regular(14.0),
                "#fff",
            ))),
        );

        let g = run(&tree, 100.0, 100.0);
        // "Share" is 5 * 7 points wide.
        assert_eq!(g.frame(label), Some(Rect::new(32.5, 0.0, 35.0, 17.5)));
    }

    #[test]
    fn aspect_ratio_derives_height_from_stretched_width() {
        let mut tree = root(Style::new());
        let r = tree.root();
        let image = tree.insert_child(r, container(Style::new().aspect_ratio(2.0)));

        let g = run(&tree, 300.0, 600.0);
        assert_eq!(g.frame(image), Some(Rect::new(0.0, 0.0, 300.0, 150.0)));
    }

    #[test]
    fn image_leaf_uses_asset_size() {
        let mut tree = root(Style::new().align_items(Align::FlexStart));
        let r = tree.root();
        let asset = ImageAsset {
            name: "poster".to_string(),
            width: 120.0,
            height: 80.0,
            glyph: "#".to_string(),
            is_placeholder: false,
        };
        let image = tree.insert_child(r, Node::new(Content::Image(asset)));

        let g = run(&tree, 300.0, 600.0);
        assert_eq!(g.frame(image), Some(Rect::new(0.0, 0.0, 120.0, 80.0)));
    }

    #[test]
    fn reverse_direction_mirrors_main_axis() {
        let mut tree = root(Style::new().direction(FlexDirection::RowReverse));
        let r = tree.root();
        let a = tree.insert_child(r, boxed(20.0, 10.0));
        let b = tree.insert_child(r, boxed(30.0, 10.0));

        let g = run(&tree, 100.0, 10.0);
        assert_eq!(g.frame(a).map(|f| f.x), Some(80.0));
        assert_eq!(g.frame(b).map(|f| f.x), Some(50.0));
    }

    #[test]
    fn content_size_is_union_of_root_children() {
        let mut tree = root(Style::new());
        let r = tree.root();
        tree.insert_child(r, boxed(50.0, 300.0));
        tree.insert_child(r, boxed(50.0, 400.0));

        let g = run(&tree, 200.0, 500.0);
        // Children overflow the viewport; the extent covers both.
        assert_eq!(g.content_size(), Size::new(50.0, 700.0));
    }

    #[test]
    fn list_height_covers_every_row() {
        let mut tree = root(Style::new());
        let r = tree.root();
        tree.insert_child(r, boxed(50.0, 300.0));
        let list = tree.insert_child(
            r,
            Node::new(Content::List {
                row_height: 100.0,
                rows: 4,
            })
            .with_style(Style::new().flex_grow(1.0)),
        );

        // Fixed content already overflows; the list keeps its rows anyway.
        let g = run(&tree, 200.0, 200.0);
        assert_eq!(g.frame(list), Some(Rect::new(0.0, 300.0, 200.0, 400.0)));
        assert_eq!(g.content_size().height, 700.0);
    }

    #[test]
    fn nested_row_sizes_from_children() {
        let mut tree = root(Style::new());
        let r = tree.root();
        let row = tree.insert_child(
            r,
            container(
                Style::new()
                    .direction(FlexDirection::Row)
                    .padding(Edges::all(8.0)),
            ),
        );
        let a = tree.insert_child(row, boxed(40.0, 24.0));

        let g = run(&tree, 200.0, 400.0);
        assert_eq!(g.frame(row), Some(Rect::new(0.0, 0.0, 200.0, 40.0)));
        assert_eq!(g.frame(a), Some(Rect::new(8.0, 8.0, 40.0, 24.0)));
    }

    #[test]
    fn detached_nodes_keep_an_empty_frame() {
        let mut tree = root(Style::new());
        let loose = tree.insert(boxed(10.0, 10.0));

        let g = run(&tree, 100.0, 100.0);
        assert_eq!(g.frame(loose), Some(Rect::ZERO));
    }
}
