//! Builders for the repeated pieces of the screen.
//!
//! Each builder inserts a small detached subtree into the [`ViewTree`] with
//! its layout hints already set and returns the subtree's root. The caller
//! attaches it where it belongs.

use crate::layout::{Align, Dimension, Edges, Style, TextMeasure};
use crate::storage::AssetCatalog;
use crate::ui::theme::Theme;
use crate::view::{Content, Font, Node, NodeId, TextContent, ViewTree};

/// Space below every label.
pub const LABEL_MARGIN_BOTTOM: f32 = 5.0;

/// Space after each action and tab group.
pub const GROUP_MARGIN_RIGHT: f32 = 20.0;

/// Padding around an action icon.
pub const BUTTON_PADDING: f32 = 10.0;

/// Thickness of the tab indicator bar.
pub const INDICATOR_HEIGHT: f32 = 3.0;

/// Font of action captions and unselected tabs.
pub const BODY_FONT: Font = Font::regular(14.0);

/// A dimmed text node with the standard bottom margin.
pub fn label(tree: &mut ViewTree, text: &str, font: Font, theme: &Theme) -> NodeId {
    tree.insert(
        Node::new(Content::Text(TextContent::new(text, font, &theme.colors.text_dim)))
            .with_style(Style::new().margin_bottom(LABEL_MARGIN_BOTTOM)),
    )
}

/// An icon button above a caption, centered, with trailing margin.
///
/// An unknown icon resolves to the empty placeholder image.
pub fn action(
    tree: &mut ViewTree,
    assets: &AssetCatalog,
    icon: &str,
    caption: &str,
    theme: &Theme,
) -> NodeId {
    let group = tree.insert(
        Node::new(Content::Container).with_style(
            Style::new()
                .align_items(Align::Center)
                .margin_right(GROUP_MARGIN_RIGHT),
        ),
    );

    tree.insert_child(
        group,
        Node::new(Content::Button {
            icon: assets.resolve(icon),
        })
        .with_style(Style::new().padding(Edges::all(BUTTON_PADDING))),
    );

    let caption = label(tree, caption, BODY_FONT, theme);
    tree.append_child(group, caption);

    group
}

/// A tab: indicator bar over a caption.
///
/// The bar is as wide as the caption renders and is filled with the accent
/// color only when `selected`; the caption is bold only when `selected`.
pub fn tab(
    tree: &mut ViewTree,
    caption: &str,
    selected: bool,
    theme: &Theme,
    measure: &dyn TextMeasure,
) -> NodeId {
    let font = if selected {
        Font::bold(BODY_FONT.size)
    } else {
        BODY_FONT
    };

    let group = tree.insert(
        Node::new(Content::Container).with_style(
            Style::new()
                .align_items(Align::Center)
                .margin_right(GROUP_MARGIN_RIGHT),
        ),
    );

    let color = selected.then(|| theme.colors.accent.clone());
    tree.insert_child(
        group,
        Node::new(Content::Bar { color }).with_style(
            Style::new()
                .width(Dimension::Points(measure.text_width(caption, font)))
                .height(Dimension::Points(INDICATOR_HEIGHT))
                .margin_bottom(LABEL_MARGIN_BOTTOM),
        ),
    );

    let caption = label(tree, caption, font, theme);
    tree.append_child(group, caption);

    group
}
