//! Visual node arena.
//!
//! The screen is a tree of [`Node`]s stored in a [`ViewTree`] arena and
//! addressed by [`NodeId`]. Nodes are created with their content and layout
//! hints fully set, then attached to exactly one parent. Nothing is removed
//! individually; the whole tree is dropped with the screen.

use crate::layout::Style;
use crate::storage::ImageAsset;

/// Index of a node inside its [`ViewTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Font weight used by text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font hint for a text node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Point size.
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    /// Regular system font at `size` points.
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    /// Bold system font at `size` points.
    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }

    #[must_use]
    pub fn is_bold(self) -> bool {
        self.weight == FontWeight::Bold
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::regular(14.0)
    }
}

/// Text and its styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub font: Font,
    /// Hex foreground color.
    pub color: String,
    /// Maximum number of wrapped lines, `None` for unlimited.
    pub max_lines: Option<u32>,
}

impl TextContent {
    /// Single-style text without a line limit.
    #[must_use]
    pub fn new(text: impl Into<String>, font: Font, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font,
            color: color.into(),
            max_lines: None,
        }
    }

    /// Limits wrapping to `lines` lines.
    #[must_use]
    pub fn max_lines(mut self, lines: u32) -> Self {
        self.max_lines = Some(lines);
        self
    }
}

/// What a node displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Scrollable root container.
    Scroll,
    /// Plain grouping container.
    Container,
    Text(TextContent),
    Image(ImageAsset),
    /// Icon button.
    Button { icon: ImageAsset },
    /// Thin indicator bar, filled only when a color is set.
    Bar { color: Option<String> },
    /// Scrollable list of fixed-height rows backed by a list model.
    List { row_height: f32, rows: usize },
}

/// One screen element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub content: Content,
    pub style: Style,
    /// Hex background color.
    pub background: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    /// Creates a detached node with default layout hints.
    #[must_use]
    pub fn new(content: Content) -> Self {
        Self {
            content,
            style: Style::default(),
            background: None,
            children: Vec::new(),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Children in attachment order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Text of a text node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(&text.text),
            _ => None,
        }
    }
}

/// Arena holding every node of one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl ViewTree {
    /// Creates a tree whose root is the given node.
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Adds a detached node and returns its id.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Attaches `child` as the last child of `parent`.
    ///
    /// A node has at most one parent; attaching it twice is a construction bug.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.nodes[child.0].parent.is_none(),
            "node {child:?} is already attached"
        );
        debug_assert_ne!(parent, child, "a node cannot contain itself");
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Inserts `node` and attaches it under `parent` in one step.
    pub fn insert_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.insert(node);
        self.append_child(parent, id);
        id
    }

    /// Node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    /// Number of nodes, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of `id` and everything below it in pre-order (paint order).
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            order.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        order
    }

    /// Texts of every text node under `id`, in paint order.
    #[must_use]
    pub fn texts(&self, id: NodeId) -> Vec<&str> {
        self.descendants(id)
            .into_iter()
            .filter_map(|n| self.node(n).text())
            .collect()
    }
}
