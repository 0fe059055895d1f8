//! Screen composition.
//!
//! [`build`] turns the show collection and a [`ScreenConfig`] into the full
//! node tree of the detail screen, fragment by fragment, top to bottom:
//!
//! ```text
//! Scroll
//! ├── image         poster of the featured record
//! ├── summary       ***** | 2010  TV-14  3 Series | spacer
//! ├── title         S3:E3  <title>
//! ├── description   detail (3 lines), Cast: ..., Creator: ...
//! ├── actions       [+] My List  [^] Share
//! ├── tabs          EPISODES  MORE
//! └── list          one row per record
//! ```
//!
//! Building never lays out; frames come from [`crate::layout::layout`].

use crate::domain::error::{Result, ScreenError};
use crate::domain::{Show, ShowCollection};
use crate::layout::{Dimension, Edges, FlexDirection, Justify, Style, TextMeasure};
use crate::storage::AssetCatalog;
use crate::ui::fragments;
use crate::ui::theme::Theme;
use crate::view::{Content, Font, Node, NodeId, TextContent, ViewTree};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An action button below the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Asset identifier of the icon.
    pub icon: String,
    pub caption: String,
}

/// A tab in the selector above the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    pub caption: String,
    #[serde(default)]
    pub selected: bool,
}

/// Every constant the screen is built from.
///
/// Loadable from TOML; missing keys keep their defaults.
///
/// # Examples
///
/// ```
/// use flexchill::ui::ScreenConfig;
///
/// let config: ScreenConfig = toml::from_str("featured_index = 0").unwrap();
/// assert_eq!(config.featured_index, 0);
/// assert_eq!(config.series_label, "S3:E3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Index of the record shown in the poster, title and description.
    pub featured_index: usize,
    /// Padding of the row fragments.
    pub padding: f32,
    /// Horizontal padding of the description.
    pub padding_horizontal: f32,
    /// Height of every list row.
    pub row_height: f32,
    /// Number of rating stars.
    pub popularity: usize,
    pub year: String,
    pub rating: String,
    pub length: String,
    pub cast: String,
    pub creators: String,
    /// Short label before the title, e.g. `S3:E3`.
    pub series_label: String,
    pub actions: Vec<ActionConfig>,
    pub tabs: Vec<TabConfig>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            featured_index: 2,
            padding: 8.0,
            padding_horizontal: 8.0,
            row_height: 100.0,
            popularity: 5,
            year: "2010".to_string(),
            rating: "TV-14".to_string(),
            length: "3 Series".to_string(),
            cast: "Benedict Cumberbatch, Martin Freeman, Una Stubbs".to_string(),
            creators: "Mark Gatiss, Steven Moffat".to_string(),
            series_label: "S3:E3".to_string(),
            actions: vec![
                ActionConfig {
                    icon: "add".to_string(),
                    caption: "My List".to_string(),
                },
                ActionConfig {
                    icon: "share".to_string(),
                    caption: "Share".to_string(),
                },
            ],
            tabs: vec![
                TabConfig {
                    caption: "EPISODES".to_string(),
                    selected: true,
                },
                TabConfig {
                    caption: "MORE".to_string(),
                    selected: false,
                },
            ],
        }
    }
}

impl ScreenConfig {
    /// Loads a screen configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Io`] if the file cannot be read and
    /// [`ScreenError::Config`] if it is not valid TOML for this type.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ScreenError::Config(format!("Failed to parse screen config: {e}")))
    }
}

/// Ids of the fragment roots, for tests and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenNodes {
    pub root: NodeId,
    pub image: NodeId,
    pub summary: NodeId,
    pub title: NodeId,
    /// Text node holding the featured record's title.
    pub title_text: NodeId,
    pub description: NodeId,
    pub actions: NodeId,
    pub tabs: NodeId,
    pub list: NodeId,
}

/// A fully built, not yet laid out, detail screen.
#[derive(Debug, Clone)]
pub struct Screen {
    pub tree: ViewTree,
    /// Record shown in the poster, title and description.
    pub featured: Show,
    pub nodes: ScreenNodes,
}

/// Builds the detail screen.
///
/// # Errors
///
/// Returns [`ScreenError::FeaturedIndexOutOfRange`] when
/// `config.featured_index` does not address a record. No node is created in
/// that case.
pub fn build(
    shows: &ShowCollection,
    config: &ScreenConfig,
    assets: &AssetCatalog,
    theme: &Theme,
    measure: &dyn TextMeasure,
) -> Result<Screen> {
    let _span = tracing::debug_span!(
        "build_screen",
        shows = shows.len(),
        featured_index = config.featured_index
    )
    .entered();

    let featured = shows
        .get(config.featured_index)
        .cloned()
        .ok_or(ScreenError::FeaturedIndexOutOfRange {
            index: config.featured_index,
            len: shows.len(),
        })?;

    let mut composer = Composer {
        tree: ViewTree::new(
            Node::new(Content::Scroll)
                .with_style(Style::new().justify_content(Justify::FlexStart))
                .with_background(&theme.colors.background),
        ),
        config,
        assets,
        theme,
        measure,
    };
    let root = composer.tree.root();

    let image = composer.image(&featured);
    let summary = composer.summary();
    let (title, title_text) = composer.title(&featured);
    let description = composer.description(&featured);
    let actions = composer.actions();
    let tabs = composer.tabs();
    let list = composer.list(shows.len());

    for fragment in [image, summary, title, description, actions, tabs, list] {
        composer.tree.append_child(root, fragment);
    }

    tracing::debug!(
        nodes = composer.tree.len(),
        title = %featured.title,
        "screen built"
    );

    Ok(Screen {
        tree: composer.tree,
        featured,
        nodes: ScreenNodes {
            root,
            image,
            summary,
            title,
            title_text,
            description,
            actions,
            tabs,
            list,
        },
    })
}

struct Composer<'a> {
    tree: ViewTree,
    config: &'a ScreenConfig,
    assets: &'a AssetCatalog,
    theme: &'a Theme,
    measure: &'a dyn TextMeasure,
}

impl Composer<'_> {
    fn padded_row(&mut self) -> NodeId {
        self.tree.insert(
            Node::new(Content::Container).with_style(
                Style::new()
                    .direction(FlexDirection::Row)
                    .padding(Edges::all(self.config.padding)),
            ),
        )
    }

    fn text(&self, text: &str, font: Font, color: &str) -> Node {
        Node::new(Content::Text(TextContent::new(text, font, color)))
    }

    fn image(&mut self, show: &Show) -> NodeId {
        let asset = self.assets.resolve(&show.image);
        let ratio = asset.aspect_ratio();
        self.tree.insert(
            Node::new(Content::Image(asset))
                .with_style(Style::new().flex_grow(1.0).aspect_ratio(ratio))
                .with_background(&self.theme.colors.image_placeholder),
        )
    }

    fn summary(&mut self) -> NodeId {
        let summary = self.padded_row();

        let stars = "*".repeat(self.config.popularity);
        let rating = self.text(&stars, Font::default(), &self.theme.colors.rating);
        self.tree
            .insert_child(summary, rating.with_style(Style::new().flex_grow(1.0)));

        let info = self.tree.insert_child(
            summary,
            Node::new(Content::Container).with_style(
                Style::new()
                    .direction(FlexDirection::Row)
                    .flex_grow(2.0)
                    .justify_content(Justify::SpaceBetween),
            ),
        );
        for item in [&self.config.year, &self.config.rating, &self.config.length] {
            let label = self.text(item, Font::regular(14.0), &self.theme.colors.text_dim);
            self.tree.insert_child(info, label);
        }

        self.tree.insert_child(
            summary,
            Node::new(Content::Container).with_style(
                Style::new()
                    .width(Dimension::Points(100.0))
                    .height(Dimension::Points(1.0))
                    .flex_grow(1.0),
            ),
        );

        summary
    }

    fn title(&mut self, show: &Show) -> (NodeId, NodeId) {
        let title = self.padded_row();

        let series = fragments::label(
            &mut self.tree,
            &self.config.series_label,
            Font::bold(16.0),
            self.theme,
        );
        self.tree.append_child(title, series);

        let text = self.text(&show.title, Font::bold(16.0), &self.theme.colors.text_dim);
        let text = self.tree.insert_child(
            title,
            text.with_style(Style::new().margin_left(20.0).margin_bottom(5.0)),
        );

        (title, text)
    }

    fn description(&mut self, show: &Show) -> NodeId {
        let padding = Edges::horizontal_vertical(self.config.padding_horizontal, 0.0);
        let description = self
            .tree
            .insert(Node::new(Content::Container).with_style(Style::new().padding(padding)));

        let color = &self.theme.colors.text_dim;
        let detail = TextContent::new(&show.detail, Font::regular(14.0), color).max_lines(3);
        let detail =
            Node::new(Content::Text(detail)).with_style(Style::new().margin_bottom(5.0));
        self.tree.insert_child(description, detail);

        let cast = format!("Cast: {}", self.config.cast);
        let creators = format!("Creator: {}", self.config.creators);
        for text in [cast, creators] {
            let label = fragments::label(&mut self.tree, &text, Font::bold(14.0), self.theme);
            self.tree.append_child(description, label);
        }

        description
    }

    fn actions(&mut self) -> NodeId {
        let actions = self.padded_row();
        for entry in &self.config.actions {
            let action = fragments::action(
                &mut self.tree,
                self.assets,
                &entry.icon,
                &entry.caption,
                self.theme,
            );
            self.tree.append_child(actions, action);
        }
        actions
    }

    fn tabs(&mut self) -> NodeId {
        let tabs = self.padded_row();
        for entry in &self.config.tabs {
            let tab = fragments::tab(
                &mut self.tree,
                &entry.caption,
                entry.selected,
                self.theme,
                self.measure,
            );
            self.tree.append_child(tabs, tab);
        }
        tabs
    }

    /// The list's natural height holds every row, so the root's content
    /// extent reaches the last one even when the fragments above overflow.
    fn list(&mut self, rows: usize) -> NodeId {
        self.tree.insert(
            Node::new(Content::List {
                row_height: self.config.row_height,
                rows,
            })
            .with_style(Style::new().flex_grow(1.0))
            .with_background(&self.theme.colors.background),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceMetrics;

    fn shows(n: usize) -> ShowCollection {
        (0..n)
            .map(|i| {
                Show::new(
                    format!("Title {i}"),
                    format!("Detail {i}"),
                    format!("show-s1e{}", i + 1),
                )
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn build_with(shows: &ShowCollection, config: &ScreenConfig) -> Result<Screen> {
        build(
            shows,
            config,
            &AssetCatalog::bundled().unwrap(),
            &Theme::default(),
            &MonospaceMetrics::default(),
        )
    }

    #[test]
    fn featured_record_is_the_configured_index() {
        let shows = shows(5);
        for index in 0..5 {
            let config = ScreenConfig {
                featured_index: index,
                ..ScreenConfig::default()
            };
            let screen = build_with(&shows, &config).unwrap();
            assert_eq!(&screen.featured, shows.get(index).unwrap());
        }
    }

    #[test]
    fn default_index_shows_third_title_and_detail() {
        let screen = build_with(&shows(5), &ScreenConfig::default()).unwrap();
        let tree = &screen.tree;

        assert_eq!(tree.node(screen.nodes.title_text).text(), Some("Title 2"));
        assert_eq!(tree.texts(screen.nodes.title), vec!["S3:E3", "Title 2"]);
        assert_eq!(tree.texts(screen.nodes.description)[0], "Detail 2");
        match &tree.node(screen.nodes.image).content {
            Content::Image(asset) => assert_eq!(asset.name, "show-s1e3"),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn index_past_end_fails_before_building() {
        let err = build_with(&shows(5), &ScreenConfig {
            featured_index: 5,
            ..ScreenConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScreenError::FeaturedIndexOutOfRange { index: 5, len: 5 }));
    }

    #[test]
    fn empty_collection_fails() {
        let err = build_with(&ShowCollection::default(), &ScreenConfig::default()).unwrap_err();
        assert!(matches!(err, ScreenError::FeaturedIndexOutOfRange { index: 2, len: 0 }));
    }

    #[test]
    fn fragments_are_appended_in_order() {
        let screen = build_with(&shows(3), &ScreenConfig::default()).unwrap();
        let n = screen.nodes;
        assert_eq!(
            screen.tree.children(n.root),
            &[n.image, n.summary, n.title, n.description, n.actions, n.tabs, n.list]
        );
    }

    #[test]
    fn summary_and_description_texts() {
        let screen = build_with(&shows(3), &ScreenConfig::default()).unwrap();
        let tree = &screen.tree;

        assert_eq!(
            tree.texts(screen.nodes.summary),
            vec!["*****", "2010", "TV-14", "3 Series"]
        );
        assert_eq!(
            tree.texts(screen.nodes.description),
            vec![
                "Detail 2",
                "Cast: Benedict Cumberbatch, Martin Freeman, Una Stubbs",
                "Creator: Mark Gatiss, Steven Moffat",
            ]
        );
        assert_eq!(tree.texts(screen.nodes.actions), vec!["My List", "Share"]);
        assert_eq!(tree.texts(screen.nodes.tabs), vec!["EPISODES", "MORE"]);
    }

    #[test]
    fn list_uses_configured_row_height() {
        let config = ScreenConfig {
            row_height: 64.0,
            ..ScreenConfig::default()
        };
        let screen = build_with(&shows(3), &config).unwrap();
        let list = screen.tree.node(screen.nodes.list);
        assert_eq!(
            list.content,
            Content::List {
                row_height: 64.0,
                rows: 3
            }
        );
        assert!((list.style.flex_grow - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ScreenConfig = toml::from_str(
            "popularity = 3\n[[tabs]]\ncaption = \"TRAILERS\"\n",
        )
        .unwrap();
        assert_eq!(config.popularity, 3);
        assert_eq!(config.tabs.len(), 1);
        assert!(!config.tabs[0].selected);
        assert_eq!(config.actions.len(), 2);
        assert_eq!(config.featured_index, 2);
    }
}
