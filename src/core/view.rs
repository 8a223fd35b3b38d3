//! # View Models
//!
//! Display-ready data derived from a [`NavigationState`] or a node. The
//! rendering layer only formats these; it never reads the store.

use serde::Serialize;

use crate::core::node::{CatalogNode, MetaValue};
use crate::core::state::NavigationState;

pub const DEFAULT_DESCRIPTION_LIMIT: usize = 80;
pub const DEFAULT_MAX_CARD_TAGS: usize = 3;
pub const DEFAULT_ICON: &str = "📁";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub description_limit: usize,
    pub max_card_tags: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            max_card_tags: DEFAULT_MAX_CARD_TAGS,
        }
    }
}

/// Title block above the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryHeader {
    pub title: String,
    pub description: String,
    pub count_label: String,
    pub tags: Vec<String>,
}

impl CategoryHeader {
    /// Counts come from the real child list, not the advisory `child_count`.
    pub fn from_state(state: &NavigationState) -> Self {
        let count = state.children().len();
        match state.current_item() {
            Some(node) => Self {
                title: node.title.clone(),
                description: node.description.clone(),
                count_label: format!("{count} items"),
                tags: node.tags.clone(),
            },
            None if state.is_root() => Self {
                title: "Welcome!".to_string(),
                description: "Choose a category to browse its contents".to_string(),
                count_label: format!("{count} categories"),
                tags: Vec::new(),
            },
            None => Self {
                title: "Not found".to_string(),
                description: format!("Nothing is filed under {:?}", state.current_path()),
                count_label: format!("{count} items"),
                tags: Vec::new(),
            },
        }
    }
}

/// One card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: Option<String>,
    /// `None` when the node advertises no children.
    pub counter: Option<u32>,
    pub tags: Vec<String>,
    pub is_item: bool,
}

impl GridCell {
    pub fn from_node(node: &CatalogNode, limits: DisplayLimits) -> Self {
        Self {
            id: node.id.clone(),
            title: node.title.clone(),
            description: truncate(&node.description, limits.description_limit),
            icon: node.icon.clone().unwrap_or_else(|| DEFAULT_ICON.to_string()),
            color: node.color.clone(),
            counter: (node.child_count > 0).then_some(node.child_count),
            tags: node.tags.iter().take(limits.max_card_tags).cloned().collect(),
            is_item: node.is_item(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRow {
    pub label: String,
    pub value: String,
}

/// Contents of the item detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    pub thumbnail: Option<String>,
    pub metadata: Vec<MetadataRow>,
}

impl DetailView {
    pub fn from_node(node: &CatalogNode) -> Self {
        let metadata = node
            .metadata
            .iter()
            .flatten()
            .map(|(key, value)| MetadataRow {
                label: format_label(key).to_string(),
                value: format_value(value),
            })
            .collect();
        Self {
            title: node.title.clone(),
            tags: node.tags.clone(),
            description: node.description.clone(),
            thumbnail: node.thumbnail.clone(),
            metadata,
        }
    }
}

/// Cuts `text` to `max_chars` characters and appends "..." if anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Human label for well-known metadata keys; unknown keys pass through.
pub fn format_label(key: &str) -> &str {
    match key {
        "year" => "Year",
        "country" => "Country",
        "denomination" => "Denomination",
        "catalogNumber" => "Catalog number",
        "rarity" => "Rarity",
        "condition" => "Condition",
        "designer" => "Designer",
        "price" => "Price",
        "weight" => "Weight",
        "calories" => "Calories",
        "cookTime" => "Cooking time",
        "ingredients" => "Ingredients",
        other => other,
    }
}

pub fn format_value(value: &MetaValue) -> String {
    match value {
        MetaValue::Text(text) => text.clone(),
        MetaValue::List(items) => items.join(", "),
    }
}

/// Tags rendered the way cards and headers show them: `#a #b`.
pub fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::NavigationController;
    use crate::core::node::NodeKind;
    use crate::core::path::DEFAULT_ROOT_TITLE;
    use crate::test_support::{demo_store, scenario_store};

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 80), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("Эйфелева", 4), "Эйфе...");
    }

    #[test]
    fn test_format_label_and_value() {
        assert_eq!(format_label("catalogNumber"), "Catalog number");
        assert_eq!(format_label("mintage"), "mintage");
        assert_eq!(format_value(&MetaValue::Text("MNH".into())), "MNH");
        assert_eq!(
            format_value(&MetaValue::List(vec!["eggs".into(), "bacon".into()])),
            "eggs, bacon"
        );
    }

    #[test]
    fn test_root_header() {
        let nav = NavigationController::new(scenario_store(), DEFAULT_ROOT_TITLE);
        let header = CategoryHeader::from_state(nav.state());
        assert_eq!(header.title, "Welcome!");
        assert_eq!(header.count_label, "2 categories");
        assert!(header.tags.is_empty());
    }

    #[test]
    fn test_category_header_counts_real_children() {
        let mut nav = NavigationController::new(demo_store(), DEFAULT_ROOT_TITLE);
        // "stamps" advertises 245 children but lists 3
        let header = CategoryHeader::from_state(nav.navigate_to("stamps"));
        assert_eq!(header.title, "Postage Stamps");
        assert_eq!(header.count_label, "3 items");
        assert_eq!(header.tags, vec!["stamps", "collection", "philately"]);
    }

    #[test]
    fn test_unknown_location_header() {
        let mut nav = NavigationController::new(scenario_store(), DEFAULT_ROOT_TITLE);
        let header = CategoryHeader::from_state(nav.navigate_to("ghost-id"));
        assert_eq!(header.title, "Not found");
        assert_eq!(header.count_label, "0 items");
    }

    #[test]
    fn test_grid_cell_limits() {
        let node = CatalogNode::new("n", "Node", NodeKind::Collection)
            .with_description("x".repeat(100))
            .with_tags(["a", "b", "c", "d"])
            .with_child_count(7);
        let cell = GridCell::from_node(&node, DisplayLimits::default());
        assert_eq!(cell.description.chars().count(), 83);
        assert!(cell.description.ends_with("..."));
        assert_eq!(cell.tags, vec!["a", "b", "c"]);
        assert_eq!(cell.counter, Some(7));
        assert_eq!(cell.icon, DEFAULT_ICON);
        assert!(!cell.is_item);
    }

    #[test]
    fn test_grid_cell_hides_zero_counter() {
        let node = CatalogNode::new("n", "Node", NodeKind::Item);
        let cell = GridCell::from_node(&node, DisplayLimits::default());
        assert_eq!(cell.counter, None);
        assert!(cell.is_item);
    }

    #[test]
    fn test_detail_view_rows_follow_source_order() {
        let store = demo_store();
        let node = store.node_by_id("dish-pasta-carbonara").unwrap();
        let detail = DetailView::from_node(node);
        let labels: Vec<&str> = detail.metadata.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Price", "Weight", "Calories", "Cooking time", "Ingredients"]
        );
        assert_eq!(
            detail.metadata[4].value,
            "spaghetti, bacon, eggs, parmesan, spices"
        );
    }

    #[test]
    fn test_detail_view_without_metadata() {
        let node = CatalogNode::new("n", "Node", NodeKind::Item);
        assert!(DetailView::from_node(&node).metadata.is_empty());
    }

    #[test]
    fn test_hashtags() {
        assert_eq!(hashtags(&["paris".into(), "1989".into()]), "#paris #1989");
        assert_eq!(hashtags(&[]), "");
    }
}
