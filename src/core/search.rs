//! # Search Filter
//!
//! Narrows a child list by a query. Pure: the input list is never touched,
//! so clearing the query just means showing the stored list again.

use std::sync::Arc;

use crate::core::node::CatalogNode;

/// Case-insensitive substring match on title, description or any tag.
///
/// A blank query (empty or whitespace only) means "no filter". Matches keep
/// their original relative order.
pub fn filter(items: &[Arc<CatalogNode>], query: &str) -> Vec<Arc<CatalogNode>> {
    if is_blank(query) {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|node| matches(node, &needle))
        .cloned()
        .collect()
}

pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// `needle` must already be lowercase.
fn matches(node: &CatalogNode, needle: &str) -> bool {
    node.title.to_lowercase().contains(needle)
        || node.description.to_lowercase().contains(needle)
        || node
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::NodeKind;

    fn items() -> Vec<Arc<CatalogNode>> {
        vec![
            Arc::new(
                CatalogNode::new("eiffel", "Eiffel Tower, 1989", NodeKind::Item)
                    .with_description("Anniversary stamp")
                    .with_tags(["paris", "1989"]),
            ),
            Arc::new(
                CatalogNode::new("louvre", "Louvre, 1993", NodeKind::Item)
                    .with_description("Museum with the pyramid")
                    .with_tags(["Paris", "museum"]),
            ),
            Arc::new(
                CatalogNode::new("versailles", "Palace of Versailles", NodeKind::Item)
                    .with_description("The palace")
                    .with_tags(["palace"]),
            ),
        ]
    }

    fn ids(nodes: &[Arc<CatalogNode>]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_items_unchanged() {
        let items = items();
        assert_eq!(filter(&items, ""), items);
        assert_eq!(filter(&items, "   "), items);
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        assert_eq!(ids(&filter(&items(), "EIFFEL")), vec!["eiffel"]);
    }

    #[test]
    fn test_description_match() {
        assert_eq!(ids(&filter(&items(), "pyramid")), vec!["louvre"]);
    }

    #[test]
    fn test_tag_match_ignores_tag_case() {
        assert_eq!(ids(&filter(&items(), "paris")), vec!["eiffel", "louvre"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        assert_eq!(
            ids(&filter(&items(), "a")),
            vec!["eiffel", "louvre", "versailles"]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(&items(), "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = items();
        for query in ["paris", "palace", "19", "zzz", ""] {
            let once = filter(&items, query);
            assert_eq!(filter(&once, query), once, "query {query:?}");
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = items();
        let before = items.clone();
        let _ = filter(&items, "louvre");
        assert_eq!(items, before);
    }
}
