//! # Catalog Nodes
//!
//! The immutable records the catalog is made of. A node is either a
//! container (category or collection) that can be browsed into, or an item
//! that is only ever opened in a detail view.
//!
//! Nodes are deserialized straight from the catalog JSON. The field names on
//! the wire follow the dataset (`type`, `childrenCount`), the Rust names
//! follow what they mean.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Sentinel id of the catalog root. The root has children but no record.
pub const ROOT_ID: &str = "root";

/// Returns true for the root sentinel. An empty id also means root.
pub fn is_root(id: &str) -> bool {
    id.is_empty() || id == ROOT_ID
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Category,
    Collection,
    /// Leaf. Has no children and opens as a detail view.
    Item,
}

impl NodeKind {
    /// Categories and collections can be navigated into.
    pub fn is_container(self) -> bool {
        !matches!(self, NodeKind::Item)
    }

    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Category => "category",
            NodeKind::Collection => "collection",
            NodeKind::Item => "item",
        }
    }
}

/// A metadata value: a single string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for MetaValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Array(values) => values
                .into_iter()
                .map(scalar_to_string::<D::Error>)
                .collect::<Result<Vec<_>, _>>()
                .map(MetaValue::List),
            other => scalar_to_string(other).map(MetaValue::Text),
        }
    }
}

/// Numbers and booleans are stringified; the dataset stores years as numbers.
fn scalar_to_string<E: de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!(
            "metadata values must be strings, numbers, booleans or lists of those, got {other}"
        ))),
    }
}

/// Metadata entries in authorial order.
pub type Metadata = Vec<(String, MetaValue)>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Advisory only. Never reconciled against the real child list.
    #[serde(rename = "childrenCount", default)]
    pub child_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_metadata",
        serialize_with = "serialize_metadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<Metadata>,
}

impl CatalogNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            tags: Vec::new(),
            child_count: 0,
            icon: None,
            color: None,
            thumbnail: None,
            metadata: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_child_count(mut self, count: u32) -> Self {
        self.child_count = count;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_item(&self) -> bool {
        self.kind == NodeKind::Item
    }
}

fn deserialize_metadata<'de, D>(deserializer: D) -> Result<Option<Metadata>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MetadataVisitor;

    impl<'de> Visitor<'de> for MetadataVisitor {
        type Value = Option<Metadata>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a metadata object or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_map(self)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::new();
            while let Some((key, value)) = map.next_entry::<String, MetaValue>()? {
                entries.push((key, value));
            }
            Ok(Some(entries))
        }
    }

    deserializer.deserialize_option(MetadataVisitor)
}

fn serialize_metadata<S>(metadata: &Option<Metadata>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match metadata {
        Some(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_sentinel() {
        assert!(is_root("root"));
        assert!(is_root(""));
        assert!(!is_root("stamps"));
    }

    #[test]
    fn test_container_kinds() {
        assert!(NodeKind::Category.is_container());
        assert!(NodeKind::Collection.is_container());
        assert!(!NodeKind::Item.is_container());
    }

    #[test]
    fn test_node_parses_dataset_field_names() {
        let json = r##"{
            "id": "stamps",
            "title": "Postage Stamps",
            "description": "Stamps from around the world",
            "icon": "🏛️",
            "color": "#3498db",
            "tags": ["stamps", "philately"],
            "childrenCount": 245,
            "type": "category",
            "thumbnail": null
        }"##;
        let node: CatalogNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Category);
        assert_eq!(node.child_count, 245);
        assert_eq!(node.tags, vec!["stamps", "philately"]);
        assert_eq!(node.thumbnail, None);
        assert_eq!(node.metadata, None);
    }

    #[test]
    fn test_metadata_keeps_order_and_stringifies_scalars() {
        let json = r#"{
            "id": "dish",
            "title": "Carbonara",
            "type": "item",
            "metadata": {
                "year": 1989,
                "price": "450",
                "vegan": false,
                "ingredients": ["spaghetti", "bacon", "eggs"]
            }
        }"#;
        let node: CatalogNode = serde_json::from_str(json).unwrap();
        let metadata = node.metadata.unwrap();
        let keys: Vec<&str> = metadata.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["year", "price", "vegan", "ingredients"]);
        assert_eq!(metadata[0].1, MetaValue::Text("1989".to_string()));
        assert_eq!(metadata[2].1, MetaValue::Text("false".to_string()));
        assert_eq!(
            metadata[3].1,
            MetaValue::List(vec![
                "spaghetti".to_string(),
                "bacon".to_string(),
                "eggs".to_string()
            ])
        );
        assert_eq!(node.child_count, 0);
        assert!(node.description.is_empty());
    }

    #[test]
    fn test_nested_metadata_object_is_rejected() {
        let json = r#"{"id": "x", "title": "X", "type": "item", "metadata": {"a": {"b": 1}}}"#;
        assert!(serde_json::from_str::<CatalogNode>(json).is_err());
    }

    #[test]
    fn test_metadata_serializes_as_ordered_object() {
        let node = CatalogNode::new("x", "X", NodeKind::Item).with_metadata(vec![
            ("year".to_string(), MetaValue::Text("1993".to_string())),
            ("country".to_string(), MetaValue::Text("France".to_string())),
        ]);
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains(r#""metadata":{"year":"1993","country":"France"}"#));
        assert!(json.contains(r#""type":"item""#));
        assert!(!json.contains("icon"));
    }
}
