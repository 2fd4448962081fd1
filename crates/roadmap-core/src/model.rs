//! Records produced by the roadmap generator.
//!
//! The generator answers a free-text topic with a flat list of
//! [`GeneratedNode`]s, each pointing at its parent by id. These types mirror
//! that JSON shape (camelCase field names) and are the input of the layout
//! engine.
//!
//! # Example
//!
//! ```
//! use roadmap_core::model::GeneratedRoadmap;
//!
//! let json = r#"{
//!     "title": "Rust",
//!     "nodes": [
//!         { "id": "1", "label": "Ownership", "description": "Moves and borrows", "parentId": null, "resources": [] },
//!         { "id": "2", "label": "Lifetimes", "description": "Named scopes", "parentId": "1",
//!           "resources": [{ "title": "The Book", "url": "https://doc.rust-lang.org/book/", "type": "documentation" }] }
//!     ]
//! }"#;
//!
//! let roadmap: GeneratedRoadmap = serde_json::from_str(json).unwrap();
//! assert_eq!(roadmap.title(), Some("Rust"));
//! assert_eq!(roadmap.nodes().len(), 2);
//! assert!(roadmap.nodes()[0].is_root());
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::identifier::NodeId;

/// Kind of a learning resource.
///
/// The names match the generator's strings (lowercase). Resources that come
/// back without a kind are treated as articles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Written article or tutorial (default)
    #[default]
    Article,
    /// Video lesson
    Video,
    /// Reference documentation
    Documentation,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Article => "article",
            ResourceKind::Video => "video",
            ResourceKind::Documentation => "documentation",
        };
        f.write_str(s)
    }
}

/// A learning resource attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    title: String,

    #[serde(default)]
    url: String,

    #[serde(rename = "type", default)]
    kind: ResourceKind,
}

impl Resource {
    /// Create a new resource.
    pub fn new(title: impl Into<String>, url: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind,
        }
    }

    /// Human readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Link to the resource. The generator may return a placeholder such as `#`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The [`ResourceKind`] of this resource.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

/// A single topic as returned by the generator.
///
/// `parent_id` is `None` for roots. Producers are expected to reference ids
/// present in the same list and to form a forest, but nothing enforces it;
/// the layout engine degrades gracefully when they don't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedNode {
    id: NodeId,

    #[serde(default)]
    label: String,

    #[serde(default)]
    description: String,

    #[serde(default, deserialize_with = "empty_parent_as_none")]
    parent_id: Option<NodeId>,

    #[serde(default)]
    resources: Vec<Resource>,
}

impl GeneratedNode {
    /// Create a root topic with the given id and label.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadmap_core::model::GeneratedNode;
    ///
    /// let root = GeneratedNode::new("1", "Internet");
    /// let child = GeneratedNode::new("2", "HTML")
    ///     .with_parent("1")
    ///     .with_description("Structure of web pages.");
    ///
    /// assert!(root.is_root());
    /// assert_eq!(child.parent_id().map(|id| id.as_str()), Some("1"));
    /// ```
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            parent_id: None,
            resources: Vec::new(),
        }
    }

    /// Set the description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the parent id (builder style).
    pub fn with_parent(mut self, parent_id: impl Into<NodeId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Append a resource (builder style).
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// The topic identifier.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Short display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Longer description shown in the detail panel.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parent identifier, or `None` for a root.
    pub fn parent_id(&self) -> Option<&NodeId> {
        self.parent_id.as_ref()
    }

    /// Returns `true` if the node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Resources in generator order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

/// The generator's full answer: an optional title and the flat node list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRoadmap {
    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    nodes: Vec<GeneratedNode>,
}

impl GeneratedRoadmap {
    /// Create a generated roadmap from a title and its nodes.
    pub fn new(title: Option<String>, nodes: Vec<GeneratedNode>) -> Self {
        Self { title, nodes }
    }

    /// The generated title. Blank titles are reported as `None`.
    pub fn title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }

    /// The generated nodes in producer order.
    pub fn nodes(&self) -> &[GeneratedNode] {
        &self.nodes
    }

    /// Consume the roadmap and return its nodes.
    pub fn into_nodes(self) -> Vec<GeneratedNode> {
        self.nodes
    }
}

/// The generator signals a root with `null`, a missing field, or an empty string.
fn empty_parent_as_none<'de, D>(deserializer: D) -> Result<Option<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let parent = Option::<String>::deserialize(deserializer)?;
    Ok(parent.filter(|id| !id.is_empty()).map(NodeId::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generated_node() {
        let json = r##"{
            "id": "5",
            "label": "React",
            "description": "UI Library.",
            "parentId": "4",
            "resources": [{ "title": "React Docs", "url": "#", "type": "documentation" }]
        }"##;

        let node: GeneratedNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.id(), &NodeId::new("5"));
        assert_eq!(node.label(), "React");
        assert_eq!(node.description(), "UI Library.");
        assert_eq!(node.parent_id(), Some(&NodeId::new("4")));
        assert_eq!(node.resources().len(), 1);
        assert_eq!(node.resources()[0].kind(), ResourceKind::Documentation);
        assert_eq!(node.resources()[0].url(), "#");
    }

    #[test]
    fn test_root_markers() {
        let null_parent: GeneratedNode =
            serde_json::from_str(r#"{ "id": "a", "parentId": null }"#).unwrap();
        let missing_parent: GeneratedNode = serde_json::from_str(r#"{ "id": "b" }"#).unwrap();
        let empty_parent: GeneratedNode =
            serde_json::from_str(r#"{ "id": "c", "parentId": "" }"#).unwrap();

        assert!(null_parent.is_root());
        assert!(missing_parent.is_root());
        assert!(empty_parent.is_root());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let node: GeneratedNode = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();

        assert_eq!(node.label(), "");
        assert_eq!(node.description(), "");
        assert!(node.resources().is_empty());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_str::<GeneratedNode>(r#"{ "label": "no id" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_resource_kind_is_rejected() {
        let json = r#"{ "title": "t", "url": "u", "type": "podcast" }"#;
        assert!(serde_json::from_str::<Resource>(json).is_err());
    }

    #[test]
    fn test_resource_without_kind_is_article() {
        let resource: Resource = serde_json::from_str(r#"{ "title": "t", "url": "u" }"#).unwrap();
        assert_eq!(resource.kind(), ResourceKind::Article);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let node = GeneratedNode::new("2", "HTML")
            .with_parent("1")
            .with_resource(Resource::new("MDN HTML", "#", ResourceKind::Documentation));

        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["parentId"], "1");
        assert_eq!(value["resources"][0]["type"], "documentation");
    }

    #[test]
    fn test_generated_roadmap_title() {
        let titled = GeneratedRoadmap::new(Some("Go for Backend".to_string()), Vec::new());
        let blank = GeneratedRoadmap::new(Some("   ".to_string()), Vec::new());
        let untitled = GeneratedRoadmap::new(None, Vec::new());

        assert_eq!(titled.title(), Some("Go for Backend"));
        assert_eq!(blank.title(), None);
        assert_eq!(untitled.title(), None);
    }

    #[test]
    fn test_generated_roadmap_without_nodes() {
        let roadmap: GeneratedRoadmap = serde_json::from_str(r#"{ "title": "Empty" }"#).unwrap();
        assert!(roadmap.nodes().is_empty());
        assert!(roadmap.into_nodes().is_empty());
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Article.to_string(), "article");
        assert_eq!(ResourceKind::Video.to_string(), "video");
        assert_eq!(ResourceKind::Documentation.to_string(), "documentation");
    }
}
