//! Positioned roadmap types.
//!
//! This module contains the output side of the layout engine and the
//! consumer-owned aggregate built from it:
//! - [`LayoutNode`] - A topic with a canvas position, display data and style
//! - [`LayoutEdge`] - A directed parent-to-child connector
//! - [`RoadmapData`] - A titled roadmap holding nodes and edges
//! - [`NodeStatus`] / [`Progress`] - Per-topic progress and its summary
//!
//! The layout engine only ever creates these values. Progress is owned by the
//! consumer: [`RoadmapData::set_status`] mutates it in place and nothing in
//! the engine reads it back.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    geometry::Point,
    identifier::NodeId,
    model::{GeneratedNode, Resource},
    style::{EdgeStyle, NodeStyle},
};

/// Node type understood by the rendering surface.
const DEFAULT_NODE_KIND: &str = "default";

/// Learning progress of a single topic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeStatus {
    /// Not started (initial state of every laid-out node)
    #[default]
    Pending,
    /// Started but not finished
    InProgress,
    /// Marked done by the user
    Completed,
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeStatus::Pending => "pending",
            NodeStatus::InProgress => "in-progress",
            NodeStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Display data of a topic node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    label: String,
    description: String,
    status: NodeStatus,
    resources: Vec<Resource>,
    #[serde(rename = "isAI", default, skip_serializing_if = "Option::is_none")]
    is_ai: Option<bool>,
}

impl NodeData {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The optional AI marker, `None` when the producer never set it.
    pub fn is_ai(&self) -> Option<bool> {
        self.is_ai
    }
}

/// A positioned topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    id: NodeId,
    position: Point,
    data: NodeData,
    #[serde(rename = "type")]
    kind: String,
    style: NodeStyle,
}

impl LayoutNode {
    /// Create a pending node for `source` at `position`.
    ///
    /// Label, description and resources are copied from the generated record.
    pub fn new(source: &GeneratedNode, position: Point, style: NodeStyle) -> Self {
        Self {
            id: source.id().clone(),
            position,
            data: NodeData {
                label: source.label().to_string(),
                description: source.description().to_string(),
                status: NodeStatus::Pending,
                resources: source.resources().to_vec(),
                is_ai: None,
            },
            kind: DEFAULT_NODE_KIND.to_string(),
            style,
        }
    }

    /// Set the AI marker (builder style).
    pub fn with_ai_marker(mut self, is_ai: bool) -> Self {
        self.data.is_ai = Some(is_ai);
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn status(&self) -> NodeStatus {
        self.data.status
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    /// The node type handed to the rendering surface.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    fn set_status(&mut self, status: NodeStatus) {
        self.data.status = status;
    }
}

/// A directed connector from a parent topic to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEdge {
    id: String,
    source: NodeId,
    target: NodeId,
    animated: bool,
    style: EdgeStyle,
}

impl LayoutEdge {
    /// Create an animated edge from `source` to `target`.
    ///
    /// The id is derived from the pair as `e-{source}-{target}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadmap_core::{identifier::NodeId, positioned::LayoutEdge, style::EdgeStyle};
    ///
    /// let edge = LayoutEdge::new(NodeId::new("1"), NodeId::new("4"), EdgeStyle::default());
    /// assert_eq!(edge.id(), "e-1-4");
    /// assert!(edge.animated());
    /// ```
    pub fn new(source: NodeId, target: NodeId, style: EdgeStyle) -> Self {
        Self {
            id: format!("e-{source}-{target}"),
            source,
            target,
            animated: true,
            style,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }
}

/// Error returned when a progress update names a topic that is not on the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown roadmap node: {0}")]
pub struct UnknownNodeError(pub NodeId);

/// Counts of topics per [`NodeStatus`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    total: usize,
    pending: usize,
    in_progress: usize,
    completed: usize,
}

impl Progress {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn in_progress(&self) -> usize {
        self.in_progress
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Fraction of completed topics, `0.0` for an empty roadmap.
    pub fn completion_ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f32 / self.total as f32
    }
}

/// A titled roadmap: positioned nodes plus their edges.
///
/// Built once per generation (or from the bundled sample) and replaced
/// wholesale by the next one; the two are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapData {
    id: String,
    title: String,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
}

impl RoadmapData {
    /// Create a roadmap from laid-out nodes and edges.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        nodes: Vec<LayoutNode>,
        edges: Vec<LayoutEdge>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            nodes,
            edges,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    /// Find the first node with the given id.
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id == *id)
    }

    /// Update the progress of a topic.
    ///
    /// Every node carrying `id` is updated, so duplicated ids stay in sync.
    /// Positions and edges are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownNodeError`] if no node has the given id.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadmap_core::{
    ///     geometry::Point,
    ///     model::GeneratedNode,
    ///     positioned::{LayoutNode, NodeStatus, RoadmapData},
    ///     style::NodeStyle,
    /// };
    ///
    /// let node = LayoutNode::new(&GeneratedNode::new("1", "Git"), Point::default(), NodeStyle::default());
    /// let mut roadmap = RoadmapData::new("r", "Tools", vec![node], Vec::new());
    ///
    /// roadmap.set_status("1", NodeStatus::InProgress).unwrap();
    /// assert_eq!(roadmap.node("1").unwrap().status(), NodeStatus::InProgress);
    /// assert!(roadmap.set_status("2", NodeStatus::Completed).is_err());
    /// ```
    pub fn set_status(&mut self, id: &str, status: NodeStatus) -> Result<(), UnknownNodeError> {
        let mut updated = 0;
        for node in self.nodes.iter_mut().filter(|node| node.id == *id) {
            node.set_status(status);
            updated += 1;
        }

        if updated == 0 {
            return Err(UnknownNodeError(NodeId::new(id)));
        }

        debug!(node_id = id, status:% = status, updated; "Node status updated");
        Ok(())
    }

    /// Mark a topic as completed.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownNodeError`] if no node has the given id.
    pub fn mark_completed(&mut self, id: &str) -> Result<(), UnknownNodeError> {
        self.set_status(id, NodeStatus::Completed)
    }

    /// Summarize progress over all nodes.
    pub fn progress(&self) -> Progress {
        self.nodes
            .iter()
            .fold(Progress::default(), |mut progress, node| {
                progress.total += 1;
                match node.status() {
                    NodeStatus::Pending => progress.pending += 1,
                    NodeStatus::InProgress => progress.in_progress += 1,
                    NodeStatus::Completed => progress.completed += 1,
                }
                progress
            })
    }
}
