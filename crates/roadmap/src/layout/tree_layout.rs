use roadmap_core::positioned::{LayoutEdge, LayoutNode, RoadmapData};

use crate::diagnostic::Diagnostic;

/// Output of one layout call.
///
/// Nodes are in input order, one per input record. Edges are in the input
/// order of their child. Diagnostics are empty for well-formed input.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
    diagnostics: Vec<Diagnostic>,
}

impl TreeLayout {
    pub(crate) fn new(
        nodes: Vec<LayoutNode>,
        edges: Vec<LayoutEdge>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            nodes,
            edges,
            diagnostics,
        }
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    /// Findings about malformed input, reported as warnings.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the input produced no findings.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Split into nodes, edges and diagnostics.
    pub fn into_parts(self) -> (Vec<LayoutNode>, Vec<LayoutEdge>, Vec<Diagnostic>) {
        (self.nodes, self.edges, self.diagnostics)
    }

    /// Wrap the positioned graph into a consumer-owned [`RoadmapData`].
    ///
    /// Diagnostics are dropped; read them first if they matter.
    pub fn into_roadmap(self, id: impl Into<String>, title: impl Into<String>) -> RoadmapData {
        RoadmapData::new(id, title, self.nodes, self.edges)
    }
}
