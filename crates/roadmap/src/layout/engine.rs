//! Engine builder and the breadth-first column layout.

use log::{debug, trace, warn};

use roadmap_core::{
    geometry::Point,
    model::GeneratedNode,
    positioned::{LayoutEdge, LayoutNode},
    style::{EdgeStyle, NodeStyle},
};

use crate::{
    config::{DEFAULT_COLUMN_SPACING, DEFAULT_ROW_SPACING, DanglingEdges, ValidationMode},
    diagnostic::{Diagnostic, ValidationError},
    layout::TreeLayout,
    structure::{self, Depths, RoadmapTree},
};

/// Builder for creating and configuring the layout engine.
/// Builder is not reuseable after build() is called.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    column_spacing: f32,
    row_spacing: f32,
    validation: ValidationMode,
    dangling_edges: DanglingEdges,
    node_style: NodeStyle,
    edge_style: EdgeStyle,
}

impl EngineBuilder {
    /// Create a new engine builder with the default grid and styles.
    pub fn new() -> Self {
        Self {
            column_spacing: DEFAULT_COLUMN_SPACING,
            row_spacing: DEFAULT_ROW_SPACING,
            validation: ValidationMode::default(),
            dangling_edges: DanglingEdges::default(),
            node_style: NodeStyle::default(),
            edge_style: EdgeStyle::default(),
        }
    }

    /// Set the horizontal distance between depth columns
    pub fn with_column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Set the vertical distance between slots in a column
    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set how structural findings are treated by [`Engine::calculate`]
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Set what happens to edges whose parent does not exist
    pub fn with_dangling_edges(mut self, dangling_edges: DanglingEdges) -> Self {
        self.dangling_edges = dangling_edges;
        self
    }

    /// Set the style attached to every node
    pub fn with_node_style(mut self, style: NodeStyle) -> Self {
        self.node_style = style;
        self
    }

    /// Set the style attached to every edge
    pub fn with_edge_style(mut self, style: EdgeStyle) -> Self {
        self.edge_style = style;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            column_spacing: self.column_spacing,
            row_spacing: self.row_spacing,
            validation: self.validation,
            dangling_edges: self.dangling_edges,
            node_style: self.node_style,
            edge_style: self.edge_style,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The tree layout engine.
///
/// Stateless between calls: every bookkeeping structure lives on the stack
/// of a single [`Engine::calculate`] or [`Engine::layout`] call.
#[derive(Debug, Clone)]
pub struct Engine {
    column_spacing: f32,
    row_spacing: f32,
    validation: ValidationMode,
    dangling_edges: DanglingEdges,
    node_style: NodeStyle,
    edge_style: EdgeStyle,
}

impl Engine {
    /// Lay out `nodes` under the configured validation mode.
    ///
    /// # Errors
    ///
    /// In strict mode, returns a [`ValidationError`] carrying every finding
    /// when the input has duplicate ids, dangling parents, cycles or
    /// unreachable nodes. Lenient mode never fails.
    pub fn calculate(&self, nodes: &[GeneratedNode]) -> Result<TreeLayout, ValidationError> {
        let tree = RoadmapTree::new(nodes);
        let depths = tree.depths();

        let diagnostics = structure::validate(&tree, &depths, self.validation)
            .finish()
            .inspect_err(|err| {
                debug!(
                    findings_count = err.diagnostics().len(),
                    mode:% = self.validation;
                    "Roadmap rejected"
                );
            })?;

        Ok(self.arrange(&tree, &depths, diagnostics))
    }

    /// Lay out `nodes`, reporting malformed input as warnings.
    ///
    /// Ignores the configured validation mode.
    pub fn layout(&self, nodes: &[GeneratedNode]) -> TreeLayout {
        let tree = RoadmapTree::new(nodes);
        let depths = tree.depths();
        let diagnostics =
            structure::validate(&tree, &depths, ValidationMode::Lenient).into_diagnostics();

        self.arrange(&tree, &depths, diagnostics)
    }

    pub fn column_spacing(&self) -> f32 {
        self.column_spacing
    }

    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    fn arrange(
        &self,
        tree: &RoadmapTree<'_>,
        depths: &Depths<'_>,
        diagnostics: Vec<Diagnostic>,
    ) -> TreeLayout {
        for diagnostic in &diagnostics {
            warn!(
                code:% = diagnostic.code(),
                node:? = diagnostic.node();
                "{}", diagnostic.message()
            );
        }

        // Next free slot per depth column.
        let mut slots = vec![0usize; depths.max_depth() + 1];
        let mut nodes = Vec::with_capacity(tree.len());

        for node in tree.nodes() {
            let depth = depths.depth_of(node.id().as_str());
            let slot = &mut slots[depth];
            let position = Point::from_grid(depth, *slot, self.column_spacing, self.row_spacing);
            *slot += 1;

            trace!(node_id:% = node.id(), depth = depth, position:? = position; "Node placed");
            nodes.push(LayoutNode::new(node, position, self.node_style.clone()));
        }

        let edges: Vec<LayoutEdge> = tree
            .nodes()
            .iter()
            .filter_map(|node| {
                let parent = node.parent_id()?;
                if self.dangling_edges == DanglingEdges::Drop && !tree.contains(parent.as_str()) {
                    return None;
                }
                Some(LayoutEdge::new(
                    parent.clone(),
                    node.id().clone(),
                    self.edge_style.clone(),
                ))
            })
            .collect();

        debug!(
            nodes_count = nodes.len(),
            edges_count = edges.len(),
            columns_count = slots.len(),
            warnings_count = diagnostics.len();
            "Tree layout calculated"
        );

        TreeLayout::new(nodes, edges, diagnostics)
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::new().build()
    }
}
