//! The tree layout engine.
//!
//! Turns a flat, parent-referencing list of [`GeneratedNode`]s into
//! positioned nodes and parent-child edges:
//!
//! 1. depths are assigned breadth-first from the roots,
//! 2. every record is placed in its depth column at the next free slot,
//!    walking the input in its original order,
//! 3. one edge is emitted per record that names a parent.
//!
//! The result is a pure function of the input and its order. Reordering
//! nodes at the same depth changes their vertical slots.

mod engine;
mod tree_layout;

pub use engine::{Engine, EngineBuilder};
pub use tree_layout::TreeLayout;

use roadmap_core::model::GeneratedNode;

/// Lay out `nodes` with the default engine.
///
/// Columns are 300 apart, rows 150 apart, and malformed input is reported
/// through [`TreeLayout::diagnostics`] instead of failing.
///
/// # Examples
///
/// ```
/// use roadmap::{layout, model::GeneratedNode};
///
/// let nodes = vec![
///     GeneratedNode::new("a", "A"),
///     GeneratedNode::new("b", "B").with_parent("a"),
/// ];
/// let result = layout::layout(&nodes);
///
/// assert_eq!(result.nodes()[1].position().x(), 300.0);
/// assert_eq!(result.edges()[0].id(), "e-a-b");
/// ```
pub fn layout(nodes: &[GeneratedNode]) -> TreeLayout {
    Engine::default().layout(nodes)
}
