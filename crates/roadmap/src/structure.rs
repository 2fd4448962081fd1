//! Adjacency view over a generated node list.
//!
//! The generator hands us a flat list where each record names its parent.
//! [`RoadmapTree`] indexes that list once, without reordering it:
//!
//! - roots (records without a parent) in input order
//! - children per parent id, in first-encountered input order
//! - the first occurrence of every id, and any later duplicates
//!
//! On top of it [`RoadmapTree::depths`] runs the breadth-first depth
//! assignment used by the layout engine, and the `validation` submodule
//! reports malformed input.
//!
//! Everything here borrows the input slice and lives only for one layout call.

mod validation;

pub(crate) use validation::validate;

use std::collections::{HashMap, VecDeque, hash_map::Entry};

use indexmap::IndexMap;
use log::trace;

use roadmap_core::model::GeneratedNode;

/// Depth of every id reached from a root.
///
/// Ids that were never reached (dangling parents, cycles) have no entry and
/// default to depth 0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Depths<'a> {
    depths: HashMap<&'a str, usize>,
}

impl Depths<'_> {
    /// Depth of `id`, or 0 if it was never reached.
    pub fn depth_of(&self, id: &str) -> usize {
        self.depths.get(id).copied().unwrap_or(0)
    }

    /// Returns `true` if `id` was reached from a root.
    pub fn is_reached(&self, id: &str) -> bool {
        self.depths.contains_key(id)
    }

    /// Number of distinct ids that were reached.
    pub fn reached_count(&self) -> usize {
        self.depths.len()
    }

    /// Deepest assigned depth, 0 when nothing was reached.
    pub fn max_depth(&self) -> usize {
        self.depths.values().copied().max().unwrap_or(0)
    }
}

/// Input-ordered adjacency view over generated nodes.
#[derive(Debug)]
pub struct RoadmapTree<'a> {
    nodes: &'a [GeneratedNode],
    first_index: HashMap<&'a str, usize>,
    roots: Vec<usize>,
    children: IndexMap<&'a str, Vec<usize>>,
    duplicates: Vec<usize>,
}

impl<'a> RoadmapTree<'a> {
    /// Index `nodes` in a single pass.
    pub fn new(nodes: &'a [GeneratedNode]) -> Self {
        let mut first_index = HashMap::with_capacity(nodes.len());
        let mut roots = Vec::new();
        let mut children: IndexMap<&'a str, Vec<usize>> = IndexMap::new();
        let mut duplicates = Vec::new();

        for (idx, node) in nodes.iter().enumerate() {
            match first_index.entry(node.id().as_str()) {
                Entry::Vacant(entry) => {
                    entry.insert(idx);
                }
                Entry::Occupied(_) => duplicates.push(idx),
            }

            match node.parent_id() {
                None => roots.push(idx),
                Some(parent) => children.entry(parent.as_str()).or_default().push(idx),
            }
        }

        trace!(
            nodes_count = nodes.len(),
            roots_count = roots.len(),
            parents_count = children.len(),
            duplicates_count = duplicates.len();
            "Roadmap tree indexed"
        );

        Self {
            nodes,
            first_index,
            roots,
            children,
            duplicates,
        }
    }

    /// All records in input order.
    pub fn nodes(&self) -> &'a [GeneratedNode] {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if some record has the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.first_index.contains_key(id)
    }

    /// First record with the given id.
    pub fn node(&self, id: &str) -> Option<&'a GeneratedNode> {
        let nodes = self.nodes;
        self.first_index.get(id).map(|&idx| &nodes[idx])
    }

    /// Records without a parent, in input order.
    pub fn roots(&self) -> impl Iterator<Item = &'a GeneratedNode> {
        let nodes = self.nodes;
        self.roots.iter().map(move |&idx| &nodes[idx])
    }

    /// Records naming `id` as their parent, in input order.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &'a GeneratedNode> {
        let nodes = self.nodes;
        self.children
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&idx| &nodes[idx])
    }

    /// Records whose id already appeared earlier in the list.
    pub fn duplicates(&self) -> impl Iterator<Item = &'a GeneratedNode> {
        let nodes = self.nodes;
        self.duplicates.iter().map(move |&idx| &nodes[idx])
    }

    /// Records whose parent id matches no record.
    pub fn dangling(&self) -> impl Iterator<Item = &'a GeneratedNode> {
        self.nodes.iter().filter(|node| {
            node.parent_id()
                .is_some_and(|parent| !self.contains(parent.as_str()))
        })
    }

    /// Assign depths breadth-first from the roots.
    ///
    /// Roots sit at depth 0; each child gets its parent's depth plus one.
    /// Children are visited in the order they appear in the input. A
    /// duplicated id takes the depth of its first record in input order;
    /// later copies never assign a depth. Each id is expanded once, so
    /// duplicated ids that loop back on themselves still terminate.
    pub fn depths(&self) -> Depths<'a> {
        let nodes = self.nodes;
        let mut depths: HashMap<&'a str, usize> = HashMap::with_capacity(nodes.len());
        let mut queue = VecDeque::new();

        for &idx in &self.roots {
            let id = nodes[idx].id().as_str();
            if !self.is_first(id, idx) {
                continue;
            }
            if let Entry::Vacant(entry) = depths.entry(id) {
                entry.insert(0);
                queue.push_back((id, 0));
            }
        }

        while let Some((id, depth)) = queue.pop_front() {
            for &child_idx in self.children.get(id).into_iter().flatten() {
                let child_id = nodes[child_idx].id().as_str();
                if !self.is_first(child_id, child_idx) {
                    continue;
                }
                if let Entry::Vacant(entry) = depths.entry(child_id) {
                    entry.insert(depth + 1);
                    queue.push_back((child_id, depth + 1));
                }
            }
        }

        Depths { depths }
    }

    fn is_first(&self, id: &str, idx: usize) -> bool {
        self.first_index.get(id) == Some(&idx)
    }
}
