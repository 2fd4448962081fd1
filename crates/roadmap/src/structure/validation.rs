//! Structural checks on a generated node list.
//!
//! Findings are reported with the severity of the active
//! [`ValidationMode`]: warnings in lenient mode, errors in strict mode.

use std::collections::{HashMap, HashSet};

use petgraph::{algo::tarjan_scc, graph::DiGraph};

use roadmap_core::identifier::NodeId;

use super::{Depths, RoadmapTree};
use crate::{
    config::ValidationMode,
    diagnostic::{Diagnostic, DiagnosticCode, DiagnosticCollector},
};

/// Run every structural check over `tree`.
///
/// Diagnostics are grouped by code (R001..R004) and ordered by input position
/// within each group.
pub(crate) fn validate(
    tree: &RoadmapTree<'_>,
    depths: &Depths<'_>,
    mode: ValidationMode,
) -> DiagnosticCollector {
    let severity = mode.severity();
    let mut collector = DiagnosticCollector::new();

    for node in tree.duplicates() {
        collector.emit(
            Diagnostic::new(
                severity,
                DiagnosticCode::R001,
                format!("node id `{}` is used more than once", node.id()),
            )
            .with_node(node.id().clone())
            .with_help(
                "every copy is placed, but the first record in input order decides the depth",
            ),
        );
    }

    for node in tree.dangling() {
        let Some(parent) = node.parent_id() else {
            continue;
        };
        collector.emit(
            Diagnostic::new(
                severity,
                DiagnosticCode::R002,
                format!("parent `{parent}` of node `{}` does not exist", node.id()),
            )
            .with_node(node.id().clone())
            .with_related(parent.clone())
            .with_help("the node is placed at depth 0 and its edge names a missing source"),
        );
    }

    let cycles = parent_cycles(tree);
    let on_cycle: HashSet<&str> = cycles
        .iter()
        .flatten()
        .map(|id| id.as_str())
        .collect();

    for cycle in &cycles {
        let Some((first, rest)) = cycle.split_first() else {
            continue;
        };
        let members = cycle
            .iter()
            .map(|id| format!("`{id}`"))
            .collect::<Vec<_>>()
            .join(" -> ");
        let diagnostic = rest.iter().fold(
            Diagnostic::new(
                severity,
                DiagnosticCode::R003,
                format!("parent links form a cycle: {members}"),
            )
            .with_node(first.clone()),
            |diagnostic, member| diagnostic.with_related(member.clone()),
        );
        collector.emit(diagnostic.with_help("nodes on a cycle are never reached from a root"));
    }

    let mut reported = HashSet::new();
    for node in tree.nodes() {
        let id = node.id().as_str();
        let parent_resolves = node
            .parent_id()
            .is_some_and(|parent| tree.contains(parent.as_str()));

        if depths.is_reached(id) || !parent_resolves || on_cycle.contains(id) {
            continue;
        }
        if !reported.insert(id) {
            continue;
        }

        collector.emit(
            Diagnostic::new(
                severity,
                DiagnosticCode::R004,
                format!("node `{id}` cannot be reached from any root"),
            )
            .with_node(node.id().clone())
            .with_help("an ancestor dangles or sits on a cycle; the node is placed at depth 0"),
        );
    }

    collector
}

/// Find every set of ids whose parent links loop, including self-parents.
///
/// Each cycle lists its members in input order; cycles are ordered by their
/// first member.
fn parent_cycles(tree: &RoadmapTree<'_>) -> Vec<Vec<NodeId>> {
    let mut graph = DiGraph::<&NodeId, ()>::new();
    let mut indices = HashMap::new();

    for node in tree.nodes() {
        indices
            .entry(node.id().as_str())
            .or_insert_with(|| graph.add_node(node.id()));
    }

    for node in tree.nodes() {
        let Some(parent) = node.parent_id() else {
            continue;
        };
        if let (Some(&parent_idx), Some(&child_idx)) = (
            indices.get(parent.as_str()),
            indices.get(node.id().as_str()),
        ) {
            graph.update_edge(parent_idx, child_idx, ());
        }
    }

    let mut cycles: Vec<_> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || graph.contains_edge(component[0], component[0])
        })
        .map(|mut component| {
            component.sort();
            component
        })
        .collect();
    cycles.sort();

    cycles
        .into_iter()
        .map(|component| {
            component
                .into_iter()
                .map(|idx| graph[idx].clone())
                .collect()
        })
        .collect()
}
