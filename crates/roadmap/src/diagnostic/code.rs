//! Codes for roadmap input diagnostics.
//!
//! All codes live in the `R0xx` range and describe structural problems of
//! the generated node list.

use std::fmt;

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticCode {
    /// Duplicate node id.
    ///
    /// Two or more nodes share an id. Every record is still placed, at the
    /// depth of the first record with that id in input order.
    R001,

    /// Dangling parent reference.
    ///
    /// A node names a parent id that is not in the list. The node is placed
    /// at depth 0.
    R002,

    /// Parent cycle.
    ///
    /// Following parent links from a node leads back to it. Such nodes are
    /// never reached from a root and are placed at depth 0.
    R003,

    /// Unreachable node.
    ///
    /// The node's ancestry never reaches a root because an ancestor dangles or
    /// sits on a cycle. The node is placed at depth 0.
    R004,
}

impl DiagnosticCode {
    /// Returns the string representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::R001 => "R001",
            DiagnosticCode::R002 => "R002",
            DiagnosticCode::R003 => "R003",
            DiagnosticCode::R004 => "R004",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticCode::R001 => "duplicate node id",
            DiagnosticCode::R002 => "dangling parent reference",
            DiagnosticCode::R003 => "parent cycle",
            DiagnosticCode::R004 => "unreachable node",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
