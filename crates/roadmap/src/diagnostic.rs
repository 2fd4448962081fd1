//! Diagnostics for malformed roadmap input.
//!
//! The layout engine never refuses a generated roadmap by default. Instead it
//! reports what looked wrong (duplicate ids, dangling parents, cycles) as
//! [`Diagnostic`]s next to a best-effort layout. In strict mode the same
//! findings are raised as errors and returned in a [`ValidationError`].
//!
//! # Example
//!
//! ```
//! use roadmap::diagnostic::{Diagnostic, DiagnosticCode};
//! use roadmap::identifier::NodeId;
//!
//! let diag = Diagnostic::warning(DiagnosticCode::R002, "parent `9` of node `3` does not exist")
//!     .with_node(NodeId::new("3"))
//!     .with_related(NodeId::new("9"))
//!     .with_help("the edge is kept and names a missing source");
//!
//! assert_eq!(diag.to_string(), "warning[R002]: parent `9` of node `3` does not exist");
//! ```

mod code;
mod collector;
mod severity;
mod validation_error;

pub(crate) use collector::DiagnosticCollector;

pub use code::DiagnosticCode;
pub use severity::Severity;
pub use validation_error::ValidationError;

use std::fmt;

use roadmap_core::identifier::NodeId;

/// A single finding about the input of a layout.
///
/// Diagnostics provide:
/// - A severity level
/// - A [`DiagnosticCode`] naming the kind of finding
/// - A message describing the issue
/// - The node the finding is about, plus related nodes
/// - Optional help text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: DiagnosticCode,
    message: String,
    node: Option<NodeId>,
    related: Vec<NodeId>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Create a diagnostic with the given severity.
    pub fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            node: None,
            related: Vec::new(),
            help: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> DiagnosticCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The node this diagnostic is about, if any.
    pub fn node(&self) -> Option<&NodeId> {
        self.node.as_ref()
    }

    /// Other nodes involved in the finding (missing parent, cycle members).
    pub fn related(&self) -> &[NodeId] {
        &self.related
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the subject node.
    pub fn with_node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }

    /// Add a related node.
    pub fn with_related(mut self, node: NodeId) -> Self {
        self.related.push(node);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}
