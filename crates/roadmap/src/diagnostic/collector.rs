//! Collector for accumulating diagnostics during validation.

use crate::diagnostic::{Diagnostic, ValidationError};

/// A collector for accumulating diagnostics.
///
/// Validation reports every finding instead of stopping at the first one.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub(crate) fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Take every collected diagnostic regardless of severity.
    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Finish collection.
    ///
    /// - If there are errors, returns `Err(ValidationError)` with all diagnostics.
    /// - Otherwise returns the collected warnings.
    pub(crate) fn finish(self) -> Result<Vec<Diagnostic>, ValidationError> {
        if self.has_errors {
            Err(ValidationError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
