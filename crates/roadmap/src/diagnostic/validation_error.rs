//! The error returned when strict validation rejects a roadmap.

use std::fmt;

use crate::diagnostic::Diagnostic;

/// Error type for strict validation.
///
/// Wraps every diagnostic found, errors and warnings alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationError {
    /// Create a new validation error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<Diagnostic> for ValidationError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticCode;

    #[test]
    fn test_validation_error_from_diagnostic() {
        let err: ValidationError = Diagnostic::error(DiagnosticCode::R001, "dup").into();
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_validation_error_display_single() {
        let err = ValidationError::new(vec![Diagnostic::error(
            DiagnosticCode::R002,
            "parent `p` of node `c` does not exist",
        )]);

        assert_eq!(
            err.to_string(),
            "error[R002]: parent `p` of node `c` does not exist"
        );
    }

    #[test]
    fn test_validation_error_display_multiple() {
        let err = ValidationError::new(vec![
            Diagnostic::error(DiagnosticCode::R001, "first"),
            Diagnostic::error(DiagnosticCode::R002, "second"),
            Diagnostic::error(DiagnosticCode::R003, "third"),
        ]);

        assert_eq!(err.to_string(), "error[R001]: first (+2 more)");
    }
}
