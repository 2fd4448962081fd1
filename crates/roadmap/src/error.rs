//! Error types for roadmap operations.
//!
//! This module provides the main error type [`RoadmapError`] which wraps
//! the error conditions that can occur while parsing, laying out or
//! serializing a roadmap.

use std::io;

use thiserror::Error;

use roadmap_core::positioned::UnknownNodeError;

use crate::diagnostic::ValidationError;

/// The main error type for roadmap operations.
///
/// # Diagnostic Variants
///
/// The `Validation` variant carries every structural finding of a strict
/// layout, so callers can report each one instead of only the first.
#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownNode(#[from] UnknownNodeError),
}
