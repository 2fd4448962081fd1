//! Configuration types for roadmap layout.
//!
//! This module provides configuration structures that control how roadmaps
//! are laid out and styled. All types implement [`serde::Deserialize`] so they
//! can be loaded from a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Grid spacing and structural validation policy.
//! - [`StyleConfig`] - Optional overrides for node and edge styles.
//!
//! # Example
//!
//! ```
//! # use roadmap::config::{AppConfig, ValidationMode};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().column_spacing(), 300.0);
//! assert_eq!(config.layout().validation(), ValidationMode::Lenient);
//! assert!(config.style().node_style().is_ok());
//! ```

use std::fmt;

use serde::Deserialize;

use roadmap_core::{
    color::Color,
    style::{
        DEFAULT_NODE_BORDER_COLOR, DEFAULT_NODE_BORDER_WIDTH, EdgeStyle, NodeStyle,
    },
};

use crate::diagnostic::Severity;

/// Default horizontal distance between depth columns.
pub const DEFAULT_COLUMN_SPACING: f32 = 300.0;

/// Default vertical distance between slots within a column.
pub const DEFAULT_ROW_SPACING: f32 = 150.0;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Override the validation mode (builder style).
    ///
    /// Used by the CLI when `--strict` is passed on top of a config file.
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.layout.validation = mode;
        self
    }
}

/// How structural findings in the input are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Lay out whatever was given and report findings as warnings.
    #[default]
    Lenient,
    /// Reject input with any finding.
    Strict,
}

impl ValidationMode {
    /// Severity attached to findings reported under this mode.
    pub fn severity(self) -> Severity {
        match self {
            Self::Lenient => Severity::Warning,
            Self::Strict => Severity::Error,
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// What happens to the edge of a node whose parent id matches no node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingEdges {
    /// Emit the edge anyway; the renderer decides how to draw it.
    #[default]
    Keep,
    /// Omit the edge from the output.
    Drop,
}

impl fmt::Display for DanglingEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

/// Grid spacing and structural validation policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    column_spacing: f32,
    row_spacing: f32,
    validation: ValidationMode,
    dangling_edges: DanglingEdges,
}

impl LayoutConfig {
    /// Creates a [`LayoutConfig`] with the given spacings and default policies.
    pub fn new(column_spacing: f32, row_spacing: f32) -> Self {
        Self {
            column_spacing,
            row_spacing,
            ..Self::default()
        }
    }

    /// Set the validation mode (builder style).
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Set the dangling edge policy (builder style).
    pub fn with_dangling_edges(mut self, dangling_edges: DanglingEdges) -> Self {
        self.dangling_edges = dangling_edges;
        self
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

    pub fn dangling_edges(&self) -> DanglingEdges {
        self.dangling_edges
    }

    /// Check that both spacings are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending key.
    pub fn validate(&self) -> Result<(), String> {
        checked_size("column_spacing", self.column_spacing)?;
        checked_size("row_spacing", self.row_spacing)?;
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_spacing: DEFAULT_COLUMN_SPACING,
            row_spacing: DEFAULT_ROW_SPACING,
            validation: ValidationMode::default(),
            dangling_edges: DanglingEdges::default(),
        }
    }
}

/// Optional overrides for node and edge styling.
///
/// Fields that are not set fall back to the [`NodeStyle`] and [`EdgeStyle`]
/// defaults.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    node_background: Option<String>,
    node_text_color: Option<String>,
    node_border_color: Option<String>,
    node_border_width: Option<f32>,
    node_width: Option<f32>,
    node_font_size: Option<f32>,
    node_padding: Option<f32>,
    edge_stroke: Option<String>,
}

impl StyleConfig {
    /// Resolve the node style, starting from [`NodeStyle::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color cannot be parsed into a valid
    /// [`Color`], or a size is negative or not finite.
    pub fn node_style(&self) -> Result<NodeStyle, String> {
        let mut style = NodeStyle::default();

        if let Some(background) = &self.node_background {
            style = style.with_background(checked_color("node_background", background)?.as_css());
        }
        if let Some(color) = &self.node_text_color {
            style = style.with_text_color(checked_color("node_text_color", color)?.as_css());
        }
        if self.node_border_color.is_some() || self.node_border_width.is_some() {
            let color = checked_color(
                "node_border_color",
                self.node_border_color
                    .as_deref()
                    .unwrap_or(DEFAULT_NODE_BORDER_COLOR),
            )?;
            let width = match self.node_border_width {
                Some(width) => checked_size("node_border_width", width)?,
                None => DEFAULT_NODE_BORDER_WIDTH,
            };
            style = style.with_border(color.as_css(), width);
        }
        if let Some(width) = self.node_width {
            style = style.with_width(checked_size("node_width", width)?);
        }
        if let Some(font_size) = self.node_font_size {
            style = style.with_font_size(checked_size("node_font_size", font_size)?);
        }
        if let Some(padding) = self.node_padding {
            style = style.with_padding(checked_size("node_padding", padding)?);
        }

        Ok(style)
    }

    /// Resolve the edge style, starting from [`EdgeStyle::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured stroke cannot be parsed into a
    /// valid [`Color`].
    pub fn edge_style(&self) -> Result<EdgeStyle, String> {
        match &self.edge_stroke {
            Some(stroke) => Ok(EdgeStyle::new(checked_color("edge_stroke", stroke)?.as_css())),
            None => Ok(EdgeStyle::default()),
        }
    }
}

fn checked_color(name: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {name} in config: {err}"))
}

fn checked_size(name: &str, value: f32) -> Result<f32, String> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!(
            "Invalid {name} in config: expected a finite, non-negative number, got {value}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();

        assert_eq!(layout.column_spacing(), 300.0);
        assert_eq!(layout.row_spacing(), 150.0);
        assert_eq!(layout.validation(), ValidationMode::Lenient);
        assert_eq!(layout.dangling_edges(), DanglingEdges::Keep);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            column_spacing = 250.0
            row_spacing = 100.0
            validation = "strict"
            dangling_edges = "drop"

            [style]
            node_background = "#0f172a"
            node_border_width = 2.0
            edge_stroke = "steelblue"
            "##,
        )
        .unwrap();

        let layout = config.layout();
        assert_eq!(layout.column_spacing(), 250.0);
        assert_eq!(layout.row_spacing(), 100.0);
        assert_eq!(layout.validation(), ValidationMode::Strict);
        assert_eq!(layout.dangling_edges(), DanglingEdges::Drop);

        let node = config.style().node_style().unwrap();
        assert_eq!(node.background(), "#0f172a");
        assert_eq!(node.border(), "2px solid #475569");
        assert_eq!(node.font_size(), "12px");

        let edge = config.style().edge_style().unwrap();
        assert_eq!(edge.stroke(), "steelblue");
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            row_spacing = 80.0
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().column_spacing(), 300.0);
        assert_eq!(config.layout().row_spacing(), 80.0);
        assert_eq!(config.style(), &StyleConfig::default());
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout(), &LayoutConfig::default());
    }

    #[test]
    fn test_unknown_validation_mode_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [layout]
            validation = "paranoid"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_spacing_invalid() {
        let layout = LayoutConfig::new(-1.0, 150.0);
        let err = layout.validate().unwrap_err();
        assert!(err.contains("column_spacing"), "{err}");

        let layout = LayoutConfig::new(300.0, f32::NAN);
        let err = layout.validate().unwrap_err();
        assert!(err.contains("row_spacing"), "{err}");

        assert!(LayoutConfig::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_color_reported() {
        let config: StyleConfig = toml::from_str(r#"node_text_color = "not-a-color""#).unwrap();
        let err = config.node_style().unwrap_err();
        assert!(err.starts_with("Invalid node_text_color in config"), "{err}");

        let config: StyleConfig = toml::from_str(r##"edge_stroke = "#zzz""##).unwrap();
        assert!(config.edge_style().is_err());
    }

    #[test]
    fn test_negative_size_reported() {
        let config: StyleConfig = toml::from_str("node_width = -5.0").unwrap();
        let err = config.node_style().unwrap_err();
        assert!(err.contains("node_width"), "{err}");
    }

    #[test]
    fn test_validation_mode_severity() {
        assert_eq!(ValidationMode::Strict.severity(), Severity::Error);
        assert_eq!(ValidationMode::Lenient.severity(), Severity::Warning);
        assert_eq!(ValidationMode::Strict.to_string(), "strict");
    }

    #[test]
    fn test_with_validation_override() {
        let config = AppConfig::default().with_validation(ValidationMode::Strict);
        assert_eq!(config.layout().validation(), ValidationMode::Strict);
    }
}
