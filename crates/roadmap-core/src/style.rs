//! Visual metadata attached to positioned nodes and edges.
//!
//! The rendering surface receives these values verbatim as inline styles, so
//! they are kept as CSS strings and serialized with camelCase keys. Colors are
//! checked with [`Color`](crate::color::Color) by whoever builds a custom
//! style from configuration.

use serde::{Deserialize, Serialize};

/// Default node background color.
pub const DEFAULT_NODE_BACKGROUND: &str = "#1e293b";
/// Default node text color.
pub const DEFAULT_NODE_TEXT_COLOR: &str = "#fff";
/// Default node border color.
pub const DEFAULT_NODE_BORDER_COLOR: &str = "#475569";
/// Default node border width in pixels.
pub const DEFAULT_NODE_BORDER_WIDTH: f32 = 1.0;
/// Default node width in pixels.
pub const DEFAULT_NODE_WIDTH: f32 = 180.0;
/// Default node font size in pixels.
pub const DEFAULT_NODE_FONT_SIZE: f32 = 12.0;
/// Default node padding in pixels.
pub const DEFAULT_NODE_PADDING: f32 = 10.0;
/// Default edge stroke color.
pub const DEFAULT_EDGE_STROKE: &str = "#64748b";

/// Inline style of a topic node.
///
/// # Examples
///
/// ```
/// use roadmap_core::style::NodeStyle;
///
/// let style = NodeStyle::default();
/// assert_eq!(style.background(), "#1e293b");
/// assert_eq!(style.border(), "1px solid #475569");
/// assert_eq!(style.font_size(), "12px");
///
/// let wide = NodeStyle::default().with_width(240.0).with_border("#22c55e", 2.0);
/// assert_eq!(wide.width(), 240.0);
/// assert_eq!(wide.border(), "2px solid #22c55e");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    background: String,
    color: String,
    border: String,
    width: f32,
    font_size: String,
    padding: String,
}

impl NodeStyle {
    /// Set the background color (builder style).
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Set the text color (builder style).
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set a solid border of the given color and pixel width (builder style).
    pub fn with_border(mut self, color: &str, width: f32) -> Self {
        self.border = format!("{width}px solid {color}");
        self
    }

    /// Set the node width in pixels (builder style).
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the font size in pixels (builder style).
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = format!("{font_size}px");
        self
    }

    /// Set the inner padding in pixels (builder style).
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = format!("{padding}px");
        self
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn text_color(&self) -> &str {
        &self.color
    }

    pub fn border(&self) -> &str {
        &self.border
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn font_size(&self) -> &str {
        &self.font_size
    }

    pub fn padding(&self) -> &str {
        &self.padding
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_NODE_BACKGROUND.to_string(),
            color: DEFAULT_NODE_TEXT_COLOR.to_string(),
            border: String::new(),
            width: DEFAULT_NODE_WIDTH,
            font_size: String::new(),
            padding: String::new(),
        }
        .with_border(DEFAULT_NODE_BORDER_COLOR, DEFAULT_NODE_BORDER_WIDTH)
        .with_font_size(DEFAULT_NODE_FONT_SIZE)
        .with_padding(DEFAULT_NODE_PADDING)
    }
}

/// Inline style of a parent-child connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    stroke: String,
}

impl EdgeStyle {
    /// Create an edge style with the given stroke color.
    pub fn new(stroke: impl Into<String>) -> Self {
        Self {
            stroke: stroke.into(),
        }
    }

    /// The stroke color.
    pub fn stroke(&self) -> &str {
        &self.stroke
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_STROKE)
    }
}
