//! Roadmap - tree layout for learning roadmaps.
//!
//! Takes the flat, parent-referencing topic list produced by a roadmap
//! generator and positions it as a left-to-right tree: one column per depth,
//! one slot per topic within its column, one edge per parent link. The
//! result serializes to the node/edge JSON a graph canvas consumes.

pub mod config;
pub mod diagnostic;
pub mod layout;
pub mod sample;
pub mod structure;

mod error;

pub use roadmap_core::{color, geometry, identifier, model, positioned, style};

pub use error::RoadmapError;

use log::{debug, info, trace};

use config::AppConfig;
use layout::{Engine, EngineBuilder, TreeLayout};
use model::{GeneratedNode, GeneratedRoadmap};
use positioned::RoadmapData;

/// Builder for parsing, laying out and serializing roadmaps.
///
/// # Examples
///
/// ```
/// use roadmap::{RoadmapBuilder, config::AppConfig};
///
/// let source = r#"{
///     "title": "Rust",
///     "nodes": [
///         { "id": "basics", "label": "Basics", "parentId": null },
///         { "id": "ownership", "label": "Ownership", "parentId": "basics" }
///     ]
/// }"#;
///
/// let builder = RoadmapBuilder::new(AppConfig::default());
/// let generated = builder.parse(source).expect("Failed to parse");
/// let roadmap = builder
///     .build(&generated, "rust-1", "Rust")
///     .expect("Failed to lay out");
///
/// assert_eq!(roadmap.nodes()[1].position().x(), 300.0);
/// let json = builder.to_json(&roadmap).expect("Failed to serialize");
/// assert!(json.contains("\"e-basics-ownership\""));
/// ```
#[derive(Debug, Default)]
pub struct RoadmapBuilder {
    config: AppConfig,
}

impl RoadmapBuilder {
    /// Create a new roadmap builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a generator response (`{"title": ..., "nodes": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Json`] for malformed JSON or records missing
    /// their `id`.
    pub fn parse(&self, source: &str) -> Result<GeneratedRoadmap, RoadmapError> {
        info!("Parsing generated roadmap");

        let generated: GeneratedRoadmap = serde_json::from_str(source)?;

        debug!(
            nodes_count = generated.nodes().len(),
            title:? = generated.title();
            "Generated roadmap parsed"
        );
        trace!(generated:?; "Parsed roadmap");

        Ok(generated)
    }

    /// Create a layout engine from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Config`] for invalid spacings, colors or sizes.
    pub fn engine(&self) -> Result<Engine, RoadmapError> {
        let layout = self.config.layout();
        layout.validate().map_err(RoadmapError::Config)?;

        let style = self.config.style();
        let node_style = style.node_style().map_err(RoadmapError::Config)?;
        let edge_style = style.edge_style().map_err(RoadmapError::Config)?;

        Ok(EngineBuilder::new()
            .with_column_spacing(layout.column_spacing())
            .with_row_spacing(layout.row_spacing())
            .with_validation(layout.validation())
            .with_dangling_edges(layout.dangling_edges())
            .with_node_style(node_style)
            .with_edge_style(edge_style)
            .build())
    }

    /// Lay out generated nodes with the configured engine.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Config`] for an invalid configuration, or
    /// [`RoadmapError::Validation`] when strict validation rejects the input.
    pub fn layout(&self, nodes: &[GeneratedNode]) -> Result<TreeLayout, RoadmapError> {
        let engine = self.engine()?;

        info!(
            nodes_count = nodes.len(),
            validation:% = engine.validation();
            "Calculating tree layout"
        );
        let layout = engine.calculate(nodes)?;
        info!(
            nodes_count = layout.nodes().len(),
            edges_count = layout.edges().len(),
            warnings_count = layout.diagnostics().len();
            "Layout calculated"
        );

        Ok(layout)
    }

    /// Lay out a parsed generator response into a [`RoadmapData`].
    ///
    /// The response title wins; `fallback_title` is used when it is missing
    /// or blank.
    ///
    /// # Errors
    ///
    /// See [`RoadmapBuilder::layout`].
    pub fn build(
        &self,
        generated: &GeneratedRoadmap,
        id: impl Into<String>,
        fallback_title: &str,
    ) -> Result<RoadmapData, RoadmapError> {
        let title = generated.title().unwrap_or(fallback_title).to_string();
        let roadmap = self.layout(generated.nodes())?.into_roadmap(id, title);

        debug!(id = roadmap.id(), title = roadmap.title(); "Roadmap built");
        Ok(roadmap)
    }

    /// The bundled "Frontend Developer" roadmap, laid out with this builder's
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Config`] for an invalid configuration.
    pub fn sample(&self) -> Result<RoadmapData, RoadmapError> {
        info!(id = sample::SAMPLE_ID; "Building sample roadmap");
        Ok(self
            .layout(&sample::sample_nodes())?
            .into_roadmap(sample::SAMPLE_ID, sample::SAMPLE_TITLE))
    }

    /// Serialize a roadmap as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Json`] if serialization fails.
    pub fn to_json(&self, roadmap: &RoadmapData) -> Result<String, RoadmapError> {
        let json = serde_json::to_string_pretty(roadmap)?;
        debug!(bytes = json.len(); "Roadmap serialized");
        Ok(json)
    }
}
