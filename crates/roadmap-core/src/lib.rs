//! Roadmap Core Types and Definitions
//!
//! This crate provides the foundational types shared by the roadmap layout
//! engine and its consumers. It includes:
//!
//! - **Identifiers**: Owned topic identifiers ([`identifier::NodeId`])
//! - **Colors**: CSS color validation ([`color::Color`])
//! - **Geometry**: Canvas coordinates ([`geometry::Point`])
//! - **Model**: Records produced by the roadmap generator ([`model`] module)
//! - **Style**: Visual metadata attached to nodes and edges ([`style`] module)
//! - **Positioned**: Laid-out nodes, edges and progress state ([`positioned`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod model;
pub mod positioned;
pub mod style;
