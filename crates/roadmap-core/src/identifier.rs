//! Topic identifiers.
//!
//! This module provides the [`NodeId`] type used to reference topics in a
//! roadmap. Identifiers come from the roadmap generator and are kept as owned
//! strings so that layouts can be built concurrently without shared state.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Identifier of a roadmap topic.
///
/// # Examples
///
/// ```
/// use roadmap_core::identifier::NodeId;
///
/// let id = NodeId::new("html");
/// assert_eq!(id, "html");
/// assert_eq!(id.as_str(), "html");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a `NodeId` from anything convertible into a `String`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_node_id_equality() {
        let id1 = NodeId::new("react");
        let id2: NodeId = "react".into();
        let id3 = NodeId::from(String::from("vue"));

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert!(id1 == "react");
    }

    #[test]
    fn test_node_id_display() {
        let id = NodeId::new("tailwind-css");
        assert_eq!(id.to_string(), "tailwind-css");
    }

    #[test]
    fn test_node_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(NodeId::new("git"), 7);

        assert_eq!(map.get("git"), Some(&7));
        assert_eq!(map.get("svn"), None);
    }

    #[test]
    fn test_node_id_serializes_as_plain_string() {
        let id = NodeId::new("1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1\"");

        let parsed: NodeId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(parsed, "42");
    }

    #[test]
    fn test_node_id_is_empty() {
        assert!(NodeId::new("").is_empty());
        assert!(!NodeId::new("a").is_empty());
    }
}
