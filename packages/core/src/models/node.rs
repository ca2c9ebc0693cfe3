//! Node Data Structures
//!
//! This module defines the `Node` struct, the plugin's view of a content node
//! in the host graph.
//!
//! # Architecture
//!
//! - **Universal Node**: a single struct represents all content types
//! - **Pure JSON data**: all entity-specific data lives in the `properties`
//!   field; the plugin never interprets it beyond the configured date lookup
//! - **Host ownership**: original nodes are created and destroyed by the host;
//!   the plugin only reads them and attaches derived `fields`
//!
//! # Examples
//!
//! ```rust
//! use scheduled_publishing::models::Node;
//! use serde_json::json;
//!
//! let node = Node::new(
//!     "article".to_string(),
//!     Some("Release notes".to_string()),
//!     json!({ "frontmatter": { "date": "2024-05-01" } }),
//! );
//!
//! assert_eq!(
//!     node.property_at_path("frontmatter.date"),
//!     Some(&json!("2024-05-01")),
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A content node as observed in the host graph.
///
/// # Fields
///
/// - `id`: Unique identifier allocated by the host
/// - `node_type`: Type identifier (e.g., "article", "page")
/// - `content`: Raw text content, when the host can load it
/// - `created_at` / `modified_at`: Host-maintained timestamps
/// - `properties`: JSON object containing all entity-specific data
/// - `fields`: Derived fields attached by plugins (e.g., `isPublished`)
///
/// The plugin treats nodes as opaque apart from the configured publish-date
/// lookup inside `properties` and the derived entries it writes to `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier (host-allocated)
    pub id: String,

    /// Node type (e.g., "article", "page")
    pub node_type: String,

    /// Raw text content of the node, if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,

    /// All entity-specific data (pure JSON)
    pub properties: Value,

    /// Derived fields attached by plugins, keyed by field name
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

impl Node {
    /// Create a new Node with an auto-generated UUID
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scheduled_publishing::models::Node;
    /// # use serde_json::json;
    /// let node = Node::new(
    ///     "article".to_string(),
    ///     None,
    ///     json!({ "date": "2024-05-01" }),
    /// );
    /// assert_eq!(node.node_type, "article");
    /// ```
    pub fn new(node_type: String, content: Option<String>, properties: Value) -> Self {
        Self::new_with_id(Uuid::new_v4().to_string(), node_type, content, properties)
    }

    /// Create a new Node with an explicit identifier
    ///
    /// Used by hosts with deterministic identifier schemes and by tests that
    /// assert on derived-node back-references.
    pub fn new_with_id(
        id: String,
        node_type: String,
        content: Option<String>,
        properties: Value,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            node_type,
            content,
            created_at: now,
            modified_at: now,
            properties,
            fields: Map::new(),
        }
    }

    /// Safe nested lookup inside `properties`.
    ///
    /// `path` is a dot-separated chain of object keys. Absence at any level
    /// yields `None` rather than an error, so callers can probe nodes that do
    /// not carry the configured date at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scheduled_publishing::models::Node;
    /// # use serde_json::json;
    /// let node = Node::new(
    ///     "article".to_string(),
    ///     None,
    ///     json!({ "some": { "random": { "date": "2022-01-30" } } }),
    /// );
    /// assert!(node.property_at_path("some.random.date").is_some());
    /// assert!(node.property_at_path("an.invalid.key").is_none());
    /// ```
    pub fn property_at_path(&self, path: &str) -> Option<&Value> {
        let mut current = &self.properties;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}
