//! GraphActions Trait - Host Graph Abstraction Layer
//!
//! This module defines the `GraphActions` trait that abstracts the host
//! graph's node-creation lifecycle. The trait lets the classification logic
//! run against any host (a production content-graph runtime, the in-memory
//! reference host, recording doubles in tests) without changes.
//!
//! # Design Decisions
//!
//! 1. **Async-first**: mutating and enumerating operations are async so
//!    network- or disk-backed hosts fit behind the same trait
//! 2. **Sync derivations**: `create_node_id` and `create_content_digest` are
//!    pure derivations over their input and stay synchronous
//! 3. **Error handling**: `anyhow::Result` across the boundary; hosts attach
//!    their own typed errors as context
//!
//! # Examples
//!
//! ```rust,no_run
//! use scheduled_publishing::graph::{GraphActions, MemoryGraph};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let graph: Arc<dyn GraphActions> = Arc::new(MemoryGraph::new());
//!
//!     let nodes = graph.get_nodes().await?;
//!     assert!(nodes.is_empty());
//!     Ok(())
//! }
//! ```

use crate::models::{ClassificationNode, Node, SchemaType};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Node-creation lifecycle surface of the host graph
///
/// Implementations must be `Send + Sync` so classification futures can move
/// between threads during fan-out.
#[async_trait]
pub trait GraphActions: Send + Sync {
    /// Register a derived classification node with the graph.
    ///
    /// Called exactly once per classified source node per pass. The node is
    /// never mutated after submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the derived node id already exists or the host
    /// rejects the node.
    async fn create_node(&self, node: ClassificationNode) -> Result<()>;

    /// Attach a derived field to an existing node.
    ///
    /// # Errors
    ///
    /// Returns an error if the target node does not exist.
    async fn create_node_field(&self, node_id: &str, name: &str, value: Value) -> Result<()>;

    /// Allocate a deterministic node identifier from a seed string.
    ///
    /// The same seed must always yield the same identifier within one host.
    fn create_node_id(&self, seed: &str) -> String;

    /// Compute a content-integrity digest over a node representation
    fn create_content_digest(&self, content: &Value) -> String;

    /// Load the raw text content of a node, if the host can provide it.
    ///
    /// `Ok(None)` means the node has no loadable content, which is not an
    /// error.
    async fn load_node_content(&self, node: &Node) -> Result<Option<String>>;

    /// Enumerate all nodes currently known to the graph
    async fn get_nodes(&self) -> Result<Vec<Node>>;

    /// Declare schema types so they stay queryable with zero instances
    async fn create_schema_types(&self, types: Vec<SchemaType>) -> Result<()>;
}
