//! In-Memory Reference Host
//!
//! `MemoryGraph` implements [`GraphActions`] over in-memory state. It backs
//! the crate's integration tests and gives host authors a complete, minimal
//! model of the contract: deterministic node ids (UUID v5 over the seed),
//! SHA-256 content digests, duplicate-derived-node detection, and safe
//! concurrent access during classification fan-out.

use crate::graph::{GraphActions, GraphError};
use crate::models::{ClassificationNode, Node, SchemaType};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory implementation of the host graph surface
#[derive(Debug, Default)]
pub struct MemoryGraph {
    nodes: RwLock<Vec<Node>>,
    derived: RwLock<Vec<ClassificationNode>>,
    schema_types: RwLock<Vec<SchemaType>>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a source node into the graph (host-side seeding)
    pub async fn seed_node(&self, node: Node) {
        self.nodes.write().await.push(node);
    }

    /// Look up a source node by id
    pub async fn node(&self, id: &str) -> Option<Node> {
        self.nodes.read().await.iter().find(|n| n.id == id).cloned()
    }

    /// All derived classification nodes created so far
    pub async fn derived_nodes(&self) -> Vec<ClassificationNode> {
        self.derived.read().await.clone()
    }

    /// All schema types declared so far
    pub async fn declared_schema_types(&self) -> Vec<SchemaType> {
        self.schema_types.read().await.clone()
    }
}

#[async_trait]
impl GraphActions for MemoryGraph {
    async fn create_node(&self, node: ClassificationNode) -> Result<()> {
        let mut derived = self.derived.write().await;
        if derived.iter().any(|existing| existing.id == node.id) {
            return Err(GraphError::duplicate_node(&node.id).into());
        }
        derived.push(node);
        Ok(())
    }

    async fn create_node_field(&self, node_id: &str, name: &str, value: Value) -> Result<()> {
        let mut nodes = self.nodes.write().await;
        let node = nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| GraphError::node_not_found(node_id))?;

        node.fields.insert(name.to_string(), value);
        node.modified_at = chrono::Utc::now();
        Ok(())
    }

    fn create_node_id(&self, seed: &str) -> String {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()).to_string()
    }

    fn create_content_digest(&self, content: &Value) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.to_string().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    async fn load_node_content(&self, node: &Node) -> Result<Option<String>> {
        Ok(node.content.clone())
    }

    async fn get_nodes(&self) -> Result<Vec<Node>> {
        Ok(self.nodes.read().await.clone())
    }

    async fn create_schema_types(&self, types: Vec<SchemaType>) -> Result<()> {
        self.schema_types.write().await.extend(types);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassificationKind;
    use serde_json::json;

    fn derived(id: &str) -> ClassificationNode {
        ClassificationNode {
            id: id.to_string(),
            kind: ClassificationKind::Published,
            publish_group: "UNGROUPED".to_string(),
            source_node_id: "source".to_string(),
            content: None,
            content_digest: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_node_rejects_duplicate_ids() {
        let graph = MemoryGraph::new();
        graph.create_node(derived("a")).await.unwrap();

        let err = graph.create_node(derived("a")).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_create_node_field_requires_existing_node() {
        let graph = MemoryGraph::new();
        let err = graph
            .create_node_field("missing", "isPublished", json!(true))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_create_node_field_attaches_value() {
        let graph = MemoryGraph::new();
        let node = Node::new_with_id("n1".to_string(), "article".to_string(), None, json!({}));
        graph.seed_node(node).await;

        graph
            .create_node_field("n1", "isPublished", json!(false))
            .await
            .unwrap();

        let stored = graph.node("n1").await.unwrap();
        assert_eq!(stored.fields.get("isPublished"), Some(&json!(false)));
    }

    #[test]
    fn test_create_node_id_is_deterministic() {
        let graph = MemoryGraph::new();
        let a = graph.create_node_id("node-1 >>> ScheduledPublishing");
        let b = graph.create_node_id("node-1 >>> ScheduledPublishing");
        let c = graph.create_node_id("node-2 >>> ScheduledPublishing");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_content_digest_tracks_content() {
        let graph = MemoryGraph::new();
        let a = graph.create_content_digest(&json!({"id": "a"}));
        let b = graph.create_content_digest(&json!({"id": "a"}));
        let c = graph.create_content_digest(&json!({"id": "c"}));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
