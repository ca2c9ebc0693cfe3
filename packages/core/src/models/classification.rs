//! Derived Classification Nodes
//!
//! A classification node is the queryable result of classifying one content
//! node: it records whether the source node was published at classification
//! time, which publish group it belongs to, and a back-reference to the
//! source node. Classification nodes are created at most once per source node
//! per pass and never mutated after creation; their lifetime is owned by the
//! host graph.

use serde::{Deserialize, Serialize};

/// Marker appended to the parent identifier when seeding the derived node id.
///
/// The host's `create_node_id` receives `"{parent_id}{DERIVED_ID_MARKER}"`,
/// so derived identifiers are deterministic per source node.
pub const DERIVED_ID_MARKER: &str = " >>> ScheduledPublishing";

/// Discriminant kind of a classification node.
///
/// Exactly one of the two kinds is emitted per classified node, depending on
/// whether the resolved publish date is at or before "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationKind {
    Published,
    Unpublished,
}

impl ClassificationKind {
    /// Kind for a given publish state
    pub fn from_published(is_published: bool) -> Self {
        if is_published {
            Self::Published
        } else {
            Self::Unpublished
        }
    }

    /// Schema type name under which nodes of this kind are queryable
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Unpublished => "Unpublished",
        }
    }
}

/// Derived node recording the publish classification of one source node.
///
/// # Fields
///
/// - `id`: Host-allocated identifier, deterministic per source node
/// - `kind`: `Published` or `Unpublished`
/// - `publish_group`: Logical group label, mirrored from the attached field
/// - `source_node_id`: Back-reference to the classified node
/// - `content`: Raw content of the source node (late-bound entry point only)
/// - `content_digest`: Integrity digest over this node's own representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationNode {
    /// Unique identifier, allocated by the host from a deterministic seed
    pub id: String,

    /// Published vs Unpublished discriminant
    pub kind: ClassificationKind,

    /// Publish group label (default `UNGROUPED`)
    pub publish_group: String,

    /// Identifier of the source node this classification belongs to
    pub source_node_id: String,

    /// Raw content of the source node, when the entry point embeds it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Content-integrity digest, computed by the host over this node
    pub content_digest: String,
}

impl ClassificationNode {
    /// Deterministic id seed for the classification node of `source_node_id`
    pub fn id_seed(source_node_id: &str) -> String {
        format!("{}{}", source_node_id, DERIVED_ID_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_published() {
        assert_eq!(
            ClassificationKind::from_published(true),
            ClassificationKind::Published
        );
        assert_eq!(
            ClassificationKind::from_published(false),
            ClassificationKind::Unpublished
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ClassificationKind::Published.type_name(), "Published");
        assert_eq!(ClassificationKind::Unpublished.type_name(), "Unpublished");
    }

    #[test]
    fn test_id_seed_contains_parent_and_marker() {
        let seed = ClassificationNode::id_seed("node-123");
        assert!(seed.starts_with("node-123 >>> "));
        assert!(seed.ends_with("ScheduledPublishing"));
    }
}
