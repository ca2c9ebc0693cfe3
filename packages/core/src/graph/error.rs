//! Graph Error Types
//!
//! Typed errors raised by the in-memory reference host. Date and
//! configuration problems never surface here; those are reported through the
//! `Reporter` surface instead.

use thiserror::Error;

/// Errors from graph-mutation operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// A derived node with this id was already created in this pass
    #[error("Derived node already exists: {id}")]
    DuplicateNode { id: String },

    /// Field attachment targeted a node the graph does not know
    #[error("Node not found: {id}")]
    NodeNotFound { id: String },
}

impl GraphError {
    /// Create a duplicate node error
    pub fn duplicate_node(id: impl Into<String>) -> Self {
        Self::DuplicateNode { id: id.into() }
    }

    /// Create a node not found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }
}
