//! Data Models
//!
//! This module contains the core data structures used throughout the plugin:
//!
//! - `Node` - Universal content node as seen in the host graph
//! - `ClassificationNode` - Derived node carrying a publish classification
//! - `SchemaType` - Schema declarations registered with the host
//! - `time` - Clock abstraction for deterministic publish-window tests

mod classification;
mod node;
mod schema;
pub mod time;

pub use classification::{ClassificationKind, ClassificationNode, DERIVED_ID_MARKER};
pub use node::Node;
pub use schema::{SchemaField, SchemaType};
pub use time::{SystemTimeProvider, TimeProvider};
