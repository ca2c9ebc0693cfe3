//! Scheduled Publishing for Content Graphs
//!
//! This crate classifies content nodes as published or unpublished based on a
//! date found in the node's data, and materializes that state as queryable
//! derived nodes in the host's content graph.
//!
//! # Architecture
//!
//! - **Date resolution**: a raw date value is extracted from a node via a
//!   field path or an extractor function, then parsed under configurable
//!   format/timezone/delay rules
//! - **Classification**: the resolved instant is compared to "now"; the node
//!   gets an `isPublished` field and a `Published`/`Unpublished` derived node
//! - **Host abstraction**: all graph mutations go through the
//!   [`graph::GraphActions`] trait and all diagnostics through the
//!   [`graph::Reporter`] trait; the plugin never owns storage
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node, ClassificationNode, schema types)
//! - [`config`] - Plugin options and the publish-date descriptor
//! - [`graph`] - Host graph abstraction and the in-memory reference host
//! - [`services`] - Date resolver and the publish service

pub mod config;
pub mod graph;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::*;
pub use graph::*;
pub use models::*;
pub use services::*;
