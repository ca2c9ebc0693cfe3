//! Host Graph Abstraction
//!
//! This module defines the seam between the plugin and its host:
//!
//! - `GraphActions` - node-creation lifecycle surface of the host graph
//! - `Reporter` - build diagnostics surface (fatal errors and warnings)
//! - `MemoryGraph` - in-memory reference host for tests and harnesses
//!
//! The plugin only calls these interfaces; it implements none of the host's
//! storage, caching, or build pipeline.

mod actions;
mod error;
mod memory;
mod reporter;

pub use actions::GraphActions;
pub use error::GraphError;
pub use memory::MemoryGraph;
pub use reporter::{RecordingReporter, Reporter, TracingReporter};
