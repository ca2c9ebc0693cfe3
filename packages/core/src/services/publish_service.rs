//! Publish Service - Classification and Orchestration
//!
//! This module provides the main business logic of the plugin:
//!
//! - Per-node classification: resolve the publish date, attach the
//!   `isPublished` and `publishGroup` fields, create one derived
//!   `Published`/`Unpublished` node
//! - Whole-graph orchestration: classify every known node, fan-out/fan-in
//! - Schema customization: declare both derived types with the host
//!
//! # Entry points
//!
//! The host drives the service through two lifecycle entry points.
//! [`PublishService::source_nodes`] runs in the source phase, before the
//! host restores nodes from cache, and is the preferred entry point; cache
//! restores skip late-bound hooks, which would leave restored nodes
//! unclassified. [`PublishService::on_create_node`] is the late-bound
//! per-node hook and additionally embeds the source node's raw content in
//! the derived node.
//!
//! # State machine (per node, per pass)
//!
//! `START -> {no descriptor: fatal, stop} -> RESOLVE
//!        -> {absent: stop} | {invalid: fatal, stop}
//!        -> CLASSIFIED (field written, derived node created) -> END`
//!
//! No retries; no node is revisited within one invocation.

use crate::config::PublishOptions;
use crate::graph::{GraphActions, Reporter};
use crate::models::{
    ClassificationKind, ClassificationNode, Node, SchemaField, SchemaType, SystemTimeProvider,
    TimeProvider,
};
use crate::services::resolver::{resolve_publish_date, Resolution};
use anyhow::Result;
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;

/// Fatal message reported when no publish-date descriptor is configured
pub const NO_PUBLISH_DATE_PROVIDED: &str =
    r#"Invalid "publish_date" provided in plugin options."#;

/// Boolean field attached to every classified source node
pub const PUBLISHED_FIELD: &str = "isPublished";

/// Group field attached to every classified source node
pub const PUBLISH_GROUP_FIELD: &str = "publishGroup";

/// Classifies content nodes against their publish date and materializes the
/// result in the host graph.
///
/// # Examples
///
/// ```rust,no_run
/// use scheduled_publishing::config::{DateSource, PublishOptions};
/// use scheduled_publishing::graph::{MemoryGraph, TracingReporter};
/// use scheduled_publishing::services::PublishService;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let service = PublishService::new(
///         Arc::new(MemoryGraph::new()),
///         Arc::new(TracingReporter::new()),
///         PublishOptions::new(DateSource::field_path("frontmatter.date")),
///     );
///
///     service.create_schema_customization().await?;
///     service.source_nodes().await?;
///     Ok(())
/// }
/// ```
pub struct PublishService {
    graph: Arc<dyn GraphActions>,
    reporter: Arc<dyn Reporter>,
    clock: Arc<dyn TimeProvider>,
    options: PublishOptions,
}

impl PublishService {
    /// Create a service running against the system clock
    pub fn new(
        graph: Arc<dyn GraphActions>,
        reporter: Arc<dyn Reporter>,
        options: PublishOptions,
    ) -> Self {
        Self::with_clock(graph, reporter, options, Arc::new(SystemTimeProvider))
    }

    /// Create a service with an explicit clock (deterministic tests)
    pub fn with_clock(
        graph: Arc<dyn GraphActions>,
        reporter: Arc<dyn Reporter>,
        options: PublishOptions,
        clock: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            graph,
            reporter,
            clock,
            options,
        }
    }

    /// Declare the `Published` and `Unpublished` types with the host.
    ///
    /// Both types must be queryable even when a build creates zero instances
    /// of one of them, so this runs unconditionally during schema setup.
    pub async fn create_schema_customization(&self) -> Result<()> {
        let fields = || {
            vec![
                SchemaField::new("id", "ID", true),
                SchemaField::new(PUBLISH_GROUP_FIELD, "String", true),
            ]
        };
        self.graph
            .create_schema_types(vec![
                SchemaType::new(ClassificationKind::Published.type_name(), fields()),
                SchemaType::new(ClassificationKind::Unpublished.type_name(), fields()),
            ])
            .await
    }

    /// Late-bound per-node entry point.
    ///
    /// Classifies one node as the host observes it and embeds the node's raw
    /// content in the derived node.
    pub async fn on_create_node(&self, node: &Node) -> Result<()> {
        self.classify(node, true).await
    }

    /// Early-bound whole-graph entry point (preferred).
    ///
    /// Enumerates all currently known nodes once and classifies each
    /// independently. Invocation order is insignificant and no cross-node
    /// state exists, so the work fans out concurrently and joins on
    /// collective completion.
    pub async fn source_nodes(&self) -> Result<()> {
        let nodes = self.graph.get_nodes().await?;
        let results = join_all(nodes.iter().map(|node| self.classify(node, false))).await;
        for result in results {
            result?;
        }
        Ok(())
    }

    /// Classify one node: exactly one of {skip, fatal report, classify}.
    async fn classify(&self, node: &Node, embed_content: bool) -> Result<()> {
        let Some(source) = &self.options.publish_date else {
            self.reporter.panic_on_build(NO_PUBLISH_DATE_PROVIDED);
            return Ok(());
        };

        let resolved = match resolve_publish_date(node, source, &self.options, self.reporter.as_ref())
        {
            // Absent is a normal skip; Invalid was already reported fatally.
            Resolution::Absent | Resolution::Invalid => return Ok(()),
            Resolution::Valid(instant) => instant,
        };

        // "now" is sampled once per node.
        let now = self.clock.now();
        let is_published = resolved.with_timezone(&chrono::Utc) <= now;
        let publish_group = self.options.publish_group().to_string();

        self.graph
            .create_node_field(&node.id, PUBLISHED_FIELD, json!(is_published))
            .await?;
        self.graph
            .create_node_field(&node.id, PUBLISH_GROUP_FIELD, json!(publish_group))
            .await?;

        let content = if embed_content {
            self.graph.load_node_content(node).await?
        } else {
            None
        };

        let mut derived = ClassificationNode {
            id: self
                .graph
                .create_node_id(&ClassificationNode::id_seed(&node.id)),
            kind: ClassificationKind::from_published(is_published),
            publish_group,
            source_node_id: node.id.clone(),
            content,
            content_digest: String::new(),
        };
        derived.content_digest = self
            .graph
            .create_content_digest(&serde_json::to_value(&derived)?);

        tracing::debug!(
            target: "scheduled_publishing",
            node_id = %node.id,
            kind = derived.kind.type_name(),
            "classified node"
        );

        self.graph.create_node(derived).await
    }
}

#[cfg(test)]
#[path = "publish_service_test.rs"]
mod publish_service_test;
