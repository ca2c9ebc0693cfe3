//! Plugin Configuration
//!
//! Options are provided by the host's plugin configuration surface. Only the
//! publish-date descriptor is required; every other option has a default.
//!
//! # Examples
//!
//! ```rust
//! use scheduled_publishing::config::{DateSource, PublishOptions};
//!
//! // Field-path descriptor with defaults (UTC, %Y-%m-%d, no delay)
//! let options = PublishOptions::new(DateSource::field_path("frontmatter.date"));
//!
//! // Extractor descriptor with a custom group and timezone
//! let options = PublishOptions::new(DateSource::extractor(|node| {
//!     node.property_at_path("meta.publishAt").cloned()
//! }))
//! .with_group("newsletter")
//! .with_timezone("America/New_York");
//! ```

use crate::models::Node;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Group label applied when no `group` option is configured
pub const DEFAULT_GROUP_NAME: &str = "UNGROUPED";

/// Date format applied when no `date_format` option is configured
/// (chrono strftime syntax, calendar date)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timezone applied when no `timezone` option is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Delay threshold (24 hours) at which a warning is reported
pub const DELAY_WARNING_THRESHOLD_MINUTES: i64 = 60 * 24;

/// Extractor function pulling a raw date value out of a node
pub type DateExtractor = Arc<dyn Fn(&Node) -> Option<Value> + Send + Sync>;

/// How to obtain the raw publish-date value from a node.
///
/// Resolved via an explicit match: a field path is looked up inside the
/// node's `properties`, an extractor is invoked with the node. A value that
/// is neither is unrepresentable, so a descriptor can never be "invoked" by
/// accident.
#[derive(Clone)]
pub enum DateSource {
    /// Dot-separated path into the node's `properties` object
    FieldPath(String),
    /// Function computing the raw value from the node
    Extractor(DateExtractor),
}

impl DateSource {
    /// Descriptor reading a dot-separated property path
    pub fn field_path(path: impl Into<String>) -> Self {
        Self::FieldPath(path.into())
    }

    /// Descriptor invoking a function with the node
    pub fn extractor<F>(f: F) -> Self
    where
        F: Fn(&Node) -> Option<Value> + Send + Sync + 'static,
    {
        Self::Extractor(Arc::new(f))
    }
}

impl fmt::Debug for DateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldPath(path) => f.debug_tuple("FieldPath").field(path).finish(),
            Self::Extractor(_) => f.debug_tuple("Extractor").field(&"<fn>").finish(),
        }
    }
}

/// Plugin options as supplied by the host configuration.
///
/// `publish_date` is required; classification reports a fatal configuration
/// error when it is absent. All other options fall back to crate defaults,
/// exposed through the accessor methods.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Where to find the raw publish date on each node (required)
    pub publish_date: Option<DateSource>,

    /// Logical group label attached to classified nodes
    pub group: Option<String>,

    /// Date format pattern (chrono strftime syntax)
    pub date_format: Option<String>,

    /// IANA timezone name the raw date is interpreted in
    pub timezone: Option<String>,

    /// Minutes added to the parsed instant; >= 1440 triggers a warning
    pub delay_in_minutes: Option<i64>,
}

impl PublishOptions {
    /// Options with the given descriptor and all defaults
    pub fn new(publish_date: DateSource) -> Self {
        Self {
            publish_date: Some(publish_date),
            ..Self::default()
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_delay_in_minutes(mut self, delay_in_minutes: i64) -> Self {
        self.delay_in_minutes = Some(delay_in_minutes);
        self
    }

    /// Effective group label
    pub fn publish_group(&self) -> &str {
        self.group.as_deref().unwrap_or(DEFAULT_GROUP_NAME)
    }

    /// Effective date format pattern
    pub fn effective_date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    /// Effective timezone name
    pub fn effective_timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// Effective delay in minutes
    pub fn effective_delay_in_minutes(&self) -> i64 {
        self.delay_in_minutes.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PublishOptions::new(DateSource::field_path("date"));

        assert_eq!(options.publish_group(), DEFAULT_GROUP_NAME);
        assert_eq!(options.effective_date_format(), "%Y-%m-%d");
        assert_eq!(options.effective_timezone(), "UTC");
        assert_eq!(options.effective_delay_in_minutes(), 0);
    }

    #[test]
    fn test_configured_values_override_defaults() {
        let options = PublishOptions::new(DateSource::field_path("date"))
            .with_group("newsletter")
            .with_date_format("%Y-%d-%m")
            .with_timezone("America/New_York")
            .with_delay_in_minutes(345);

        assert_eq!(options.publish_group(), "newsletter");
        assert_eq!(options.effective_date_format(), "%Y-%d-%m");
        assert_eq!(options.effective_timezone(), "America/New_York");
        assert_eq!(options.effective_delay_in_minutes(), 345);
    }

    #[test]
    fn test_missing_descriptor_is_representable() {
        let options = PublishOptions::default();
        assert!(options.publish_date.is_none());
    }
}
