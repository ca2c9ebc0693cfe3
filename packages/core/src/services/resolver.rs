//! Publish Date Resolution
//!
//! Extracts a raw date value from a node, parses it under the configured
//! format/timezone/delay rules, and returns a three-way [`Resolution`].
//!
//! # Failure model
//!
//! - A missing, null, or empty raw value is a normal, silent skip: the node
//!   simply has no publish date
//! - A present but unparsable value is a content/configuration defect severe
//!   enough to stop the build: it is reported fatally with the raw value, the
//!   descriptor, and the full node JSON, and resolution yields [`Resolution::Invalid`]
//! - A delay of 24 hours or more is a footgun, not a defect: one warning,
//!   then resolution proceeds
//!
//! The fatal report itself is what halts the host build; the `Invalid`
//! return only tells the caller to do nothing further for this node.

use crate::config::{DateSource, PublishOptions, DELAY_WARNING_THRESHOLD_MINUTES};
use crate::graph::Reporter;
use crate::models::Node;
use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde_json::Value;

/// Fixed prefix of every fatal report about an unusable date value
pub const INVALID_DATE_MESSAGE: &str = r#"Invalid date found at configured "publish_date"."#;

/// Outcome of resolving the publish date of one node
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// No raw value found; the node is skipped silently
    Absent,
    /// A raw value was found but could not be used; already reported fatally
    Invalid,
    /// Normalized instant, local offset of the configured zone preserved
    Valid(DateTime<FixedOffset>),
}

/// Resolve the publish date of `node` according to `source` and `options`.
///
/// Samples no clock and touches no graph state; the only side effects are
/// reporter calls on the warning and fatal paths.
pub fn resolve_publish_date(
    node: &Node,
    source: &DateSource,
    options: &PublishOptions,
    reporter: &dyn Reporter,
) -> Resolution {
    let raw = match source {
        DateSource::FieldPath(path) => node.property_at_path(path).cloned(),
        DateSource::Extractor(extract) => extract(node),
    };

    // Missing or empty means this node has no publish date; ignore it.
    let raw = match raw {
        None | Some(Value::Null) => return Resolution::Absent,
        Some(Value::String(s)) if s.is_empty() => return Resolution::Absent,
        Some(value) => value,
    };

    let delay_in_minutes = options.effective_delay_in_minutes();
    if delay_in_minutes >= DELAY_WARNING_THRESHOLD_MINUTES {
        reporter.warn(&format!(
            "\"delay_in_minutes\" plugin option is {} ({} hours), which is greater than or equal \
             to 24 hours.\n\nThis is a bad idea and will probably cause problems. You should \
             adjust your publish dates instead.",
            delay_in_minutes,
            delay_in_minutes as f64 / 60.0,
        ));
    }

    // Numbers, booleans, and structured values are not valid parser input.
    let Value::String(raw) = raw else {
        report_invalid_date(node, source, &raw.to_string(), reporter);
        return Resolution::Invalid;
    };

    let timezone = options.effective_timezone();
    let zone: Tz = match timezone.parse() {
        Ok(zone) => zone,
        Err(_) => {
            reporter.panic_on_build(&format!(
                "Unknown \"timezone\" plugin option \"{timezone}\"; expected an IANA zone name \
                 such as \"UTC\" or \"America/New_York\"."
            ));
            return Resolution::Invalid;
        }
    };

    let format = options.effective_date_format();
    let naive = parse_naive(&raw, format);
    let naive = match naive {
        Some(naive) => naive,
        None => {
            report_invalid_date(node, source, &raw, reporter);
            return Resolution::Invalid;
        }
    };

    let localized = match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        // Repeated hour when DST falls back: take the earlier mapping
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Nonexistent local time inside a DST spring-forward gap
        LocalResult::None => {
            report_invalid_date(node, source, &raw, reporter);
            return Resolution::Invalid;
        }
    };

    let delayed = Duration::try_minutes(delay_in_minutes)
        .and_then(|delay| localized.fixed_offset().checked_add_signed(delay));
    match delayed {
        Some(instant) => Resolution::Valid(instant),
        None => {
            reporter.panic_on_build(&format!(
                "\"delay_in_minutes\" plugin option is {delay_in_minutes}, which overflows the \
                 resolved publish date."
            ));
            Resolution::Invalid
        }
    }
}

/// Parse with the configured pattern, accepting a full datetime first and
/// falling back to a calendar date at midnight.
fn parse_naive(raw: &str, format: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(raw, format)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn report_invalid_date(node: &Node, source: &DateSource, raw: &str, reporter: &dyn Reporter) {
    let node_json =
        serde_json::to_string_pretty(node).unwrap_or_else(|_| format!("{node:?}"));
    reporter.panic_on_build(&format!(
        "{INVALID_DATE_MESSAGE} Found value \"{raw}\" via {source:?} on the following \
         node:\n{node_json}"
    ));
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;
