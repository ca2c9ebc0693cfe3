//! Clock Abstraction
//!
//! Classification compares a resolved publish date against "now", sampled
//! exactly once per classified node. Routing that sample through a trait
//! keeps publish-window tests deterministic: a fixed date in node data plus a
//! mock clock pins the published/unpublished outcome without sleeping or
//! computing dates relative to the wall clock.

use chrono::{DateTime, Utc};

/// Source of the current instant used for publish comparisons
pub trait TimeProvider: Send + Sync {
    /// Get the current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// System clock, the production implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for deterministic tests and host test harnesses
///
/// # Examples
///
/// ```rust
/// use scheduled_publishing::models::time::{MockTimeProvider, TimeProvider};
/// use chrono::{TimeZone, Utc};
///
/// let clock = MockTimeProvider::with_time(Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap());
/// assert_eq!(clock.now(), Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct MockTimeProvider {
    current_time: DateTime<Utc>,
}

impl MockTimeProvider {
    /// Create a mock clock pinned to a specific instant
    pub fn with_time(time: DateTime<Utc>) -> Self {
        Self { current_time: time }
    }

    /// Advance the clock by the given duration
    pub fn advance(&mut self, duration: chrono::Duration) {
        self.current_time += duration;
    }
}

impl TimeProvider for MockTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.current_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_system_time_provider_tracks_wall_clock() {
        let provider = SystemTimeProvider;
        let sampled = provider.now();

        assert!((Utc::now() - sampled).num_milliseconds().abs() < 1000);
    }

    #[test]
    fn test_mock_time_provider_is_pinned() {
        let instant = Utc.with_ymd_and_hms(2022, 1, 30, 12, 0, 0).unwrap();
        let provider = MockTimeProvider::with_time(instant);

        assert_eq!(provider.now(), instant);
        assert_eq!(provider.now(), instant);
    }

    #[test]
    fn test_mock_time_provider_advance() {
        let instant = Utc.with_ymd_and_hms(2022, 1, 30, 12, 0, 0).unwrap();
        let mut provider = MockTimeProvider::with_time(instant);

        provider.advance(Duration::minutes(90));

        assert_eq!(provider.now(), instant + Duration::minutes(90));
    }
}
