//! Build Diagnostics Surface
//!
//! All error and warning reporting is delegated to the host through the
//! `Reporter` trait; the plugin defines no internal exception type for date
//! or configuration problems. A fatal report is expected to halt the host's
//! build. Every failure path returns an empty result to its immediate caller
//! after reporting, so callers never distinguish "reported and halting" from
//! "absent" at the type level.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Host reporting surface for build diagnostics
pub trait Reporter: Send + Sync {
    /// Report a fatal build error. The host is expected to abort the build
    /// with a non-zero exit after this call.
    fn panic_on_build(&self, message: &str);

    /// Report a non-fatal warning; execution continues
    fn warn(&self, message: &str);
}

/// Production reporter emitting through `tracing`.
///
/// Halting is the host's responsibility; this reporter records that a fatal
/// condition occurred so the surrounding build can check [`build_failed`]
/// and exit non-zero.
///
/// [`build_failed`]: TracingReporter::build_failed
#[derive(Debug, Default)]
pub struct TracingReporter {
    failed: AtomicBool,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any fatal report was issued
    pub fn build_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl Reporter for TracingReporter {
    fn panic_on_build(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        tracing::error!(target: "scheduled_publishing", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "scheduled_publishing", "{message}");
    }
}

/// Recording reporter for tests and host test harnesses
#[derive(Debug, Default)]
pub struct RecordingReporter {
    panics: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fatal messages reported so far
    pub fn panics(&self) -> Vec<String> {
        self.panics.lock().unwrap().clone()
    }

    /// Warnings reported so far
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn panic_on_build(&self, message: &str) {
        self.panics.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_reporter_flags_fatal_reports() {
        let reporter = TracingReporter::new();
        assert!(!reporter.build_failed());

        reporter.warn("just a warning");
        assert!(!reporter.build_failed());

        reporter.panic_on_build("boom");
        assert!(reporter.build_failed());
    }

    #[test]
    fn test_recording_reporter_keeps_messages_separate() {
        let reporter = RecordingReporter::new();
        reporter.warn("w1");
        reporter.panic_on_build("p1");

        assert_eq!(reporter.warnings(), vec!["w1"]);
        assert_eq!(reporter.panics(), vec!["p1"]);
    }
}
