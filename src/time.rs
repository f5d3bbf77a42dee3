use chrono::Utc;
use serde::Serialize;
use std::time::Instant;

/// A point in time as the RUM pipeline sees it: wall-clock milliseconds for
/// correlation with server-side data, monotonic milliseconds for computing
/// durations that survive clock adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    /// Milliseconds since the unix epoch.
    pub unix_ms: i64,
    /// Milliseconds on a monotonic clock, relative to provider creation.
    pub mono_ms: u64,
}

/// Source of timestamps for RUM payloads.
///
/// Swappable through [`crate::rum::Rum::set_time_provider`] so tests and
/// replay tooling can pin time.
pub trait TimeProvider: Send + Sync {
    fn timestamp(&self) -> Timestamp;
}

/// Default [`TimeProvider`]: `chrono` wall clock plus a process-local
/// monotonic origin captured at construction.
pub struct SystemTimeProvider {
    origin: Instant,
}

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemTimeProvider {
    fn timestamp(&self) -> Timestamp {
        Timestamp {
            unix_ms: Utc::now().timestamp_millis(),
            mono_ms: self.origin.elapsed().as_millis() as u64,
        }
    }
}
