use crate::event::LogEvent;
use crate::time::Timestamp;
use async_trait::async_trait;
use serde::Serialize;
use std::error::Error;

/// Normalized configuration forwarded to the native layer on initialization.
///
/// Only the fields the native module consumes; feature flags and the event
/// mapper stay on the Rust side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeConfiguration {
    pub client_token: String,
    pub env: String,
    pub application_id: String,
}

/// A user action reported to the RUM side of the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RumAction {
    /// Action kind, e.g. "tap" or "scroll".
    pub action_type: String,
    pub name: String,
    pub timestamp: Timestamp,
}

/// A runtime error reported to the RUM side of the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RumError {
    pub message: String,
    /// Where the error was caught, e.g. "source" or "panic".
    pub source: String,
    pub stacktrace: Option<String>,
    pub timestamp: Timestamp,
}

/// The native telemetry module behind the SDK facade.
///
/// Implementations own everything heavy: batching, persistence, network
/// transport, crash handling. The facade only ever hands them fully-formed
/// payloads. Injectable so tests can substitute a recording mock.
#[async_trait]
pub trait TelemetryBackend: Send + Sync {
    /// Bring the native module up with the given configuration.
    ///
    /// Called exactly once per process lifetime by the bootstrapper; the
    /// facade performs no retries, so an `Err` here propagates to whoever
    /// called [`crate::init::initialize`].
    async fn initialize(
        &self,
        configuration: &NativeConfiguration,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Hand a mapped, sanitized log event over to native transport.
    ///
    /// The event is not retained by the facade past this call.
    async fn send_log(&self, event: &LogEvent) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Report a user action to the RUM pipeline.
    async fn add_action(&self, action: &RumAction) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Report a runtime error to the RUM pipeline.
    async fn add_error(&self, error: &RumError) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// SDK self-monitoring signal, e.g. "the event mapper crashed".
    ///
    /// Fire-and-forget: no return value, must never fail, never blocks.
    /// Default implementation discards the message.
    fn telemetry_debug(&self, message: &str) {
        let _ = message;
    }
}
