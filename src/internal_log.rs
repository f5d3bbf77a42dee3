use tracing::{debug, error, info, warn};

/// Verbosity of the SDK's own diagnostics, distinct from the
/// [`crate::event::LogStatus`] carried by telemetry events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SdkVerbosity {
    Debug,
    Info,
    Warn,
    Error,
}

/// Human-facing diagnostics sink for the SDK itself.
///
/// Forwards to the ambient `tracing` subscriber under the `mobile_rum_sdk`
/// target. Fire-and-forget: never fails, never blocks the caller.
pub struct InternalLog;

impl InternalLog {
    pub fn log(message: &str, verbosity: SdkVerbosity) {
        match verbosity {
            SdkVerbosity::Debug => debug!(target: "mobile_rum_sdk", "{message}"),
            SdkVerbosity::Info => info!(target: "mobile_rum_sdk", "{message}"),
            SdkVerbosity::Warn => warn!(target: "mobile_rum_sdk", "{message}"),
            SdkVerbosity::Error => error!(target: "mobile_rum_sdk", "{message}"),
        }
    }
}
