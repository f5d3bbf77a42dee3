use crate::backend::TelemetryBackend;
use crate::event::{LogEvent, LogEventMapper, LogStatus, RawLog, UserInfo};
use crate::internal_log::{InternalLog, SdkVerbosity};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Run a user-supplied event mapper over a log event, with crash isolation
/// and protected-field reconstruction.
///
/// The mapper receives an owned copy of the event, so it can never mutate
/// the snapshot this function keeps. Whatever the mapper returns, only
/// `message` and `context` make it into the delivered event; `status`,
/// `user_info` and `attributes` are reassigned field by field from the
/// snapshot, never merged structurally. A mapper that rewrites severity or
/// identity is silently overruled.
///
/// If the mapper panics, the panic is caught: a warning with the serialized
/// original event goes to [`InternalLog`], one `telemetry_debug` signal goes
/// to the backend, and the original event is returned unmodified. Telemetry
/// is never dropped and no panic ever reaches the caller.
pub fn apply_log_event_mapper(
    mapper: &LogEventMapper,
    log: LogEvent,
    backend: &dyn TelemetryBackend,
) -> LogEvent {
    let original_log = log.clone();

    match catch_unwind(AssertUnwindSafe(|| mapper(log))) {
        Ok(mapped_event) => LogEvent {
            message: mapped_event.message,
            context: mapped_event.context,
            status: original_log.status,
            user_info: original_log.user_info,
            attributes: original_log.attributes,
        },
        Err(panic) => {
            let serialized = serde_json::to_string(&original_log)
                .unwrap_or_else(|_| "<unserializable log>".to_string());
            InternalLog::log(
                &format!(
                    "The log event mapper crashed when mapping log {}: {}",
                    serialized,
                    panic_message(panic.as_ref())
                ),
                SdkVerbosity::Warn,
            );
            backend.telemetry_debug("Error while running the log event mapper");
            original_log
        }
    }
}

/// Merge a raw log with the status and identity snapshot owned by the SDK.
///
/// Pure and infallible; the only place a `LogEvent` is born.
pub fn format_log_event(raw_log: RawLog, log_status: LogStatus, user_info: UserInfo) -> LogEvent {
    LogEvent {
        message: raw_log.message,
        context: raw_log.context,
        status: log_status,
        user_info,
        attributes: raw_log.attributes,
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
