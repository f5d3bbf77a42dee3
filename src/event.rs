use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Severity attached to a log event by the SDK.
///
/// This is the status of the *telemetry* event as seen by the product
/// (e.g. in the log explorer), not the verbosity of the SDK's own internal
/// diagnostics (see [`crate::internal_log::SdkVerbosity`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogStatus::Debug => "debug",
            LogStatus::Info => "info",
            LogStatus::Warn => "warn",
            LogStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Identity snapshot attached to every event at formatting time.
///
/// Owned by the SDK (set through [`crate::init::Sdk::set_user`]), never by
/// the application's event mapper. The default value is the anonymous user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub extra_info: BTreeMap<String, serde_json::Value>,
}

/// Producer-internal representation of a telemetry line, before the SDK
/// attaches status and identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawLog {
    pub message: String,
    /// Free-form context supplied at the call site.
    pub context: BTreeMap<String, serde_json::Value>,
    /// Custom attributes configured on the logger.
    pub attributes: BTreeMap<String, serde_json::Value>,
}

/// Public representation of a log event, as handed to user-supplied mappers
/// and ultimately to the native transport layer.
///
/// `status`, `user_info` and `attributes` are owned by the SDK: the mapper
/// pipeline discards any values a mapper writes into them (see
/// [`crate::mapper::apply_log_event_mapper`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub message: String,
    pub context: BTreeMap<String, serde_json::Value>,
    pub status: LogStatus,
    pub user_info: UserInfo,
    pub attributes: BTreeMap<String, serde_json::Value>,
}

/// User-supplied transformation applied to every log event before it is
/// forwarded to the native layer.
///
/// Supplied once in [`crate::init::SdkConfiguration`], invoked once per
/// event. Treated as hostile by the pipeline: it may panic, and whatever it
/// returns only contributes `message` and `context` to the delivered event.
pub type LogEventMapper = Arc<dyn Fn(LogEvent) -> LogEvent + Send + Sync>;
