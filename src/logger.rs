use crate::backend::TelemetryBackend;
use crate::event::{LogEventMapper, LogStatus, RawLog, UserInfo};
use crate::init::SdkError;
use crate::mapper::{apply_log_event_mapper, format_log_event};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Per-status logging entry point over the native backend.
///
/// Each call builds a [`RawLog`], formats it with the current status and
/// identity snapshot, runs the configured event mapper (if any) through the
/// crash-isolated pipeline, and hands the result to the backend. Events are
/// not retained past the call, and a misbehaving mapper never drops one.
///
/// Obtained from [`crate::init::Sdk::logger`]; cheap to clone conceptually
/// but constructed per call site in practice.
pub struct Logger {
    backend: Arc<dyn TelemetryBackend>,
    mapper: Option<LogEventMapper>,
    user_info: Arc<RwLock<UserInfo>>,
    attributes: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl Logger {
    pub(crate) fn new(
        backend: Arc<dyn TelemetryBackend>,
        mapper: Option<LogEventMapper>,
        user_info: Arc<RwLock<UserInfo>>,
    ) -> Self {
        Self {
            backend,
            mapper,
            user_info,
            attributes: RwLock::new(BTreeMap::new()),
        }
    }

    /// Replace the custom attributes attached to every subsequent event.
    pub fn set_attributes(&self, attributes: BTreeMap<String, serde_json::Value>) {
        if let Ok(mut slot) = self.attributes.write() {
            *slot = attributes;
        }
    }

    /// Set a single custom attribute.
    pub fn add_attribute(&self, key: impl Into<String>, value: serde_json::Value) {
        if let Ok(mut slot) = self.attributes.write() {
            slot.insert(key.into(), value);
        }
    }

    pub async fn debug(
        &self,
        message: impl Into<String>,
        context: BTreeMap<String, serde_json::Value>,
    ) -> Result<(), SdkError> {
        self.log(LogStatus::Debug, message.into(), context).await
    }

    pub async fn info(
        &self,
        message: impl Into<String>,
        context: BTreeMap<String, serde_json::Value>,
    ) -> Result<(), SdkError> {
        self.log(LogStatus::Info, message.into(), context).await
    }

    pub async fn warn(
        &self,
        message: impl Into<String>,
        context: BTreeMap<String, serde_json::Value>,
    ) -> Result<(), SdkError> {
        self.log(LogStatus::Warn, message.into(), context).await
    }

    pub async fn error(
        &self,
        message: impl Into<String>,
        context: BTreeMap<String, serde_json::Value>,
    ) -> Result<(), SdkError> {
        self.log(LogStatus::Error, message.into(), context).await
    }

    async fn log(
        &self,
        status: LogStatus,
        message: String,
        context: BTreeMap<String, serde_json::Value>,
    ) -> Result<(), SdkError> {
        let raw = RawLog {
            message,
            context,
            attributes: self
                .attributes
                .read()
                .map(|a| a.clone())
                .unwrap_or_default(),
        };
        let user_info = self
            .user_info
            .read()
            .map(|u| u.clone())
            .unwrap_or_default();

        let event = format_log_event(raw, status, user_info);
        let event = match &self.mapper {
            Some(mapper) => apply_log_event_mapper(mapper, event, self.backend.as_ref()),
            None => event,
        };

        self.backend
            .send_log(&event)
            .await
            .map_err(SdkError::Backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{NativeConfiguration, RumAction, RumError};
    use crate::event::LogEvent;
    use async_trait::async_trait;
    use std::error::Error;

    #[derive(Default)]
    struct CapturingBackend {
        sent: RwLock<Vec<LogEvent>>,
    }

    #[async_trait]
    impl TelemetryBackend for CapturingBackend {
        async fn initialize(
            &self,
            _configuration: &NativeConfiguration,
        ) -> Result<(), Box<dyn Error + Send + Sync>> {
            Ok(())
        }

        async fn send_log(&self, event: &LogEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.sent.write().unwrap().push(event.clone());
            Ok(())
        }

        async fn add_action(
            &self,
            _action: &RumAction,
        ) -> Result<(), Box<dyn Error + Send + Sync>> {
            Ok(())
        }

        async fn add_error(&self, _error: &RumError) -> Result<(), Box<dyn Error + Send + Sync>> {
            Ok(())
        }
    }

    fn user() -> Arc<RwLock<UserInfo>> {
        Arc::new(RwLock::new(UserInfo {
            id: Some("u-1".to_string()),
            ..UserInfo::default()
        }))
    }

    #[tokio::test]
    async fn log_formats_and_forwards_to_the_backend() {
        let backend = Arc::new(CapturingBackend::default());
        let logger = Logger::new(backend.clone(), None, user());
        logger.add_attribute("build", serde_json::json!(7));

        let mut context = BTreeMap::new();
        context.insert("screen".to_string(), serde_json::json!("home"));
        logger.info("hello", context).await.unwrap();

        let sent = backend.sent.read().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, "hello");
        assert_eq!(sent[0].status, LogStatus::Info);
        assert_eq!(sent[0].user_info.id.as_deref(), Some("u-1"));
        assert_eq!(sent[0].attributes.get("build"), Some(&serde_json::json!(7)));
    }

    #[tokio::test]
    async fn mapper_rewrites_message_but_not_status() {
        let backend = Arc::new(CapturingBackend::default());
        let mapper: LogEventMapper = Arc::new(|mut e: LogEvent| {
            e.message = "[redacted]".to_string();
            e.status = LogStatus::Debug;
            e
        });
        let logger = Logger::new(backend.clone(), Some(mapper), user());

        logger.error("card number 4242", BTreeMap::new()).await.unwrap();

        let sent = backend.sent.read().unwrap();
        assert_eq!(sent[0].message, "[redacted]");
        assert_eq!(sent[0].status, LogStatus::Error);
    }

    #[tokio::test]
    async fn panicking_mapper_still_delivers_the_event() {
        let backend = Arc::new(CapturingBackend::default());
        let mapper: LogEventMapper = Arc::new(|_e: LogEvent| panic!("boom"));
        let logger = Logger::new(backend.clone(), Some(mapper), user());

        logger.warn("disk almost full", BTreeMap::new()).await.unwrap();

        let sent = backend.sent.read().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, "disk almost full");
        assert_eq!(sent[0].status, LogStatus::Warn);
    }
}
