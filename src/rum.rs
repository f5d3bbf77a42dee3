use crate::backend::{RumAction, RumError, TelemetryBackend};
use crate::init::SdkError;
use crate::time::{SystemTimeProvider, TimeProvider, Timestamp};
use std::sync::{Arc, RwLock};

/// RUM entry point: reports user actions and runtime errors to the backend,
/// stamped with timestamps from a swappable [`TimeProvider`].
///
/// Obtained from [`crate::init::Sdk::rum`].
pub struct Rum {
    backend: Arc<dyn TelemetryBackend>,
    time_provider: RwLock<Arc<dyn TimeProvider>>,
}

impl Rum {
    pub(crate) fn new(backend: Arc<dyn TelemetryBackend>) -> Self {
        Self {
            backend,
            time_provider: RwLock::new(Arc::new(SystemTimeProvider::new())),
        }
    }

    /// Override the default time provider.
    ///
    /// Intended for tests and replay tooling that need pinned timestamps.
    pub fn set_time_provider(&self, provider: Arc<dyn TimeProvider>) {
        if let Ok(mut slot) = self.time_provider.write() {
            *slot = provider;
        }
    }

    /// Report a user action, e.g. a tap on a named control.
    pub async fn add_action(
        &self,
        action_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), SdkError> {
        let action = RumAction {
            action_type: action_type.into(),
            name: name.into(),
            timestamp: self.now(),
        };
        self.backend
            .add_action(&action)
            .await
            .map_err(SdkError::Backend)
    }

    /// Report a runtime error.
    pub async fn add_error(
        &self,
        message: impl Into<String>,
        source: impl Into<String>,
        stacktrace: Option<String>,
    ) -> Result<(), SdkError> {
        let error = RumError {
            message: message.into(),
            source: source.into(),
            stacktrace,
            timestamp: self.now(),
        };
        self.backend
            .add_error(&error)
            .await
            .map_err(SdkError::Backend)
    }

    fn now(&self) -> Timestamp {
        self.time_provider
            .read()
            .map(|p| p.timestamp())
            .unwrap_or_else(|_| Timestamp {
                unix_ms: 0,
                mono_ms: 0,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NativeConfiguration;
    use crate::event::LogEvent;
    use async_trait::async_trait;
    use std::error::Error;

    #[derive(Default)]
    struct CapturingBackend {
        actions: RwLock<Vec<RumAction>>,
        errors: RwLock<Vec<RumError>>,
    }

    #[async_trait]
    impl TelemetryBackend for CapturingBackend {
        async fn initialize(
            &self,
            _configuration: &NativeConfiguration,
        ) -> Result<(), Box<dyn Error + Send + Sync>> {
            Ok(())
        }

        async fn send_log(&self, _event: &LogEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
            Ok(())
        }

        async fn add_action(
            &self,
            action: &RumAction,
        ) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.actions.write().unwrap().push(action.clone());
            Ok(())
        }

        async fn add_error(&self, error: &RumError) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.errors.write().unwrap().push(error.clone());
            Ok(())
        }
    }

    struct FixedTimeProvider {
        unix_ms: i64,
        mono_ms: u64,
    }

    impl TimeProvider for FixedTimeProvider {
        fn timestamp(&self) -> Timestamp {
            Timestamp {
                unix_ms: self.unix_ms,
                mono_ms: self.mono_ms,
            }
        }
    }

    #[tokio::test]
    async fn set_time_provider_overrides_the_default() {
        let backend = Arc::new(CapturingBackend::default());
        let rum = Rum::new(backend.clone());
        rum.set_time_provider(Arc::new(FixedTimeProvider {
            unix_ms: 1000,
            mono_ms: 2000,
        }));

        rum.add_action("tap", "checkout_button").await.unwrap();

        let actions = backend.actions.read().unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].timestamp.unix_ms, 1000);
        assert_eq!(actions[0].timestamp.mono_ms, 2000);
        assert_eq!(actions[0].action_type, "tap");
        assert_eq!(actions[0].name, "checkout_button");
    }

    #[tokio::test]
    async fn add_error_forwards_source_and_stacktrace() {
        let backend = Arc::new(CapturingBackend::default());
        let rum = Rum::new(backend.clone());

        rum.add_error("boom", "panic", Some("at main.rs:1".to_string()))
            .await
            .unwrap();

        let errors = backend.errors.read().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "boom");
        assert_eq!(errors[0].source, "panic");
        assert_eq!(errors[0].stacktrace.as_deref(), Some("at main.rs:1"));
    }
}
