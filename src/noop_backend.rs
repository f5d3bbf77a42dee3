use crate::backend::{NativeConfiguration, RumAction, RumError, TelemetryBackend};
use crate::event::LogEvent;
use async_trait::async_trait;
use std::error::Error;

/// A backend that accepts everything and stores nothing.
///
/// Useful for measuring the overhead of the facade itself without any
/// native module behind it, and for tests that don't care about delivery.
#[derive(Clone, Default)]
pub struct NoopBackend;

#[async_trait]
impl TelemetryBackend for NoopBackend {
    async fn initialize(
        &self,
        _configuration: &NativeConfiguration,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    async fn send_log(&self, _event: &LogEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    async fn add_action(&self, _action: &RumAction) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    async fn add_error(&self, _error: &RumError) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
