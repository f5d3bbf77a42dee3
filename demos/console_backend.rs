use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;

use mobile_rum_sdk::backend::{NativeConfiguration, RumAction, RumError, TelemetryBackend};
use mobile_rum_sdk::event::LogEvent;
use mobile_rum_sdk::init::{Sdk, SdkConfiguration};

/// Backend that prints every payload as a JSON line, standing in for a real
/// native module.
struct ConsoleBackend;

#[async_trait]
impl TelemetryBackend for ConsoleBackend {
    async fn initialize(
        &self,
        configuration: &NativeConfiguration,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("init {}", serde_json::to_string(configuration)?);
        Ok(())
    }

    async fn send_log(&self, event: &LogEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("log  {}", serde_json::to_string(event)?);
        Ok(())
    }

    async fn add_action(&self, action: &RumAction) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("rum  {}", serde_json::to_string(action)?);
        Ok(())
    }

    async fn add_error(&self, error: &RumError) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("rum  {}", serde_json::to_string(error)?);
        Ok(())
    }

    fn telemetry_debug(&self, message: &str) {
        println!("tele {message}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let sdk = Sdk::new(Arc::new(ConsoleBackend));
    let mut configuration = SdkConfiguration::new("pub1234", "prod", "app-abc");
    configuration.track_interactions = true;
    sdk.initialize(&configuration).await.expect("initialize SDK");

    let logger = sdk.logger();
    let mut context = BTreeMap::new();
    context.insert("screen".to_string(), serde_json::json!("home"));
    logger.info("application started", context).await.expect("send log");

    let rum = sdk.rum();
    rum.add_action("tap", "login_button").await.expect("send action");
    rum.add_error("unhandled panic", "panic", None)
        .await
        .expect("send error");
}
