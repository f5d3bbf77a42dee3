use std::collections::BTreeMap;
use std::sync::Arc;

use mobile_rum_sdk::event::{LogEvent, LogEventMapper};
use mobile_rum_sdk::init::{Sdk, SdkConfiguration};
use mobile_rum_sdk::noop_backend::NoopBackend;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Scrub anything that looks like an email address out of log messages.
    // Whatever else the mapper does, severity and identity survive intact.
    let mapper: LogEventMapper = Arc::new(|mut event: LogEvent| {
        if event.message.contains('@') {
            event.message = "[message redacted]".to_string();
        }
        event.context.remove("email");
        event
    });

    let sdk = Sdk::new(Arc::new(NoopBackend));
    let mut configuration = SdkConfiguration::new("pub1234", "staging", "app-abc");
    configuration.log_event_mapper = Some(mapper);
    sdk.initialize(&configuration).await.expect("initialize SDK");

    let logger = sdk.logger();
    let mut context = BTreeMap::new();
    context.insert("email".to_string(), serde_json::json!("jane@example.com"));
    logger
        .warn("login failed for jane@example.com", context)
        .await
        .expect("send log");

    println!("sent one redacted event to the noop backend");
}
