//! Publishes a light status and watches it come back.
//!
//! Run against any reachable broker:
//!
//! ```text
//! cargo run --example light_monitor -- mqtt://localhost:1883
//! ```

use std::time::Duration;

use color_eyre::{eyre::eyre, Result};
use heimbus::{logging, topics, BrokerConfig, BrokerConnection};
use serde_json::{json, Value};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init("debug");

    let url = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: light_monitor <broker-url>"))?;

    let config = BrokerConfig::new(url)?;
    let mut connection = BrokerConnection::new(config);
    connection
        .init(|topic: String, data: Value| async move {
            info!(topic = %topic, data = %data, "received");
            Ok(())
        })
        .await?;

    let status = topics::light_status("kitchen", "main");
    connection.subscribe(&status).await?;
    connection.publish(&status, &json!({ "on": true })).await?;

    // Give the round trip a moment before the process ends.
    tokio::time::sleep(Duration::from_secs(2)).await;
    Ok(())
}
