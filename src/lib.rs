//! Publish/subscribe convenience layer for a home-automation MQTT deployment.
//!
//! Two independent pieces:
//!
//! - [`broker`] — a thin facade over one `rumqttc` connection: inbound bodies
//!   are JSON-decoded and forwarded to a caller-supplied handler, outbound
//!   payloads are serialized to JSON with a `since` timestamp stamped on.
//! - [`topics`] — the catalogue of topic-name builders every peer in the
//!   deployment agrees on (shutters, buttons, fans, lights, windows, sensors,
//!   heating valves, automation lifecycle).
//!
//! ```rust,no_run
//! use heimbus::{topics, BrokerConfig, BrokerConnection};
//! use serde_json::{json, Value};
//!
//! # async fn run() -> Result<(), heimbus::BrokerError> {
//! let config = BrokerConfig::new("mqtt://broker.local:1883")?;
//! let mut connection = BrokerConnection::new(config);
//! connection
//!     .init(|topic: String, data: Value| async move {
//!         println!("{topic}: {data}");
//!         Ok(())
//!     })
//!     .await?;
//!
//! connection
//!     .subscribe(&topics::window_status("kitchen", "left"))
//!     .await?;
//! connection
//!     .publish(&topics::light_status("kitchen", "main"), &json!({ "on": true }))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod broker;
pub mod logging;
pub mod topics;

pub use broker::{
    BrokerConfig, BrokerConnection, BrokerError, ConfigError, HandlerError, MessageHandler,
    PublishOptions,
};
