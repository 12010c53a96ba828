//! # Broker Connection Facade
//!
//! Wraps one MQTT connection behind three operations: `init`, `publish` and
//! `subscribe`. Inbound bodies are JSON-decoded and forwarded to a
//! caller-supplied handler; outbound payloads are serialized to JSON with a
//! `since` timestamp stamped on.
//!
//! ## Module Architecture
//!
//! ```text
//! broker/
//! ├── config.rs     - validated connection settings
//! ├── connection.rs - the facade: init / publish / subscribe
//! ├── envelope.rs   - payload normalization and the `since` stamp
//! └── error.rs      - error taxonomy
//! ```
//!
//! ## Failure Policy
//!
//! Connection failures during `init` and broker rejections of
//! `publish`/`subscribe` propagate to the caller. Inbound failures never do:
//! undecodable bodies and handler errors are logged at error level and the
//! message is dropped, keeping the listener alive indefinitely. A lost
//! connection is terminal for this instance; there is no reconnect logic.

pub mod config;
pub mod connection;
pub mod envelope;
pub mod error;

pub use config::BrokerConfig;
pub use connection::{BrokerConnection, HandlerError, MessageHandler};
pub use envelope::PublishOptions;
pub use error::{BrokerError, ConfigError};
