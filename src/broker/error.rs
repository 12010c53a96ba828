//! Error types for the broker facade.

use rumqttc::{ClientError, ConnectReturnCode, ConnectionError, OptionError};
use thiserror::Error;

/// Errors surfaced by [`BrokerConnection`](super::BrokerConnection) operations.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// Operation attempted before `init` established a session.
    #[error("broker connection not initialized")]
    NotConnected,

    /// Network-level failure while talking to the broker.
    #[error("connection failed: {0}")]
    Connect(#[from] ConnectionError),

    /// The broker answered the connect handshake with a non-success code.
    #[error("broker rejected connection: {code:?}")]
    Rejected {
        /// Return code from the CONNACK packet.
        code: ConnectReturnCode,
    },

    /// The connect handshake did not complete in time.
    #[error("connection attempt timed out after {timeout_ms}ms")]
    ConnectTimeout {
        /// Configured handshake budget.
        timeout_ms: u64,
    },

    /// The underlying client refused a publish or subscribe request.
    #[error("client request failed: {0}")]
    Client(#[from] ClientError),

    /// Outbound payload could not be serialized to JSON.
    #[error("payload serialization failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Invalid connection settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors produced while constructing or loading a
/// [`BrokerConfig`](super::BrokerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `url` field was empty.
    #[error("broker url must not be empty")]
    MissingUrl,

    /// The `url` field could not be parsed into MQTT connection options.
    #[error("invalid broker url: {0}")]
    Url(#[from] OptionError),

    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was not valid TOML, or contained unknown keys.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
