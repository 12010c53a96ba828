//! The broker connection facade: one connection, `init` / `publish` /
//! `subscribe`.
//!
//! There is intentionally no reconnect, backoff or shutdown machinery here.
//! Once the event loop dies the connection is gone and every further call
//! fails until the owning process builds a fresh one.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use rumqttc::{
    AsyncClient, ConnAck, ConnectReturnCode, Event, EventLoop, Packet, QoS,
};
use serde::Serialize;
use serde_json::Value;
use tokio::time;
use tracing::{debug, error, info, trace};

use super::config::BrokerConfig;
use super::envelope::{self, PublishOptions};
use super::error::BrokerError;

/// Boxed error returned by message handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Callback invoked once per successfully decoded inbound message.
///
/// Blanket-implemented for async closures taking `(String, Value)`. Handler
/// errors are logged by the listener and never stop message processing,
/// matching how undecodable bodies are treated.
pub trait MessageHandler: Send + Sync + 'static {
    /// Process one decoded message from `topic`.
    fn handle(
        &self,
        topic: String,
        data: Value,
    ) -> impl Future<Output = Result<(), HandlerError>> + Send;
}

impl<F, Fut> MessageHandler for F
where
    F: Fn(String, Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HandlerError>> + Send,
{
    fn handle(
        &self,
        topic: String,
        data: Value,
    ) -> impl Future<Output = Result<(), HandlerError>> + Send {
        self(topic, data)
    }
}

/// One MQTT connection, mediating all inbound and outbound traffic.
///
/// The session handle exists only after [`init`](Self::init) succeeded, and
/// is an instance field rather than process state, so independent
/// connections can coexist.
pub struct BrokerConnection {
    config: BrokerConfig,
    session: Option<AsyncClient>,
}

impl BrokerConnection {
    /// Create an unconnected facade from validated settings.
    pub fn new(config: BrokerConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Connect to the broker and start forwarding inbound messages.
    ///
    /// Polls the event loop until the broker acknowledges the session, then
    /// spawns the listener task. Per inbound message the listener decodes
    /// the body as JSON and awaits `handler`; undecodable bodies and handler
    /// errors are logged and dropped. Connection failures, broker rejection
    /// and handshake timeout propagate.
    pub async fn init<H: MessageHandler>(&mut self, handler: H) -> Result<(), BrokerError> {
        let options = self.config.mqtt_options()?;
        let (client, event_loop) = AsyncClient::new(options, self.config.channel_capacity);

        let timeout_ms = self.config.connect_timeout_ms;
        let event_loop = time::timeout(Duration::from_millis(timeout_ms), establish(event_loop))
            .await
            .map_err(|_| BrokerError::ConnectTimeout { timeout_ms })??;

        info!(url = %self.config.url, "connected to broker");

        tokio::spawn(listen(event_loop, handler));
        self.session = Some(client);
        Ok(())
    }

    /// Publish `data` to `topic` with default options (QoS 0, not retained).
    pub async fn publish<T: Serialize>(&self, topic: &str, data: &T) -> Result<(), BrokerError> {
        self.publish_with(topic, data, PublishOptions::default())
            .await
    }

    /// Publish `data` to `topic`.
    ///
    /// Mappings are sent as-is plus a `since` timestamp; primitives and
    /// sequences are wrapped under a `value` key first. Send failures
    /// propagate unchanged, there is no retry.
    pub async fn publish_with<T: Serialize>(
        &self,
        topic: &str,
        data: &T,
        options: PublishOptions,
    ) -> Result<(), BrokerError> {
        let session = self.session()?;
        let data = serde_json::to_value(data)?;
        trace!(topic, data = %data, ?options, "publishing");
        let body = serde_json::to_vec(&envelope::stamp(data, Utc::now()))?;
        session
            .publish(topic, options.qos, options.retain, body)
            .await?;
        Ok(())
    }

    /// Subscribe to `topic`. The handler passed to [`init`](Self::init)
    /// receives every decoded message arriving on it.
    pub async fn subscribe(&self, topic: &str) -> Result<(), BrokerError> {
        self.session()?.subscribe(topic, QoS::AtMostOnce).await?;
        debug!(topic, "subscribed");
        Ok(())
    }

    fn session(&self) -> Result<&AsyncClient, BrokerError> {
        self.session.as_ref().ok_or(BrokerError::NotConnected)
    }
}

/// Poll a fresh event loop until the broker acknowledges the connection.
async fn establish(mut event_loop: EventLoop) -> Result<EventLoop, BrokerError> {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(ConnAck { code, .. }))) => {
                return if code == ConnectReturnCode::Success {
                    Ok(event_loop)
                } else {
                    Err(BrokerError::Rejected { code })
                };
            }
            Ok(event) => trace!(?event, "handshake event"),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Forward every inbound publish to the handler until the connection dies.
async fn listen<H: MessageHandler>(mut event_loop: EventLoop, handler: H) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                dispatch(&handler, publish.topic, &publish.payload).await;
            }
            Ok(Event::Incoming(Packet::Disconnect)) => {
                info!("broker closed the connection");
                break;
            }
            Ok(event) => trace!(?event, "broker event"),
            Err(err) => {
                error!(error = %err, "connection lost, stopping listener");
                break;
            }
        }
    }
}

/// Decode one inbound body and hand it to the handler.
///
/// Both failure modes end here, so one bad message can never kill the
/// listener.
async fn dispatch<H: MessageHandler>(handler: &H, topic: String, payload: &[u8]) {
    let data: Value = match serde_json::from_slice(payload) {
        Ok(data) => data,
        Err(err) => {
            error!(
                topic = %topic,
                payload = %String::from_utf8_lossy(payload),
                error = %err,
                "failed to decode inbound message"
            );
            return;
        }
    };
    if let Err(err) = handler.handle(topic.clone(), data).await {
        error!(topic = %topic, error = %err, "message handler failed");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<(String, Value)>>>,
    }

    impl MessageHandler for Recorder {
        fn handle(
            &self,
            topic: String,
            data: Value,
        ) -> impl Future<Output = Result<(), HandlerError>> + Send {
            let seen = Arc::clone(&self.seen);
            async move {
                seen.lock().unwrap().push((topic, data));
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn dispatch_forwards_decoded_messages() {
        let recorder = Recorder::default();
        dispatch(
            &recorder,
            "room/kitchen/light/main/status".to_string(),
            br#"{"on":true,"since":"2024-03-07T18:30:00.000Z"}"#,
        )
        .await;

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "room/kitchen/light/main/status");
        assert_eq!(seen[0].1["on"], true);
    }

    #[tokio::test]
    async fn dispatch_drops_malformed_bodies() {
        let recorder = Recorder::default();
        dispatch(
            &recorder,
            "room/kitchen/light/main/status".to_string(),
            b"not json at all",
        )
        .await;

        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dispatch_survives_handler_errors() {
        let failing = |_topic: String, _data: Value| async move {
            Err::<(), HandlerError>("handler gave up".into())
        };
        // Reaching the end is the assertion: the error must not escape.
        dispatch(&failing, "room/bath/fan/main/control".to_string(), b"{}").await;
    }

    #[tokio::test]
    async fn publish_before_init_fails() {
        let config = BrokerConfig::new("mqtt://broker.local:1883").unwrap();
        let connection = BrokerConnection::new(config);
        let err = connection
            .publish("room/kitchen/light/main/status", &json!({ "on": true }))
            .await
            .unwrap_err();
        assert!(matches!(err, BrokerError::NotConnected));
    }

    #[tokio::test]
    async fn subscribe_before_init_fails() {
        let config = BrokerConfig::new("mqtt://broker.local:1883").unwrap();
        let connection = BrokerConnection::new(config);
        let err = connection
            .subscribe("room/kitchen/window/left/status")
            .await
            .unwrap_err();
        assert!(matches!(err, BrokerError::NotConnected));
    }
}
