//! Outbound payload normalization.
//!
//! Every published body carries a `since` field holding the publish time.
//! Mappings are merged with the timestamp; primitives and sequences are
//! wrapped under a `value` key first, so the result is always a JSON object.

use chrono::{DateTime, SecondsFormat, Utc};
use rumqttc::QoS;
use serde_json::{json, Value};

/// Per-publish options, handed through to the MQTT client unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PublishOptions {
    /// Delivery guarantee requested from the broker.
    pub qos: QoS,
    /// Ask the broker to retain the message for late subscribers.
    pub retain: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            qos: QoS::AtMostOnce,
            retain: false,
        }
    }
}

impl PublishOptions {
    /// QoS 0, retained.
    pub fn retained() -> Self {
        Self {
            retain: true,
            ..Self::default()
        }
    }
}

/// Render the publish timestamp: RFC 3339 UTC with millisecond precision.
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Attach the `since` timestamp to an outbound payload.
///
/// A caller-supplied `since` field is overwritten; the stamp always reflects
/// the wrapper's own clock.
pub(crate) fn stamp(data: Value, at: DateTime<Utc>) -> Value {
    let since = Value::String(timestamp(at));
    match data {
        Value::Object(mut fields) => {
            fields.insert("since".to_string(), since);
            Value::Object(fields)
        }
        other => json!({ "value": other, "since": since }),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn publish_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 18, 30, 0).unwrap()
    }

    #[test]
    fn merges_timestamp_into_mappings() {
        let stamped = stamp(json!({ "on": true, "brightness": 80 }), publish_time());
        assert_eq!(
            stamped,
            json!({
                "on": true,
                "brightness": 80,
                "since": "2024-03-07T18:30:00.000Z",
            })
        );
    }

    #[test]
    fn overwrites_caller_supplied_since() {
        let stamped = stamp(json!({ "since": "1970-01-01T00:00:00.000Z" }), publish_time());
        assert_eq!(stamped["since"], "2024-03-07T18:30:00.000Z");
    }

    #[test]
    fn wraps_primitives_under_value() {
        for primitive in [json!("open"), json!(21.5), json!(false), json!(null)] {
            let stamped = stamp(primitive.clone(), publish_time());
            assert_eq!(
                stamped,
                json!({ "value": primitive, "since": "2024-03-07T18:30:00.000Z" })
            );
        }
    }

    #[test]
    fn wraps_sequences_under_value() {
        let stamped = stamp(json!([20.1, 20.4, 20.9]), publish_time());
        assert_eq!(
            stamped,
            json!({ "value": [20.1, 20.4, 20.9], "since": "2024-03-07T18:30:00.000Z" })
        );
    }

    #[test]
    fn stamped_body_round_trips() {
        let body = serde_json::to_vec(&stamp(json!({ "on": true }), publish_time())).unwrap();
        let decoded: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded["on"], true);
        assert_eq!(decoded["since"], "2024-03-07T18:30:00.000Z");
    }

    #[test]
    fn default_options_are_qos0_unretained() {
        let options = PublishOptions::default();
        assert_eq!(options.qos, QoS::AtMostOnce);
        assert!(!options.retain);
        assert!(PublishOptions::retained().retain);
    }
}
