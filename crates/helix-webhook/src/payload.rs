use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// `metadata.source` value identifying this integration.
pub const SOURCE_WEBCHAT: &str = "webchat";

/// JSON body POSTed to the webhook.
///
/// ```json
/// {"message": "...", "metadata": {"site": "...", "source": "webchat"}, "timestamp": "2026-10-19T08:30:00+00:00"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    pub message: String,
    pub metadata: Map<String, Value>,
    /// RFC 3339, seconds precision, numeric offset.
    pub timestamp: String,
}

impl WebhookPayload {
    /// Build a payload. Metadata layers are applied in order, later keys
    /// replacing earlier ones: `site`/`source`, then `configured`, then `extra`.
    pub fn new(
        message: &str,
        site_name: &str,
        configured: &Map<String, Value>,
        extra: &Map<String, Value>,
        at: DateTime<Utc>,
    ) -> Self {
        let mut metadata = Map::new();
        metadata.insert("site".to_string(), Value::from(site_name));
        metadata.insert("source".to_string(), Value::from(SOURCE_WEBCHAT));
        for (key, value) in configured.iter().chain(extra) {
            metadata.insert(key.clone(), value.clone());
        }

        Self {
            message: message.to_string(),
            metadata,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}
