use chrono::Utc;
use helix_core::config::{HelixConfig, WebhookConfig};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::client::{HttpWebhookClient, WebhookClient};
use crate::error::{RelayError, TransportError};
use crate::payload::WebhookPayload;
use crate::response::WebhookResponse;

/// Forwards chat messages from the widget to the automation webhook.
///
/// Holds the site name and webhook settings fixed at construction; the
/// client is swappable so tests can stand in for the network.
pub struct ChatRelay {
    site_name: String,
    webhook: WebhookConfig,
    client: Box<dyn WebhookClient>,
}

impl ChatRelay {
    pub fn new(site_name: impl Into<String>, webhook: WebhookConfig, client: Box<dyn WebhookClient>) -> Self {
        Self {
            site_name: site_name.into(),
            webhook,
            client,
        }
    }

    /// Relay backed by the reqwest client, built from the full config.
    pub fn from_config(config: &HelixConfig) -> Result<Self, TransportError> {
        let client = HttpWebhookClient::new(&config.webhook)?;
        Ok(Self::new(
            config.widget.site_name.clone(),
            config.webhook.clone(),
            Box::new(client),
        ))
    }

    pub fn is_configured(&self) -> bool {
        self.webhook.is_configured()
    }

    /// Build the outbound payload for an already-trimmed message.
    pub fn build_payload(&self, message: &str, extra: &Map<String, Value>) -> WebhookPayload {
        WebhookPayload::new(message, &self.site_name, &self.webhook.metadata, extra, Utc::now())
    }

    /// Trim `message` and POST it to the webhook.
    ///
    /// Empty input is rejected before any network traffic.
    pub async fn send_message(
        &self,
        message: &str,
        extra: &Map<String, Value>,
    ) -> Result<WebhookResponse, RelayError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(RelayError::EmptyMessage);
        }

        let payload = serde_json::to_value(self.build_payload(message, extra))
            .map_err(TransportError::from)?;

        let resp = self
            .client
            .post_json(&self.webhook.url, &payload)
            .await
            .inspect_err(|e| warn!(error = %e, "webhook relay failed"))?;

        info!(
            status = resp.status,
            chars = message.chars().count(),
            "message relayed to webhook"
        );
        Ok(resp)
    }
}
