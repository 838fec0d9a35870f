use std::time::Duration;

use async_trait::async_trait;
use helix_core::config::{WebhookAuthMode, WebhookConfig};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::TransportError;
use crate::response::WebhookResponse;
use crate::sign::{sign_body, SIGNATURE_HEADER};

/// Anything that can POST a JSON document and hand back the raw answer.
///
/// Non-2xx answers are still `Ok`; only failures to get an answer at all
/// are errors.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<WebhookResponse, TransportError>;
}

/// reqwest-backed client with a request timeout and optional outbound auth.
pub struct HttpWebhookClient {
    client: reqwest::Client,
    auth_mode: WebhookAuthMode,
    secret: Option<String>,
    timeout: Duration,
}

impl HttpWebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self, TransportError> {
        if config.auth_mode != WebhookAuthMode::None && config.secret.is_none() {
            return Err(TransportError::Client(format!(
                "auth mode {:?} needs a secret",
                config.auth_mode
            )));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            auth_mode: config.auth_mode.clone(),
            secret: config.secret.clone(),
            timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                ms: self.timeout.as_millis() as u64,
            }
        } else {
            TransportError::Http(err)
        }
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<WebhookResponse, TransportError> {
        if url.trim().is_empty() {
            return Err(TransportError::NotConfigured);
        }

        let body = serde_json::to_vec(payload)?;
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        match (&self.auth_mode, self.secret.as_deref()) {
            (WebhookAuthMode::BearerToken, Some(token)) => {
                request = request.bearer_auth(token);
            }
            (WebhookAuthMode::HmacSha256, Some(secret)) => {
                request = request.header(SIGNATURE_HEADER, sign_body(secret, &body)?);
            }
            _ => {}
        }

        debug!(url = %url, bytes = body.len(), "posting to webhook");

        let resp = request
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| self.classify(e))?;

        if !(200..300).contains(&status) {
            warn!(status, "webhook answered with non-success status");
        }
        debug!(status, bytes = text.len(), "webhook answered");

        Ok(WebhookResponse::new(status, text))
    }
}
