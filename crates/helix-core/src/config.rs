use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HelixError, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_SITE_NAME: &str = "Site Chatbot";
pub const DEFAULT_ENDPOINT: &str = "/chatbot-endpoint";
pub const DEFAULT_FALLBACK_REPLY: &str = "The workflow has received your request.";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;

/// Legacy variable still honoured for the webhook URL.
pub const LEGACY_WEBHOOK_ENV: &str = "CHATBOT_WEBHOOK_URL";

/// Top-level config (helix.toml + HELIX_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelixConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Origins allowed to call the chat endpoint cross-site.
    /// Empty means no CORS headers are emitted.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

/// What the embedded widget shows and where it posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Route the widget POSTs chat messages to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Shown when the webhook answer contains no usable reply text.
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            endpoint: default_endpoint(),
            fallback_reply: default_fallback_reply(),
        }
    }
}

/// Authentication attached to outbound webhook requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WebhookAuthMode {
    /// No authentication header.
    #[default]
    None,
    /// Static bearer token in the Authorization header.
    BearerToken,
    /// HMAC-SHA256 over the raw request body, sent as `X-Helix-Signature-256`.
    HmacSha256,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Automation endpoint that receives chat messages. Empty = not configured.
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_webhook_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub auth_mode: WebhookAuthMode,
    /// Bearer token or HMAC key, depending on `auth_mode`.
    pub secret: Option<String>,
    /// Extra entries merged into every outbound `metadata` object.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: DEFAULT_WEBHOOK_TIMEOUT_SECS,
            auth_mode: WebhookAuthMode::None,
            secret: None,
            metadata: Map::new(),
        }
    }
}

impl WebhookConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_fallback_reply() -> String {
    DEFAULT_FALLBACK_REPLY.to_string()
}
fn default_webhook_timeout() -> u64 {
    DEFAULT_WEBHOOK_TIMEOUT_SECS
}

impl HelixConfig {
    /// Load config from a TOML file with env var overrides.
    ///
    /// Sources, later ones winning:
    ///   1. explicit path, or ~/.helix/helix.toml
    ///   2. HELIX_* variables, nested with `__` (HELIX_WEBHOOK__URL)
    ///   3. CHATBOT_WEBHOOK_URL
    ///
    /// Every field has a default, so a missing file is not an error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let figment = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("HELIX_").split("__"))
            .merge(
                Env::raw()
                    .only(&[LEGACY_WEBHOOK_ENV])
                    .map(|_| "webhook.url".into()),
            );

        Self::from_figment(figment)
    }

    /// Extract and validate from an already-assembled figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: HelixConfig = figment
            .extract()
            .map_err(|e| HelixError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.widget.endpoint.starts_with('/') {
            return Err(HelixError::Config(format!(
                "widget.endpoint must start with '/', got {:?}",
                self.widget.endpoint
            )));
        }
        if self.webhook.timeout_secs == 0 {
            return Err(HelixError::Config(
                "webhook.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.webhook.auth_mode != WebhookAuthMode::None
            && self.webhook.secret.as_deref().map_or(true, str::is_empty)
        {
            return Err(HelixError::Config(format!(
                "webhook.auth_mode {:?} requires webhook.secret",
                self.webhook.auth_mode
            )));
        }
        Ok(())
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.helix/helix.toml", home)
}
