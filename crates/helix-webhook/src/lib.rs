//! Message transport: relays chat text to the configured automation webhook.

pub mod client;
pub mod error;
pub mod payload;
pub mod relay;
pub mod response;
pub mod sign;

pub use client::{HttpWebhookClient, WebhookClient};
pub use error::{RelayError, TransportError};
pub use payload::WebhookPayload;
pub use relay::ChatRelay;
pub use response::WebhookResponse;
