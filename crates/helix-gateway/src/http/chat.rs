//! Widget chat endpoint: POST <widget.endpoint> (default /chatbot-endpoint)
//!
//! Request:  `{"message": "hello"}`, or form-encoded `message=hello`
//! Response: `{"status": "ok", "reply": "...", "message": "...", "webhookStatus": 200, "payload": {...}}`
//! Error:    `{"status": "error", "message": "..."}` with 422 or 500
//!
//! `payload` is the sanitized structured fragment from the webhook answer,
//! never the raw body.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use helix_webhook::RelayError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::app::AppState;

pub const EMPTY_MESSAGE_ERROR: &str = "Please include a chat message.";
pub const RELAY_FAILURE_ERROR: &str =
    "We were unable to forward your request to the automation workflow.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub status: &'static str,
    pub reply: String,
    /// Same text as `reply`, for widgets that read `message`.
    pub message: String,
    pub webhook_status: u16,
    pub payload: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatError {
    pub status: &'static str,
    pub message: String,
}

impl ChatError {
    fn new(message: &str) -> Self {
        Self {
            status: "error",
            message: message.to_string(),
        }
    }
}

/// POST <widget.endpoint>: relay one chat message and summarise the answer.
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatReply>, (StatusCode, Json<ChatError>)> {
    let request_id = Uuid::new_v4();
    let message = read_message(&body);

    if message.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ChatError::new(EMPTY_MESSAGE_ERROR)),
        ));
    }

    let mut extra = Map::new();
    extra.insert("transport".to_string(), Value::from("web"));

    let resp = match state.relay.send_message(&message, &extra).await {
        Ok(resp) => resp,
        Err(RelayError::EmptyMessage) => {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ChatError::new(EMPTY_MESSAGE_ERROR)),
            ));
        }
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "POST chat relay failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatError::new(RELAY_FAILURE_ERROR)),
            ));
        }
    };

    let result = helix_extract::extract(&resp.json(), &state.config.widget.fallback_reply);

    info!(
        request_id = %request_id,
        webhook_status = resp.status,
        reply_chars = result.summary.chars().count(),
        structured = result.structured.is_some(),
        "chat reply ready"
    );

    Ok(Json(ChatReply {
        status: if resp.is_success() { "ok" } else { "error" },
        reply: result.summary.clone(),
        message: result.summary,
        webhook_status: resp.status,
        payload: result.structured,
    }))
}

/// Pull the trimmed `message` field from a JSON object body, falling back
/// to form encoding when the body is not a JSON object.
///
/// Only string and number messages are read; booleans, null, arrays and
/// objects count as an empty message.
fn read_message(body: &[u8]) -> String {
    let raw = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => match fields.get("message") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        },
        _ => url::form_urlencoded::parse(body)
            .find(|(key, _)| key == "message")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default(),
    };
    raw.trim().to_string()
}
