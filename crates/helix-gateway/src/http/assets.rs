//! Widget script and stylesheet, embedded at compile time.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;

static CHATBOT_JS: &str = include_str!("../../static/chatbot.js");
static CHATBOT_CSS: &str = include_str!("../../static/chatbot.css");

const CACHE_POLICY: &str = "public, max-age=3600";

/// GET /js/chatbot.js
pub async fn script_handler() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (CACHE_CONTROL, CACHE_POLICY),
        ],
        CHATBOT_JS,
    )
}

/// GET /css/chatbot.css
pub async fn style_handler() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, CACHE_POLICY),
        ],
        CHATBOT_CSS,
    )
}
