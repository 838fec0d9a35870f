use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use helix_core::config::HelixConfig;
use helix_webhook::ChatRelay;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Central shared state; passed as Arc<AppState> to all Axum handlers.
/// Immutable after startup.
pub struct AppState {
    pub config: HelixConfig,
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(config: HelixConfig, relay: ChatRelay) -> Self {
        Self { config, relay }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.gateway.cors_origins);

    let router = Router::new()
        .route("/", get(crate::http::ui::page_handler))
        .route("/widget", get(crate::http::ui::widget_handler))
        .route("/js/chatbot.js", get(crate::http::assets::script_handler))
        .route("/css/chatbot.css", get(crate::http::assets::style_handler))
        .route("/health", get(crate::http::health::health_handler))
        .route(
            &state.config.widget.endpoint,
            post(crate::http::chat::chat_handler),
        )
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS for pages embedding the widget from another origin.
/// Unparseable origins are skipped with a warning.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]),
    )
}


#[cfg(test)]
mod tests {
    use super::test_support::router_with;
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn get_path(router: Router, path: &str) -> (StatusCode, String, String) {
        let resp = router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn landing_page_embeds_widget() {
        let (router, _) = router_with(None);
        let (status, content_type, body) = get_path(router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains(r#"data-endpoint="/chatbot-endpoint""#));
        assert!(body.contains("Demo Site"));
    }

    #[tokio::test]
    async fn widget_fragment_is_served() {
        let (router, _) = router_with(None);
        let (status, _, body) = get_path(router, "/widget").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<link"));
    }

    #[tokio::test]
    async fn static_assets_have_content_types() {
        let (router, _) = router_with(None);
        let (status, content_type, body) = get_path(router.clone(), "/js/chatbot.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/javascript"));
        assert!(body.contains("chatbot-plugin"));

        let (status, content_type, _) = get_path(router, "/css/chatbot.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/css"));
    }

    #[tokio::test]
    async fn health_reports_webhook_configuration() {
        let (router, _) = router_with(None);
        let (status, _, body) = get_path(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["webhook_configured"], true);
    }

    #[tokio::test]
    async fn chat_endpoint_rejects_get() {
        let (router, _) = router_with(None);
        let (status, _, _) = get_path(router, "/chatbot-endpoint").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn cors_is_off_without_origins() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_none());
        assert!(cors_layer(&["https://shop.example.com".to_string()]).is_some());
    }
}
