use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::app::AppState;
use crate::widget;

/// GET /: demo landing page with the widget embedded.
pub async fn page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(widget::render_page(&state.config.widget))
}

/// GET /widget: bare widget markup for embedding into another page.
pub async fn widget_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(widget::render_widget(
        &state.config.widget.site_name,
        &state.config.widget.endpoint,
    ))
}
