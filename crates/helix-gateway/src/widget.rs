//! Server-rendered widget markup.
//!
//! The widget is a self-contained block of HTML plus `/css/chatbot.css` and
//! `/js/chatbot.js`. The script reads its endpoint and site name from the
//! root element's `data-*` attributes.

use helix_core::config::WidgetConfig;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the embeddable chat widget.
pub fn render_widget(site_name: &str, endpoint: &str) -> String {
    let site = escape_html(site_name);
    let endpoint = escape_html(endpoint);

    format!(
        r##"<link rel="stylesheet" href="/css/chatbot.css">
<div id="chatbot-plugin" class="chatbot-widget" data-endpoint="{endpoint}" data-site-name="{site}">
    <button class="chatbot-toggle" type="button" aria-expanded="false" aria-label="Toggle chat with {site}">
        <span class="chatbot-toggle-icon" aria-hidden="true">
            <span class="chatbot-toggle-avatar">&#129302;</span>
            <span class="chatbot-toggle-badge">Ask</span>
        </span>
        <span class="chatbot-toggle-status"><span class="chatbot-status-dot" aria-hidden="true"></span>Online</span>
    </button>
    <div class="chatbot-window" aria-hidden="true">
        <header class="chatbot-header" data-drag-handle>
            <div class="chatbot-header-brand">
                <span class="chatbot-avatar" aria-hidden="true">&#129302;</span>
                <div class="chatbot-header-text">
                    <span class="chatbot-title">{site}</span>
                    <span class="chatbot-subtitle"><span class="chatbot-status-dot" aria-hidden="true"></span>Online &middot; Always ready to help</span>
                </div>
            </div>
            <button type="button" class="chatbot-close" aria-label="Close chat"><span aria-hidden="true">&times;</span></button>
        </header>
        <div class="chatbot-window-body">
            <div class="chatbot-messages" role="log" aria-live="polite"></div>
        </div>
        <form class="chatbot-form" novalidate>
            <label class="visually-hidden" for="chatbot-input">Type your message</label>
            <div class="chatbot-input">
                <textarea id="chatbot-input" name="message" rows="2" placeholder="Type your message here..." required></textarea>
                <button type="submit" class="chatbot-submit" aria-label="Send message"><span aria-hidden="true">&#10148;</span></button>
            </div>
            <div class="chatbot-status" role="status" aria-live="polite"></div>
        </form>
    </div>
</div>
<script src="/js/chatbot.js" defer></script>
"##
    )
}

/// Render the demo landing page with the widget embedded.
pub fn render_page(widget: &WidgetConfig) -> String {
    let title = escape_html(&widget.site_name);
    let body = render_widget(&widget.site_name, &widget.endpoint);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body class="helix-demo">
    <main class="helix-hero">
        <h1>Embed an automation-ready chatbot anywhere</h1>
        <p>Open the chat bubble to send a message. Each message is forwarded to the configured automation webhook and the reply is shown here.</p>
        <p>Set the webhook with <code>HELIX_WEBHOOK__URL</code> or <code>[webhook] url</code> in <code>helix.toml</code>.</p>
    </main>
{body}</body>
</html>
"#
    )
}
