use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

mod app;
mod http;
mod widget;

/// Webchat relay: serves the chat widget and forwards messages to an
/// automation webhook.
#[derive(Debug, Parser)]
#[command(name = "helix-gateway", version, about)]
struct Args {
    /// Path to helix.toml (default: $HELIX_CONFIG, then ~/.helix/helix.toml).
    #[arg(short, long, env = "HELIX_CONFIG")]
    config: Option<String>,

    /// Override gateway.bind.
    #[arg(long)]
    bind: Option<String>,

    /// Override gateway.port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "helix_gateway=info,helix_webhook=info,tower_http=debug".into()
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = helix_core::HelixConfig::load(args.config.as_deref()).unwrap_or_else(|e| {
        warn!("Config load failed ({}), using defaults", e);
        helix_core::HelixConfig::default()
    });
    if let Some(bind) = args.bind {
        config.gateway.bind = bind;
    }
    if let Some(port) = args.port {
        config.gateway.port = port;
    }

    if config.webhook.is_configured() {
        info!(
            url = %config.webhook.url,
            timeout_secs = config.webhook.timeout_secs,
            auth_mode = ?config.webhook.auth_mode,
            "webhook configured"
        );
    } else {
        warn!("No webhook URL configured; chat messages will fail until webhook.url is set");
    }

    let relay = helix_webhook::ChatRelay::from_config(&config)?;
    let addr: SocketAddr = format!("{}:{}", config.gateway.bind, config.gateway.port).parse()?;
    let endpoint = config.widget.endpoint.clone();

    let state = Arc::new(app::AppState::new(config, relay));
    let router = app::build_router(state);

    info!(endpoint = %endpoint, "Helix gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Helix gateway stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
