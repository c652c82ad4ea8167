use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use url::Url;

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub public_url: String,
    pub oembed_url: String,
    pub oembed_timeout: Duration,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let public_url =
        Url::parse(&config.public_url).context("invalid NOTEDROP_PUBLIC_URL URL")?;
    let oembed_url = Url::parse(&config.oembed_url).context("invalid NOTEDROP_OEMBED_URL URL")?;

    let state = AppState::new(AppStateConfig {
        public_url,
        oembed_url,
        oembed_timeout: config.oembed_timeout,
    });

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(
        address = %config.bind_address,
        public_url = %config.public_url,
        oembed_url = %config.oembed_url,
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
