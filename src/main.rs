use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use notedrop::application::{ServerConfig, serve};
use notedrop::infrastructure::client::NotedropClient;
use notedrop::presentation::cli::{Cli, Commands, ServeCommand, shares};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => run_server(cmd).await,
        Commands::Link(cmd) => {
            let client = NotedropClient::from_base_url(&cli.api_url)?;
            shares::create_link(&client, cmd).await
        }
        Commands::Preview(cmd) => {
            let client = NotedropClient::from_base_url(&cli.api_url)?;
            shares::preview_track(&client, cmd).await
        }
    }
}

async fn run_server(command: ServeCommand) -> Result<()> {
    let config = ServerConfig {
        bind_address: command.bind_address,
        public_url: command.public_url,
        oembed_url: command.oembed_url,
        oembed_timeout: Duration::from_secs(command.oembed_timeout_secs),
    };

    serve(config).await
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    // Logs go to stderr so CLI output on stdout stays machine-readable.
    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
