pub mod shares;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};
use shares::{LinkCommand, PreviewCommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Share a Spotify track with a heartfelt note", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "NOTEDROP_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Generate a share link for a track and a note
    Link(LinkCommand),

    /// Show the metadata a recipient would see for a track
    Preview(PreviewCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "NOTEDROP_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    /// Public origin used when building share links
    #[arg(
        long,
        env = "NOTEDROP_PUBLIC_URL",
        default_value = "http://localhost:3000"
    )]
    pub public_url: String,

    #[arg(
        long,
        env = "NOTEDROP_OEMBED_URL",
        default_value = crate::infrastructure::oembed::SPOTIFY_OEMBED_URL
    )]
    pub oembed_url: String,

    #[arg(long, env = "NOTEDROP_OEMBED_TIMEOUT_SECS", default_value_t = 5)]
    pub oembed_timeout_secs: u64,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
