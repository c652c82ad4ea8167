use anyhow::{Result, bail};
use clap::Args;

use super::print_json;
use crate::domain::shares::ShareRequest;
use crate::infrastructure::client::NotedropClient;

#[derive(Debug, Args)]
pub struct LinkCommand {
    /// Spotify track URL, e.g. https://open.spotify.com/track/...
    #[arg(long)]
    pub track: String,
    #[arg(long)]
    pub note: String,
    /// Open the generated link in the default browser
    #[arg(long)]
    pub open: bool,
}

pub async fn create_link(client: &NotedropClient, command: LinkCommand) -> Result<()> {
    let request = ShareRequest::new(command.track, command.note);
    let link = client.shares().create(&request).await?;
    print_json(&link)?;

    if command.open {
        open::that(&link.url)?;
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct PreviewCommand {
    #[arg(long)]
    pub track: String,
}

pub async fn preview_track(client: &NotedropClient, command: PreviewCommand) -> Result<()> {
    match client.shares().preview(&command.track).await? {
        Some(metadata) => print_json(&metadata),
        None => bail!("no preview available for {}", command.track),
    }
}
