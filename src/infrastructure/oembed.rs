use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::domain::metadata::{TrackMetadata, TrackMetadataProvider};

pub const SPOTIFY_OEMBED_URL: &str = "https://open.spotify.com/oembed";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!("notedrop/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum OEmbedError {
    #[error("oEmbed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("oEmbed provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse oEmbed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("oEmbed response has no title")]
    MissingTitle,
}

/// The subset of an oEmbed response that notedrop displays. Everything but
/// `title` is optional in the wild.
#[derive(Debug, Clone, Deserialize)]
pub struct OEmbedResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub thumbnail_width: Option<u32>,
    #[serde(default)]
    pub thumbnail_height: Option<u32>,
}

impl OEmbedResponse {
    pub fn into_metadata(self) -> Result<TrackMetadata, OEmbedError> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(OEmbedError::MissingTitle)?;

        // Only http(s) artwork ends up in an <img src>.
        let thumbnail_url = self.thumbnail_url.filter(|u| {
            Url::parse(u).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
        });
        let has_thumbnail = thumbnail_url.is_some();

        Ok(TrackMetadata {
            title,
            author_name: self.author_name.filter(|s| !s.trim().is_empty()),
            provider_name: self.provider_name.filter(|s| !s.trim().is_empty()),
            thumbnail_url,
            thumbnail_width: self.thumbnail_width.filter(|_| has_thumbnail),
            thumbnail_height: self.thumbnail_height.filter(|_| has_thumbnail),
        })
    }
}

#[derive(Clone)]
pub struct OEmbedClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl OEmbedClient {
    pub fn new(http: reqwest::Client, endpoint: Url, timeout: Duration) -> Self {
        Self {
            http,
            endpoint,
            timeout,
        }
    }

    fn request_url(&self, track: &Url) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("url", track.as_str())
            .append_pair("format", "json");
        url
    }

    pub async fn fetch(&self, track: &Url) -> Result<OEmbedResponse, OEmbedError> {
        let response = self
            .http
            .get(self.request_url(track))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OEmbedError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl TrackMetadataProvider for OEmbedClient {
    async fn lookup(&self, track: &Url) -> Option<TrackMetadata> {
        let result = self.fetch(track).await.and_then(OEmbedResponse::into_metadata);
        match result {
            Ok(metadata) => {
                debug!(track = %track, title = %metadata.title, "fetched track metadata");
                Some(metadata)
            }
            Err(err) => {
                warn!(track = %track, error = %err, "track metadata unavailable");
                None
            }
        }
    }
}
