use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

/// Display metadata for a shared track, as reported by an oEmbed provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,
}

/// Source of track metadata. Lookups are best effort: `None` means "render
/// without a preview", whatever the reason.
#[async_trait]
pub trait TrackMetadataProvider: Send + Sync {
    async fn lookup(&self, track: &Url) -> Option<TrackMetadata>;
}
