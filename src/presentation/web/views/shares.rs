use crate::application::services::OpenedShare;
use crate::domain::shares::ShareLink;

/// Fallback artwork edge length when the provider omits dimensions.
const DEFAULT_THUMBNAIL_SIZE: u32 = 300;

pub struct ShareLinkView {
    pub url: String,
    pub spotify_code_url: String,
}

impl From<ShareLink> for ShareLinkView {
    fn from(link: ShareLink) -> Self {
        Self {
            url: link.url,
            spotify_code_url: link.spotify_code_url,
        }
    }
}

pub struct PlayView {
    pub note: String,
    pub track_url: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub provider: String,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
    pub embed_url: Option<String>,
    pub spotify_uri: Option<String>,
    pub spotify_code_url: String,
}

impl PlayView {
    pub fn from_opened(opened: OpenedShare) -> Self {
        let OpenedShare {
            share,
            metadata,
            spotify,
            spotify_code_url,
        } = opened;

        let (title, artist, provider, thumbnail_url, thumbnail_width, thumbnail_height) =
            match metadata {
                Some(meta) => (
                    Some(meta.title),
                    meta.author_name,
                    meta.provider_name,
                    meta.thumbnail_url,
                    meta.thumbnail_width,
                    meta.thumbnail_height,
                ),
                None => (None, None, None, None, None, None),
            };

        Self {
            note: share.note().to_string(),
            track_url: share.track().to_string(),
            title,
            artist,
            provider: provider.unwrap_or_else(|| "Spotify".to_string()),
            thumbnail_url,
            thumbnail_width: thumbnail_width.unwrap_or(DEFAULT_THUMBNAIL_SIZE),
            thumbnail_height: thumbnail_height.unwrap_or(DEFAULT_THUMBNAIL_SIZE),
            embed_url: spotify.as_ref().map(|s| s.embed_url()),
            spotify_uri: spotify.as_ref().map(|s| s.uri()),
            spotify_code_url,
        }
    }

    pub fn has_preview(&self) -> bool {
        self.title.is_some()
    }
}
