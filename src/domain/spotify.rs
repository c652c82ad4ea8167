use std::fmt;

use url::Url;
use url::form_urlencoded;

const SCANNABLES_BASE: &str = "https://scannables.scdn.co/uri/plain/png/white/black/640/";
const EMBED_BASE: &str = "https://open.spotify.com/embed/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyKind {
    Track,
    Album,
    Playlist,
    Artist,
    Episode,
    Show,
}

impl SpotifyKind {
    fn from_segment(value: &str) -> Option<Self> {
        match value {
            "track" => Some(SpotifyKind::Track),
            "album" => Some(SpotifyKind::Album),
            "playlist" => Some(SpotifyKind::Playlist),
            "artist" => Some(SpotifyKind::Artist),
            "episode" => Some(SpotifyKind::Episode),
            "show" => Some(SpotifyKind::Show),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpotifyKind::Track => "track",
            SpotifyKind::Album => "album",
            SpotifyKind::Playlist => "playlist",
            SpotifyKind::Artist => "artist",
            SpotifyKind::Episode => "episode",
            SpotifyKind::Show => "show",
        }
    }

    /// Spotify Codes are only generated for these kinds.
    fn has_code(self) -> bool {
        matches!(
            self,
            SpotifyKind::Track | SpotifyKind::Album | SpotifyKind::Playlist
        )
    }
}

impl fmt::Display for SpotifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource addressed by an `open.spotify.com` web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyResource {
    pub kind: SpotifyKind,
    pub id: String,
}

impl SpotifyResource {
    /// Parse `/<kind>/<id>`, allowing a leading `intl-xx` locale segment.
    pub fn from_url(url: &Url) -> Option<Self> {
        if url.host_str() != Some("open.spotify.com") {
            return None;
        }

        let mut segments = url.path_segments()?.filter(|s| !s.is_empty()).peekable();
        if segments.peek().is_some_and(|s| s.starts_with("intl-")) {
            segments.next();
        }

        let kind = SpotifyKind::from_segment(segments.next()?)?;
        let id = segments.next()?;
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        Some(Self {
            kind,
            id: id.to_string(),
        })
    }

    pub fn uri(&self) -> String {
        format!("spotify:{}:{}", self.kind, self.id)
    }

    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE}{}/{}", self.kind, self.id)
    }
}

/// Image URL of the scannable Spotify Code for `track`.
///
/// Tracks, albums and playlists are encoded by URI; anything else falls back
/// to the encoded URL itself.
pub fn spotify_code_url(track: &Url) -> String {
    match SpotifyResource::from_url(track).filter(|r| r.kind.has_code()) {
        Some(resource) => format!("{SCANNABLES_BASE}{}", resource.uri()),
        None => {
            let encoded: String = form_urlencoded::byte_serialize(track.as_str().as_bytes()).collect();
            format!("{SCANNABLES_BASE}{encoded}")
        }
    }
}
