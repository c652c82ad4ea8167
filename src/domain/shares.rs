use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use url::form_urlencoded;

use super::spotify::spotify_code_url;

/// Path of the page that displays a shared note.
pub const PLAY_PATH: &str = "play";

/// Raw share input as submitted by a form, a JSON body or a query string.
///
/// Both fields default to empty so a missing parameter and a blank one are
/// reported the same way by [`ShareRequest::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareRequest {
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("a Spotify track URL is required")]
    MissingTrack,
    #[error("a note is required")]
    MissingNote,
    #[error("track is not a valid URL: {0}")]
    InvalidTrackUrl(String),
    #[error("track URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

impl ShareError {
    /// True when the request simply lacked one of the two fields.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ShareError::MissingTrack | ShareError::MissingNote)
    }
}

/// A generated share link, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub url: String,
    pub track: String,
    pub note: String,
    pub spotify_code_url: String,
}

/// A validated share: an http(s) track URL plus a non-empty note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    track: Url,
    note: String,
}

impl ShareRequest {
    pub fn new(track: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            note: note.into(),
        }
    }

    /// Read `track` and `note` from a raw query string. Repeated parameters
    /// keep their first value, as browsers' `URLSearchParams::get` does.
    pub fn from_query(query: &str) -> Self {
        Self {
            track: first_query_value(query, "track").unwrap_or_default(),
            note: first_query_value(query, "note").unwrap_or_default(),
        }
    }

    pub fn validate(self) -> Result<Share, ShareError> {
        let track = self.track.trim();
        let note = self.note.trim();

        if track.is_empty() {
            return Err(ShareError::MissingTrack);
        }
        if note.is_empty() {
            return Err(ShareError::MissingNote);
        }

        Ok(Share {
            track: parse_track(track)?,
            note: note.to_string(),
        })
    }
}

/// First value of `name` in a form-urlencoded query string.
pub fn first_query_value(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Parse a track URL the way a `type="url"` input would accept it, further
/// limited to http(s) since it ends up as a link target.
pub fn parse_track(value: &str) -> Result<Url, ShareError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ShareError::MissingTrack);
    }

    let track = Url::parse(value).map_err(|err| ShareError::InvalidTrackUrl(err.to_string()))?;
    if !matches!(track.scheme(), "http" | "https") {
        return Err(ShareError::UnsupportedScheme(track.scheme().to_string()));
    }
    Ok(track)
}

impl Share {
    pub fn track(&self) -> &Url {
        &self.track
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// `track=<enc>&note=<enc>`, form-urlencoded.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("track", self.track.as_str())
            .append_pair("note", &self.note)
            .finish()
    }

    /// Link to the play page under `origin`, keeping any path prefix the
    /// origin carries.
    pub fn play_url(&self, origin: &Url) -> Url {
        let base = origin.path().trim_end_matches('/');
        let mut url = origin.clone();
        url.set_path(&format!("{base}/{PLAY_PATH}"));
        url.set_fragment(None);
        url.set_query(Some(&self.query_string()));
        url
    }

    pub fn spotify_code_url(&self) -> String {
        spotify_code_url(&self.track)
    }

    pub fn link(&self, origin: &Url) -> ShareLink {
        ShareLink {
            url: self.play_url(origin).into(),
            track: self.track.to_string(),
            note: self.note.clone(),
            spotify_code_url: self.spotify_code_url(),
        }
    }
}
