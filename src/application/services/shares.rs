use std::sync::Arc;

use tracing::info;
use url::Url;

use crate::domain::metadata::{TrackMetadata, TrackMetadataProvider};
use crate::application::errors::AppError;
use crate::domain::shares::{Share, ShareLink, ShareRequest, parse_track};
use crate::domain::spotify::SpotifyResource;

/// A share ready to be displayed, with whatever metadata could be found.
#[derive(Debug, Clone)]
pub struct OpenedShare {
    pub share: Share,
    pub metadata: Option<TrackMetadata>,
    pub spotify: Option<SpotifyResource>,
    pub spotify_code_url: String,
}

#[derive(Clone)]
pub struct ShareService {
    public_url: Url,
    metadata: Arc<dyn TrackMetadataProvider>,
}

impl ShareService {
    pub fn new(public_url: Url, metadata: Arc<dyn TrackMetadataProvider>) -> Self {
        Self {
            public_url,
            metadata,
        }
    }

    pub fn public_url(&self) -> &Url {
        &self.public_url
    }

    pub fn create(&self, request: ShareRequest) -> Result<ShareLink, AppError> {
        let share = request.validate()?;
        let link = share.link(&self.public_url);
        info!(track = %share.track(), note_len = share.note().len(), "generated share link");
        Ok(link)
    }

    pub async fn open(&self, request: ShareRequest) -> Result<OpenedShare, AppError> {
        let share = request.validate()?;
        let metadata = self.metadata.lookup(share.track()).await;

        Ok(OpenedShare {
            spotify: SpotifyResource::from_url(share.track()),
            spotify_code_url: share.spotify_code_url(),
            metadata,
            share,
        })
    }

    pub async fn preview(&self, track: &str) -> Result<Option<TrackMetadata>, AppError> {
        let track = parse_track(track)?;
        Ok(self.metadata.lookup(&track).await)
    }
}
