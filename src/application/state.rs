use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::application::services::ShareService;
use crate::domain::metadata::TrackMetadataProvider;
use crate::infrastructure::oembed::OEmbedClient;
use crate::presentation::web::SitePaths;

/// Everything that varies between production and test environments.
pub struct AppStateConfig {
    /// Origin that share links point at.
    pub public_url: Url,
    pub oembed_url: Url,
    pub oembed_timeout: Duration,
}

#[derive(Clone)]
pub struct AppState {
    pub share_service: ShareService,
    pub paths: SitePaths,
}

impl AppState {
    /// Build the application state, wiring the oEmbed provider into the
    /// share service.
    pub fn new(config: AppStateConfig) -> Self {
        #[allow(clippy::expect_used)]
        let http_client = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        let metadata_provider: Arc<dyn TrackMetadataProvider> = Arc::new(OEmbedClient::new(
            http_client,
            config.oembed_url,
            config.oembed_timeout,
        ));

        Self {
            paths: SitePaths::from_public_url(&config.public_url),
            share_service: ShareService::new(config.public_url, metadata_provider),
        }
    }
}
