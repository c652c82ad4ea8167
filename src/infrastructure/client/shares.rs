use anyhow::Result;
use reqwest::StatusCode;

use super::NotedropClient;
use crate::domain::metadata::TrackMetadata;
use crate::domain::shares::{ShareLink, ShareRequest};

pub struct SharesClient<'a> {
    client: &'a NotedropClient,
}

impl<'a> SharesClient<'a> {
    pub fn new(client: &'a NotedropClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &ShareRequest) -> Result<ShareLink> {
        let url = self.client.endpoint("api/v1/links")?;
        let response = self
            .client
            .request(reqwest::Method::POST, url)
            .json(request)
            .send()
            .await?;
        self.client.handle_response(response).await
    }

    /// `Ok(None)` when the server has no metadata for `track`.
    pub async fn preview(&self, track: &str) -> Result<Option<TrackMetadata>> {
        let mut url = self.client.endpoint("api/v1/preview")?;
        url.query_pairs_mut().append_pair("track", track);

        let response = self
            .client
            .request(reqwest::Method::GET, url)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.client.handle_response(response).await.map(Some)
    }
}
