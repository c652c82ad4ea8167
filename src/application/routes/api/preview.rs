use axum::Json;
use axum::extract::{RawQuery, State};

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;
use crate::domain::metadata::TrackMetadata;
use crate::domain::shares::first_query_value;

#[tracing::instrument(skip(state))]
pub(crate) async fn preview_track(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<TrackMetadata>, ApiError> {
    let track = query
        .as_deref()
        .and_then(|query| first_query_value(query, "track"))
        .unwrap_or_default();

    state
        .share_service
        .preview(&track)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("no metadata available for this track").into())
}
