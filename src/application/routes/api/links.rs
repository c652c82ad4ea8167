use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::application::errors::ApiError;
use crate::application::routes::support::JsonOrForm;
use crate::application::state::AppState;
use crate::domain::shares::{ShareLink, ShareRequest};

#[tracing::instrument(skip(state, request))]
pub(crate) async fn create_link(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<ShareRequest>,
) -> Result<(StatusCode, Json<ShareLink>), ApiError> {
    let link = state.share_service.create(request)?;
    Ok((StatusCode::CREATED, Json(link)))
}
