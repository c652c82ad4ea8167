use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::info;

use crate::application::errors::{AppError, map_app_error};
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::shares::{ShareError, ShareRequest};
use crate::presentation::web::SitePaths;
use crate::presentation::web::templates::{MissingShareTemplate, PlayTemplate, SHARED_SUBTITLE};
use crate::presentation::web::views::PlayView;

#[tracing::instrument(skip(state, query))]
pub(crate) async fn play_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, StatusCode> {
    let request = ShareRequest::from_query(query.as_deref().unwrap_or_default());

    match state.share_service.open(request).await {
        Ok(opened) => {
            let template = PlayTemplate {
                version: crate::VERSION,
                paths: state.paths.clone(),
                subtitle: SHARED_SUBTITLE,
                play: PlayView::from_opened(opened),
            };
            render_html(template).map(IntoResponse::into_response)
        }
        Err(AppError::InvalidShare(err)) => {
            info!(error = %err, "cannot display share");
            render_html(missing_template(state.paths.clone(), &err))
                .map(|html| (StatusCode::BAD_REQUEST, html).into_response())
        }
        Err(err) => Err(map_app_error(err)),
    }
}

fn missing_template(paths: SitePaths, err: &ShareError) -> MissingShareTemplate {
    let (headline, detail) = if err.is_missing_field() {
        (
            "Missing track or note.".to_string(),
            "Please provide both track and note query parameters.".to_string(),
        )
    } else {
        (
            "That track link doesn't look right.".to_string(),
            format!("{err}."),
        )
    };

    MissingShareTemplate {
        version: crate::VERSION,
        paths,
        headline,
        detail,
    }
}
