use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::info;

use crate::application::errors::{AppError, map_app_error};
use crate::application::routes::render_html;
use crate::application::state::AppState;
use crate::domain::shares::ShareRequest;
use crate::presentation::web::templates::{ComposeTemplate, SHARED_SUBTITLE};
use crate::presentation::web::views::ShareLinkView;

#[tracing::instrument(skip(state))]
pub(crate) async fn compose_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    render_html(ComposeTemplate::empty(state.paths.clone())).map(IntoResponse::into_response)
}

/// Form submit: re-render the form with the inputs kept, plus either the
/// share panel or the validation error.
#[tracing::instrument(skip(state, request))]
pub(crate) async fn generate_link(
    State(state): State<AppState>,
    Form(request): Form<ShareRequest>,
) -> Result<Response, StatusCode> {
    let mut template = ComposeTemplate {
        track: request.track.clone(),
        note: request.note.clone(),
        ..ComposeTemplate::empty(state.paths.clone())
    };

    match state.share_service.create(request) {
        Ok(link) => {
            template.subtitle = SHARED_SUBTITLE;
            template.link = Some(ShareLinkView::from(link));
            render_html(template).map(IntoResponse::into_response)
        }
        Err(AppError::InvalidShare(err)) => {
            info!(error = %err, "rejected share form");
            template.error = Some(err.to_string());
            render_html(template)
                .map(|html| (StatusCode::UNPROCESSABLE_ENTITY, html).into_response())
        }
        Err(err) => Err(map_app_error(err)),
    }
}
