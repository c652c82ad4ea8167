pub(crate) mod links;
pub(crate) mod preview;

use axum::routing::{get, post};

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/links", post(links::create_link))
        .route("/preview", get(preview::preview_track))
}
