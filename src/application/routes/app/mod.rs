mod compose;
mod play;

use axum::response::IntoResponse;
use axum::routing::get;

use crate::application::state::AppState;

/// Generate a static asset handler that serves an embedded file with cache headers.
macro_rules! static_asset_str {
    ($name:ident, $path:literal, $content_type:literal) => {
        async fn $name() -> impl IntoResponse {
            (
                [
                    ("content-type", $content_type),
                    ("cache-control", "public, max-age=604800"),
                ],
                include_str!($path),
            )
        }
    };
}

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route(
            "/",
            get(compose::compose_page).post(compose::generate_link),
        )
        .route("/play", get(play::play_page))
        .route("/static/css/styles.css", get(styles))
        .route("/static/js/share.js", get(share_js))
        .route("/static/logo.svg", get(logo))
        .route("/static/favicon.svg", get(favicon))
        .route("/health", get(health))
}

static_asset_str!(
    styles,
    "../../../../static/css/styles.css",
    "text/css; charset=utf-8"
);
static_asset_str!(
    share_js,
    "../../../../static/js/share.js",
    "application/javascript; charset=utf-8"
);
static_asset_str!(logo, "../../../../static/logo.svg", "image/svg+xml");
static_asset_str!(favicon, "../../../../static/favicon.svg", "image/svg+xml");

async fn health() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"{"status":"ok"}"#)
}
