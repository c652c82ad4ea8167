pub mod api;
pub mod app;
pub mod support;

use askama::Template;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::response::Html;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

use crate::application::errors::{AppError, map_app_error};
use crate::application::state::AppState;

use crate::presentation::web::templates::render_template;

/// Upper bound for form and JSON share payloads.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn app_router(state: AppState) -> axum::Router {
    let routes = axum::Router::new()
        .merge(app::router())
        .nest("/api/v1", api::router());

    // Serve under the public URL's path when it has one.
    let routes = match state.paths.base() {
        "" => routes,
        base => axum::Router::new().nest(base, routes),
    };

    routes
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(NotedropMakeSpan)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    axum::http::header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(
                        "default-src 'self'; \
                         script-src 'self'; \
                         style-src 'self' https://fonts.googleapis.com; \
                         font-src 'self' https://fonts.gstatic.com; \
                         img-src 'self' data: https://*.scdn.co https://*.spotifycdn.com; \
                         frame-src https://open.spotify.com; \
                         frame-ancestors 'none'",
                    ),
                ))
                .layer(CompressionLayer::new().gzip(true)),
        )
        .with_state(state)
}

#[derive(Clone)]
struct NotedropMakeSpan;

impl<B> MakeSpan<B> for NotedropMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        // Path only: share links carry the note in the query string.
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            version = ?request.version(),
        )
    }
}

pub(crate) fn render_html<T: Template>(template: T) -> Result<Html<String>, StatusCode> {
    render_template(template).map(Html).map_err(|err| {
        map_app_error(AppError::unexpected(format!(
            "failed to render template: {err}"
        )))
    })
}
