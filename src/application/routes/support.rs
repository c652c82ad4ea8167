use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use tracing::warn;

use crate::application::errors::{ApiError, AppError};

/// Request body accepted either as JSON or as an urlencoded form. A body
/// without a content type is read as a form.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: Send + 'static,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            return Json::<T>::from_request(req, state)
                .await
                .map(|Json(body)| Self(body))
                .map_err(|rejection| {
                    warn!(error = %rejection.body_text(), "rejected JSON share payload");
                    AppError::validation("invalid JSON payload").into()
                });
        }

        if content_type.is_empty() || content_type.starts_with("application/x-www-form-urlencoded")
        {
            return Form::<T>::from_request(req, state)
                .await
                .map(|Form(body)| Self(body))
                .map_err(|rejection| {
                    warn!(error = %rejection.body_text(), "rejected form share payload");
                    AppError::validation("invalid form payload").into()
                });
        }

        Err(AppError::validation(format!("unsupported content type: {content_type}")).into())
    }
}
