use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// A required field is missing from the request.
    Validation(&'static str),
    /// The store rejected a write; the message goes back to the caller.
    Persistence(sqlx::Error),
    /// The store failed a read.
    Query(sqlx::Error),
    Upload(std::io::Error),
    Multipart(MultipartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            AppError::Persistence(e) => {
                tracing::error!("Persistence error: {e}");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Query(e) => {
                tracing::error!("Query error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Upload(e) => {
                tracing::error!("Upload error: {e}");
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Multipart(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Upload(e)
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Multipart(e)
    }
}
