use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": message, "code": CODE }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be read as the expected JSON shape.
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Json(rejection) => classify_json_rejection(rejection),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// No request looks a row up by key, so every database error is a 500 with
/// a sanitized message; the detail only goes to the log.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a JSON body rejection.
///
/// Unparsable JSON and missing or wrong-typed fields are all validation
/// errors (422). Other rejections keep the status axum assigns, e.g. 415
/// for a non-JSON `Content-Type`.
fn classify_json_rejection(rejection: &JsonRejection) -> (StatusCode, &'static str, String) {
    let status = match rejection {
        JsonRejection::JsonSyntaxError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        other => other.status(),
    };
    let code = match status {
        StatusCode::UNPROCESSABLE_ENTITY => "VALIDATION_ERROR",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        s if s.is_server_error() => "INTERNAL_ERROR",
        _ => "BAD_REQUEST",
    };
    (status, code, rejection.body_text())
}
