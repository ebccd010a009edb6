use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use validator::ValidationErrors;

/// API-facing error taxonomy. Every variant renders as `{"detail": message}`.
///
/// Background work (screenshot sync, artifact generators) deliberately does
/// NOT use this type: failures there are logged and swallowed instead of
/// surfaced. The two policies are distinct on purpose.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("{_0}")]
    NotFound(String),

    #[display("{_0}")]
    Validation(String),

    #[display("{_0}")]
    Database(String),
}

impl ApiError {
    pub fn not_found(resource: &str, identifier: &str) -> Self {
        ApiError::NotFound(format!("{resource} with id {identifier} not found"))
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Database row not found".to_string()),
            _ => ApiError::Database(format!("Database operation failed: {err}")),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
