use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Invalid reference: {message}")]
    InvalidReferenceError { message: String },

    #[error("Conflict: {message}")]
    ConflictError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Storage,
    Configuration,
    System,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } | ApiError::InvalidReferenceError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ConflictError { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::NotFound
            | ApiError::BadRequest { .. }
            | ApiError::InvalidReferenceError { .. }
            | ApiError::ConflictError { .. } => ErrorCategory::Client,
            ApiError::DatabaseError(_) => ErrorCategory::Storage,
            ApiError::ConfigError { .. }
            | ApiError::InvalidConfigValueError { .. }
            | ApiError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ApiError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給使用者看的訊息，不洩漏內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::DatabaseError(_) | ApiError::IoError(_) => {
                "internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "Check the request path and body",
            ErrorCategory::Storage => "Check that the database is reachable and the schema is up to date",
            ErrorCategory::Configuration => "Check the configuration file and command line flags",
            ErrorCategory::System => "Check file permissions and that the bind address is free",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// A path segment that is not a valid id matches no resource.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Unroutable path parameter: {}", rejection.body_text());
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 404 不帶 body
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        if status.is_server_error() {
            tracing::error!("❌ Request failed: {} (Category: {:?})", self, self.category());
        }

        let body = serde_json::json!({ "error": self.user_friendly_message() });
        (status, Json(body)).into_response()
    }
}
