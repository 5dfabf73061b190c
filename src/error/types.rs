use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;
use chrono;

pub type AppResult<T> = Result<T, AppError>;

/// Every way a submission can fail. All failures are terminal for the
/// current submission: nothing is retried and nothing is stored.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing resume file in request")]
    MissingFile,

    #[error("Job description is empty")]
    MissingJobDescription,

    #[error("Invalid upload: {message}")]
    InvalidFile { message: String },

    #[error("File too large: {size}MB exceeds limit of {limit}MB")]
    FileTooLarge { size: usize, limit: usize },

    #[error("Unsupported document format: {content_type} (expected PDF or DOCX)")]
    UnsupportedFormat { content_type: String },

    #[error("Could not read document: {message}")]
    ExtractionFailed { message: String },

    #[error("Could not read document: only {chars} characters extracted (is this a scanned image?)")]
    UnreadableDocument { chars: usize },

    #[error("Rate limit exceeded: maximum concurrent requests reached")]
    RateLimitExceeded,

    #[error("Analysis failed: {message}")]
    GenerationFailed { message: String },

    #[error("The model returned an empty analysis; please try again")]
    EmptyAnalysis,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MISSING_FILE",
            AppError::MissingJobDescription => "MISSING_JOB_DESCRIPTION",
            AppError::InvalidFile { .. } => "INVALID_FILE",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            AppError::ExtractionFailed { .. } => "EXTRACTION_FAILED",
            AppError::UnreadableDocument { .. } => "UNREADABLE_DOCUMENT",
            AppError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            AppError::GenerationFailed { .. } => "GENERATION_FAILED",
            AppError::EmptyAnalysis => "EMPTY_ANALYSIS",
            AppError::ConfigError { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::MissingJobDescription => StatusCode::BAD_REQUEST,
            AppError::InvalidFile { .. } => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedFormat { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::ExtractionFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UnreadableDocument { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::GenerationFailed { .. } => StatusCode::BAD_GATEWAY,
            AppError::EmptyAnalysis => StatusCode::BAD_GATEWAY,
            AppError::ConfigError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let request_id = Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().to_rfc3339();

        // Structured logging with context
        tracing::error!(
            error_code = error_code,
            status_code = %status,
            request_id = %request_id,
            error_message = %message,
            "API error occurred"
        );

        let body = Json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message,
                "request_id": request_id,
                "timestamp": timestamp
            },
            "data": null
        }));

        (status, body).into_response()
    }
}

// Convert common errors to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}

// Helper methods for creating specific errors
impl AppError {
    pub fn invalid_file(message: impl Into<String>) -> Self {
        AppError::InvalidFile {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::ConfigError {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        AppError::GenerationFailed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}
