use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Listings service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ListingsServiceError {
    #[error("code not found")]
    CodeNotFound,
    #[error("code already used")]
    CodeAlreadyUsed,
    #[error("invalid or already used code")]
    InvalidOrUsedCode,
    #[error("could not allocate a unique code")]
    DuplicateCode,
    #[error("unsupported image type")]
    UnsupportedMediaType,
    #[error("image too large")]
    PayloadTooLarge,
    #[error("too many images")]
    TooManyAttachments,
    #[error("missing data")]
    MissingData,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("session expired")]
    InvalidSession,
    #[error("failed to store image")]
    StorageWriteFailure(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ListingsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::CodeAlreadyUsed => "CODE_ALREADY_USED",
            Self::InvalidOrUsedCode => "INVALID_OR_USED_CODE",
            Self::DuplicateCode => "DUPLICATE_CODE",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::TooManyAttachments => "TOO_MANY_ATTACHMENTS",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidSession => "INVALID_SESSION",
            Self::StorageWriteFailure(_) => "STORAGE_WRITE_FAILURE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Shared by the JSON responder and the HTML-rendering handlers.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::CodeNotFound => StatusCode::NOT_FOUND,
            Self::CodeAlreadyUsed | Self::InvalidOrUsedCode | Self::DuplicateCode => {
                StatusCode::CONFLICT
            }
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::TooManyAttachments | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::StorageWriteFailure(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log 500s only — tower-http TraceLayer already records method/uri/status
    /// for all requests; 4xx are expected client errors. Called from
    /// `into_response` and from handlers that render errors as HTML.
    pub fn log_server_error(&self) {
        match self {
            Self::StorageWriteFailure(e) => {
                tracing::error!(
                    error = %e,
                    kind = "STORAGE_WRITE_FAILURE",
                    "failed to store image"
                );
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            _ => {}
        }
    }
}

impl IntoResponse for ListingsServiceError {
    fn into_response(self) -> Response {
        self.log_server_error();
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
