use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use pavilion_http_errors::ErrorResponseData;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Database Error: {0}")]
    DbErr(#[from] diesel::result::Error),

    #[error("Database Pool Error: {0}")]
    DbPool(#[from] deadpool_diesel::PoolError),

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Admin access required")]
    NotAdmin,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid session id")]
    InvalidSessionId,

    #[error("Auth error: {0}")]
    AuthError(#[from] pavilion_auth::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] pavilion_storage::Error),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Only JPEG and PNG logos are accepted")]
    UnsupportedImageType,

    #[error("content-length header is required")]
    ContentLengthRequired,

    #[error("request too large")]
    RequestTooLarge,

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    AxumError(#[from] axum::Error),

    #[error(transparent)]
    Generic(#[from] anyhow::Error),
}

impl Error {
    fn error_kind(&self) -> &'static str {
        match self {
            Error::DbErr(diesel::result::Error::NotFound) => "not_found",
            Error::DbErr(_) => "db",
            Error::DbPool(_) => "db_pool",
            Error::Unauthenticated => "authn",
            Error::NotAdmin => "authz",
            Error::InvalidCredentials => "authn",
            Error::InvalidSessionId => "authn",
            Error::AuthError(_) => "authn",
            Error::StorageError(_) => "storage",
            Error::NotFound => "not_found",
            Error::Validation(_) => "validation",
            Error::UnsupportedImageType => "unsupported_image_type",
            Error::ContentLengthRequired => "bad_request",
            Error::RequestTooLarge => "bad_request",
            Error::IoError(_) => "internal_server_error",
            Error::AxumError(_) => "bad_request",
            Error::Generic(_) => "internal_server_error",
        }
    }

    pub fn response_tuple(&self) -> (StatusCode, ErrorResponseData) {
        let status = match self {
            Error::DbErr(diesel::result::Error::NotFound) => StatusCode::NOT_FOUND,
            Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            Error::NotAdmin => StatusCode::FORBIDDEN,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::InvalidSessionId => StatusCode::UNAUTHORIZED,
            Error::AuthError(_) => StatusCode::UNAUTHORIZED,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::UnsupportedImageType => StatusCode::BAD_REQUEST,
            Error::ContentLengthRequired => StatusCode::BAD_REQUEST,
            Error::RequestTooLarge => StatusCode::BAD_REQUEST,
            Error::AxumError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            ErrorResponseData::new(self.error_kind(), self.to_string()),
        )
    }
}

impl From<deadpool_diesel::InteractError> for Error {
    fn from(e: deadpool_diesel::InteractError) -> Self {
        std::panic::panic_any(e)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (code, json) = self.response_tuple();
        (code, Json(json)).into_response()
    }
}
