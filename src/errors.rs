use axum::http::StatusCode;
use thiserror::Error;

/// The engine's two recoverable failures. Neither mutates state; both carry
/// the message the page shows the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    #[error("enter a whole number (0 or more)")]
    InvalidInput,
    #[error("new total must be above the current total of {current}")]
    NonIncreasingTotal { current: u64 },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<TallyError> for AppError {
    fn from(err: TallyError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
