use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::views;
use crate::error::Error;

/// Request failure rendered as an HTML error page.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::Unauthenticated | Error::UserNotFound(_) => {
                AppError::unauthorized("Please log in to continue")
            }
            Error::BucketListNotFound(name) => {
                AppError::not_found(format!("No bucket list named '{name}'"))
            }
            Error::ActivityNotFound(title) => {
                AppError::not_found(format!("No activity titled '{title}'"))
            }
            e => {
                tracing::error!("request failed: {e}");
                AppError::internal("Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, views::error_page(self.status, &self.message)).into_response()
    }
}
