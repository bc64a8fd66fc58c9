use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use badge::BadgeError;
use letterboxd::ProviderError;
use serde_json::json;
use std::fmt;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    /// The source returned no usable rating for the slug.
    RatingUnavailable(ProviderError),
    /// The poster could not be downloaded.
    PosterUnavailable(ProviderError),
    Badge(BadgeError),
    NotFound,
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatingUnavailable(e) => write!(f, "Rating unavailable: {}", e),
            Self::PosterUnavailable(e) => write!(f, "Poster unavailable: {}", e),
            Self::Badge(e) => write!(f, "Badge error: {}", e),
            Self::NotFound => write!(f, "Resource not found"),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::RatingUnavailable(_) => StatusCode::NOT_FOUND,
            Self::PosterUnavailable(_) => StatusCode::NOT_FOUND,
            Self::Badge(BadgeError::ImageDecode(_)) => StatusCode::NOT_FOUND,
            Self::Badge(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::RatingUnavailable(_) => {
                json!({
                    "error": "Rating not found"
                })
            }
            Self::PosterUnavailable(_) | Self::Badge(BadgeError::ImageDecode(_)) => {
                json!({
                    "error": "Poster not found"
                })
            }
            Self::Badge(e) => {
                tracing::error!("Badge error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                json!({
                    "error": "An internal error occurred"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<BadgeError> for WebError {
    fn from(error: BadgeError) -> Self {
        Self::Badge(error)
    }
}

impl From<tokio::task::JoinError> for WebError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::InternalServerError(error.to_string())
    }
}

pub type WebResult<T> = Result<T, WebError>;
