use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid film slug: {0:?}")]
    InvalidSlug(String),

    #[error("No rating found for {0}")]
    MissingRating(String),

    #[error("Rating is not a number between 0 and 5: {0:?}")]
    InvalidRating(String),
}
