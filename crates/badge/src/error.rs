use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BadgeError>;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Failed to decode poster image: {0}")]
    ImageDecode(#[source] image::ImageError),

    #[error("Failed to encode badge image: {0}")]
    ImageEncode(#[source] image::ImageError),

    #[error("Failed to load asset {}: {source}", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read font {}: {source}", path.display())]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable font family in {}", .0.display())]
    InvalidFont(PathBuf),
}

/// Why a display-configuration segment could not be used.
#[derive(Error, Debug)]
pub enum ConfigDecodeError {
    #[error("Config is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Config is not a valid display config: {0}")]
    Json(#[from] serde_json::Error),
}
