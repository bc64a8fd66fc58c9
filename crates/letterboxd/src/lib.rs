pub mod client;
pub mod error;
pub mod models;
pub mod parser;
pub mod traits;

pub use client::LetterboxdClient;
pub use error::{ProviderError, Result};
pub use models::FilmRating;
pub use traits::RatingProvider;
