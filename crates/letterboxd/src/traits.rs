use crate::Result;
use crate::models::FilmRating;

#[async_trait::async_trait]
pub trait RatingProvider: Send + Sync {
    /// Scrapes the current average rating and poster URL for a film.
    async fn fetch(&self, slug: &str) -> Result<FilmRating>;

    /// Downloads the raw poster image.
    async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>>;
}
