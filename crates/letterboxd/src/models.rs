use serde::{Deserialize, Serialize};

/// What the rating source knows about a film.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRating {
    pub slug: String,
    pub rating: f64,
    pub poster_url: String,
}
