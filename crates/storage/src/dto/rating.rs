use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{MAX_RATING, RatingRecord};

/// Body of `GET /{slug}/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingInfoResponse {
    pub slug: String,
    pub rating: f64,
    pub poster: String,
    /// Human readable score, e.g. `"4.6 / 5"`.
    pub stars: String,
    /// Rating quantized to half-star steps.
    pub weighted_rating: f64,
}

impl RatingInfoResponse {
    pub fn new(record: RatingRecord, weighted_rating: f64) -> Self {
        Self {
            stars: format!("{} / {}", record.rating, MAX_RATING),
            slug: record.slug,
            rating: record.rating,
            poster: record.poster_url,
            weighted_rating,
        }
    }
}
