use select::document::Document;
use select::predicate::{Attr, Class, Name, Predicate};

use crate::error::{ProviderError, Result};

const MAX_RATING: f64 = 5.0;

/// Slugs are URL path segments on the source site: lowercase words joined by `-`.
pub fn validate_slug(slug: &str) -> Result<()> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ProviderError::InvalidSlug(slug.to_string()))
    }
}

/// Text of the first `.average-rating` element on the rating histogram page.
pub fn extract_rating_text(html: &str) -> Option<String> {
    Document::from(html)
        .find(Class("average-rating"))
        .next()
        .map(|node| node.text().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// `src` of the first image on the poster page.
pub fn extract_poster_url(html: &str) -> Option<String> {
    Document::from(html)
        .find(Name("img").and(Attr("src", ())))
        .next()
        .and_then(|node| node.attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(String::from)
}

/// Parses scraped rating text; never coerces garbage into a number.
pub fn parse_rating(text: &str) -> Result<f64> {
    let rating: f64 = text
        .trim()
        .parse()
        .map_err(|_| ProviderError::InvalidRating(text.to_string()))?;

    if rating.is_finite() && (0.0..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ProviderError::InvalidRating(text.to_string()))
    }
}
