use std::sync::Arc;

use badge::{BadgeError, DisplayConfig, quantize};
use chrono::Utc;
use letterboxd::ProviderError;
use storage::{RatingRecord, dto::rating::RatingInfoResponse};

use crate::error::{WebError, WebResult};
use crate::state::AppState;

/// Returns the cached rating for a slug, scraping and caching it on a miss.
///
/// Cache failures never fail the request: a read error counts as a miss and a
/// write error is logged while the freshly fetched value is still served.
pub async fn resolve_rating(state: &AppState, slug: &str) -> WebResult<RatingRecord> {
    match state.cache.get(slug).await {
        Ok(Some(record)) => {
            tracing::debug!("Cache hit for {}", slug);
            return Ok(record);
        }
        Ok(None) => tracing::debug!("Cache miss for {}", slug),
        Err(e) => tracing::warn!("Cache read failed for {}, treating as miss: {}", slug, e),
    }

    let film = state.provider.fetch(slug).await.map_err(|e| {
        match &e {
            ProviderError::MissingRating(_) | ProviderError::InvalidSlug(_) => {
                tracing::warn!("No rating for {}: {}", slug, e)
            }
            _ => tracing::error!("Failed to fetch rating for {}: {}", slug, e),
        }
        WebError::RatingUnavailable(e)
    })?;

    if let Err(e) = state
        .cache
        .set(&film.slug, film.rating, &film.poster_url)
        .await
    {
        tracing::error!("Failed to cache rating for {}: {}", slug, e);
    }

    Ok(RatingRecord {
        slug: film.slug,
        rating: film.rating,
        poster_url: film.poster_url,
        last_updated: Utc::now(),
    })
}

pub async fn get_rating_info(state: &AppState, slug: &str) -> WebResult<RatingInfoResponse> {
    let record = resolve_rating(state, slug).await?;
    let weighted = quantize(record.rating);

    Ok(RatingInfoResponse::new(record, weighted.value()))
}

/// Renders the PNG badge for a slug.
pub async fn render_badge(
    state: &AppState,
    slug: &str,
    config: DisplayConfig,
) -> WebResult<Vec<u8>> {
    let record = resolve_rating(state, slug).await?;
    let weighted = quantize(record.rating);

    tracing::debug!(
        slug,
        rating = record.rating,
        weighted_rating = weighted.value(),
        ?config,
        "Rendering badge"
    );

    let poster = state
        .provider
        .fetch_poster(&record.poster_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to download poster for {}: {}", slug, e);
            WebError::PosterUnavailable(e)
        })?;

    let assets = Arc::clone(&state.assets);
    let rating = record.rating;
    let png = tokio::task::spawn_blocking(move || {
        badge::compose(&poster, rating, weighted, &assets, &config)
    })
    .await?
    .inspect_err(|e| {
        if let BadgeError::ImageDecode(_) = e {
            tracing::error!("Poster for {} is not a decodable image: {}", slug, e);
        }
    })?;

    Ok(png)
}
