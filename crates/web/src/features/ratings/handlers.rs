use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use badge::DisplayConfig;
use storage::dto::rating::RatingInfoResponse;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

pub const BADGE_CACHE_CONTROL: &str = "max-age=86400, stale-while-revalidate=1800";
/// https://fav.farm/📽️
pub const FAVICON_URL: &str = "https://fav.farm/%F0%9F%93%BD%EF%B8%8F";

#[utoipa::path(
    get,
    path = "/{slug}/info",
    params(
        ("slug" = String, Path, description = "Film slug")
    ),
    responses(
        (status = 200, description = "Rating found", body = RatingInfoResponse),
        (status = 404, description = "No rating could be obtained"),
        (status = 500, description = "Unexpected internal failure")
    ),
    tag = "ratings"
)]
pub async fn get_rating_info(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let info = services::get_rating_info(&state, &slug).await?;

    Ok(Json(info).into_response())
}

#[utoipa::path(
    get,
    path = "/{slug}",
    params(
        ("slug" = String, Path, description = "Film slug")
    ),
    responses(
        (status = 200, description = "Poster with star rating", content_type = "image/png", body = Vec<u8>),
        (status = 404, description = "Rating or poster unavailable")
    ),
    tag = "ratings"
)]
pub async fn get_badge(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    badge_response(&state, &slug, None).await
}

#[utoipa::path(
    get,
    path = "/{slug}/{config}",
    params(
        ("slug" = String, Path, description = "Film slug"),
        ("config" = String, Path, description = "Base64 JSON display config; ignored when malformed")
    ),
    responses(
        (status = 200, description = "Poster with star rating", content_type = "image/png", body = Vec<u8>),
        (status = 404, description = "Rating or poster unavailable")
    ),
    tag = "ratings"
)]
pub async fn get_badge_with_config(
    State(state): State<AppState>,
    Path((slug, config)): Path<(String, String)>,
) -> Result<Response, WebError> {
    badge_response(&state, &slug, Some(&config)).await
}

async fn badge_response(
    state: &AppState,
    slug: &str,
    config: Option<&str>,
) -> Result<Response, WebError> {
    let config = DisplayConfig::decode_or_default(config);
    let png = services::render_badge(state, slug, config).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, BADGE_CACHE_CONTROL),
        ],
        png,
    )
        .into_response())
}

pub async fn root() -> WebError {
    WebError::NotFound
}

pub async fn favicon() -> Redirect {
    Redirect::temporary(FAVICON_URL)
}
