#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use badge::{Assets, LabelFont};
use chrono::Duration;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use letterboxd::{FilmRating, ProviderError, RatingProvider};
use storage::{MemoryCache, RatingCache, RatingRecord, StorageError};
use tower::ServiceExt;
use web::state::AppState;

pub const POSTER_URL: &str = "http://posters.test/example.png";
pub const BROKEN_POSTER_URL: &str = "http://posters.test/broken.png";

/// In-memory stand-in for the Letterboxd scraper.
pub struct StubProvider {
    films: HashMap<String, FilmRating>,
    posters: HashMap<String, Vec<u8>>,
    fetches: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        let mut posters = HashMap::new();
        posters.insert(POSTER_URL.to_string(), solid_png(230, 345, [200, 0, 0, 255]));
        posters.insert(BROKEN_POSTER_URL.to_string(), b"<html>gone</html>".to_vec());

        Self {
            films: HashMap::new(),
            posters,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_film(mut self, slug: &str, rating: f64, poster_url: &str) -> Self {
        self.films.insert(
            slug.to_string(),
            FilmRating {
                slug: slug.to_string(),
                rating,
                poster_url: poster_url.to_string(),
            },
        );
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RatingProvider for StubProvider {
    async fn fetch(&self, slug: &str) -> letterboxd::Result<FilmRating> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.films
            .get(slug)
            .cloned()
            .ok_or_else(|| ProviderError::MissingRating(slug.to_string()))
    }

    async fn fetch_poster(&self, url: &str) -> letterboxd::Result<Vec<u8>> {
        self.posters
            .get(url)
            .cloned()
            .ok_or_else(|| ProviderError::InvalidSlug(url.to_string()))
    }
}

/// Cache whose backing store is always down.
pub struct FailingCache;

#[async_trait::async_trait]
impl RatingCache for FailingCache {
    async fn get(&self, _slug: &str) -> storage::Result<Option<RatingRecord>> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn set(&self, _slug: &str, _rating: f64, _poster_url: &str) -> storage::Result<()> {
        Err(StorageError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub const BANNER: [u8; 4] = [0, 0, 0, 255];
pub const HALF_STAR: [u8; 4] = [0, 0, 255, 255];
pub const STAR: [u8; 4] = [0, 255, 0, 255];

pub fn test_assets() -> Assets {
    let solid = |w, h, c| DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba(c)));
    let font = include_bytes!("../../../../assets/DejaVuSans.ttf").to_vec();
    Assets::from_images(
        solid(230, 40, BANNER),
        solid(16, 16, HALF_STAR),
        solid(16, 16, STAR),
        LabelFont::from_bytes(font).unwrap(),
    )
}

pub fn memory_cache() -> Arc<dyn RatingCache> {
    Arc::new(MemoryCache::new(Duration::seconds(86400), 1000))
}

pub fn build_test_app(provider: Arc<StubProvider>, cache: Arc<dyn RatingCache>) -> Router {
    let state = AppState::new(cache, provider, test_assets());
    web::build_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
