use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};

use crate::error::{ProviderError, Result};
use crate::models::FilmRating;
use crate::parser;
use crate::traits::RatingProvider;

pub const DEFAULT_BASE_URL: &str = "https://letterboxd.com";
pub const DEFAULT_PLACEHOLDER_POSTER_URL: &str =
    "https://s.ltrbxd.com/static/img/empty-poster-230.png";

/// Version key Letterboxd expects on poster requests.
const POSTER_CACHE_KEY: &str = "_45aa59a6";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

pub struct LetterboxdClient {
    base_url: String,
    placeholder_poster_url: String,
    client: reqwest::Client,
}

impl LetterboxdClient {
    pub fn new(
        base_url: impl Into<String>,
        placeholder_poster_url: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_static("max-age=3600, stale-while-revalidate=600"),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            placeholder_poster_url: placeholder_poster_url.into(),
            client,
        })
    }

    pub fn rating_url(&self, slug: &str) -> String {
        format!("{}/csi/film/{}/rating-histogram/", self.base_url, slug)
    }

    pub fn poster_url(&self, slug: &str) -> String {
        format!(
            "{}/ajax/poster/film/{}/hero/230x345/?k={}",
            self.base_url, slug, POSTER_CACHE_KEY
        )
    }

    async fn get_html(&self, url: &str) -> Result<String> {
        tracing::info!("url: {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl RatingProvider for LetterboxdClient {
    async fn fetch(&self, slug: &str) -> Result<FilmRating> {
        tracing::info!("slug: {}", slug);
        parser::validate_slug(slug)?;

        let html = self.get_html(&self.rating_url(slug)).await?;
        let text = parser::extract_rating_text(&html)
            .ok_or_else(|| ProviderError::MissingRating(slug.to_string()))?;
        let rating = parser::parse_rating(&text)?;

        let html = self.get_html(&self.poster_url(slug)).await?;
        let poster_url = parser::extract_poster_url(&html).unwrap_or_else(|| {
            tracing::error!("No poster found for {}", slug);
            self.placeholder_poster_url.clone()
        });

        Ok(FilmRating {
            slug: slug.to_string(),
            rating,
            poster_url,
        })
    }

    async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
