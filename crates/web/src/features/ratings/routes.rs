use axum::{routing::get, Router};

use super::handlers::{favicon, get_badge, get_badge_with_config, get_rating_info, root};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/favicon.ico", get(favicon))
        .route("/:slug", get(get_badge))
        .route("/:slug/info", get(get_rating_info))
        .route("/:slug/:config", get(get_badge_with_config))
}
