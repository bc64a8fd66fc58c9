//! HTTP surface of the rating badge service.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod state;

use features::ratings;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        ratings::handlers::get_rating_info,
        ratings::handlers::get_badge,
        ratings::handlers::get_badge_with_config,
    ),
    components(
        schemas(
            storage::dto::rating::RatingInfoResponse,
            badge::DisplayConfig,
            badge::RatingType,
        )
    ),
    tags(
        (name = "ratings", description = "Film rating badges"),
    )
)]
pub struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(ratings::routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
