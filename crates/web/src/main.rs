use std::sync::Arc;

use anyhow::Context;
use badge::Assets;
use letterboxd::LetterboxdClient;
use web::{build_router, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Letterboxd rating badge service");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let assets = Assets::load(&config.assets_dir).context("Couldn't load assets")?;
    tracing::info!(
        "Assets loaded from {} (banner {}x{}, star {}x{})",
        config.assets_dir.display(),
        assets.banner().width(),
        assets.banner().height(),
        assets.star().width(),
        assets.star().height()
    );

    let cache = web::state::build_cache(&config).await?;
    let provider = LetterboxdClient::new(
        config.letterboxd_base_url.as_str(),
        config.placeholder_poster_url.as_str(),
    )
    .context("Failed to build Letterboxd client")?;

    let state = AppState::new(cache, Arc::new(provider), assets);
    let app = build_router(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
