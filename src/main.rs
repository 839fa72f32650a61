use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod storage;

use catalog::CatalogStore;
use config::Config;
use storage::s3_client::S3Store;
use storage::ObjectStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub store: Arc<dyn ObjectStore>,
    pub upload_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("Starting portfolio service...");

    let config = Config::from_env()?;

    let store = S3Store::new(&config.storage).await?;
    tracing::info!(
        bucket = %config.storage.bucket,
        region = %config.storage.region,
        "S3 client initialized"
    );

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState {
        catalog: Arc::new(CatalogStore::new(&config.catalog_path)),
        store: Arc::new(store),
        upload_dir: config.upload_dir.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/upload", post(handlers::upload::upload_project))
        .route("/projects", get(handlers::projects::list_projects))
        .fallback_service(ServeDir::new(&config.static_dir))
        // No upload size cap is enforced, so drop axum's default body limit.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!(
        "Server running at http://{}:{}",
        config.server.public_host,
        config.server.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "Portfolio service is healthy"
}
