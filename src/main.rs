//! Movie catalog backend: JWT-authenticated REST API over SQLite.

use anyhow::{Context, Result};
use mflix_backend::{
    auth::JwtHandler,
    config::Config,
    server::{app, AppState},
    storage,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    let db = storage::open_database(&config.database_path)?;
    let state = AppState::new(db, JwtHandler::new(config.jwt_secret.clone()));
    let app = app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🎬 Movie catalog API listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mflix_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
