//! Router wiring.
//!
//! Two routers merged: a public one (health, login, registration) and a
//! protected one carrying the token-validation layer, so the exempt routes
//! never see the auth middleware at all.

use crate::auth::{api as auth_api, auth_middleware, JwtHandler, UserStore};
use crate::catalog::{api as catalog_api, MovieStore};
use crate::middleware::request_logging;
use crate::storage::Db;
use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<UserStore>,
    pub movie_store: Arc<MovieStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AppState {
    pub fn new(db: Db, jwt_handler: JwtHandler) -> Self {
        Self {
            user_store: Arc::new(UserStore::new(db.clone())),
            movie_store: Arc::new(MovieStore::new(db)),
            jwt_handler: Arc::new(jwt_handler),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/login", post(auth_api::login))
        .route("/addUser", put(auth_api::add_user))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/addFilm", post(catalog_api::add_film))
        .route("/listMovies", get(catalog_api::list_movies))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_handler.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
