//! Movie catalog endpoints, reached only through the auth middleware.

use crate::auth::models::Claims;
use crate::catalog::models::{AddFilmRequest, MovieQuery, MoviesResponse};
use crate::catalog::store::InsertMovie;
use crate::response::{ApiError, MessageBody};
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

/// Insert endpoint - POST /addFilm
pub async fn add_film(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<AddFilmRequest>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let (title, director, year) = match (
        payload.title.as_deref().filter(|s| !s.is_empty()),
        payload.director.as_deref().filter(|s| !s.is_empty()),
        payload.year,
    ) {
        (Some(t), Some(d), Some(y)) => (t, d, y),
        _ => {
            return Err(ApiError::Validation(
                "Title, director and year are required".to_string(),
            ));
        }
    };

    match state.movie_store.insert_movie(title, director, year)? {
        InsertMovie::Inserted(movie) => {
            info!(username = %claims.sub, title = %movie.title, "Movie added by user");
            Ok((
                StatusCode::CREATED,
                Json(MessageBody::new(format!(
                    "Movie {} successfully added",
                    movie.title
                ))),
            ))
        }
        InsertMovie::DuplicateTitle => Err(ApiError::MovieExists(title.to_string())),
    }
}

/// Listing endpoint - GET /listMovies
pub async fn list_movies(
    State(state): State<AppState>,
    Query(filters): Query<MovieQuery>,
) -> Result<Json<MoviesResponse>, ApiError> {
    let data = state.movie_store.list_movies(&filters)?;
    Ok(Json(MoviesResponse { rc: 0, data }))
}
