//! Login and registration endpoints.

use crate::auth::models::{AddUserRequest, LoginRequest, LoginResponse};
use crate::auth::user_store::{Authenticate, CreateUser};
use crate::response::{ApiError, MessageBody};
use crate::server::AppState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = match state.user_store.authenticate(&payload.username, &payload.password)? {
        Authenticate::Ok(user) => user,
        Authenticate::UnknownUser => {
            return Err(ApiError::UserNotFound(payload.username));
        }
        Authenticate::BadPassword => {
            warn!(username = %payload.username, "Failed login attempt");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let token = state.jwt_handler.generate_token(&user.username)?;

    info!(username = %user.username, "Login successful");

    Ok(Json(LoginResponse {
        rc: 0,
        msg: "Login successful".to_string(),
        token,
    }))
}

/// Registration endpoint - PUT /addUser
pub async fn add_user(
    State(state): State<AppState>,
    Json(payload): Json<AddUserRequest>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let (username, password, email) = match (
        payload.username.as_deref().filter(|s| !s.is_empty()),
        payload.password.as_deref().filter(|s| !s.is_empty()),
        payload.email.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(u), Some(p), Some(e)) => (u, p, e),
        _ => {
            return Err(ApiError::Validation(
                "Username, password and email are required".to_string(),
            ));
        }
    };

    match state.user_store.create_user(username, password, email)? {
        CreateUser::Created(user) => Ok((
            StatusCode::CREATED,
            Json(MessageBody::new(format!(
                "User {} added successfully",
                user.username
            ))),
        )),
        CreateUser::UsernameTaken => Err(ApiError::UsernameTaken(username.to_string())),
        CreateUser::EmailTaken => Err(ApiError::EmailTaken(email.to_string())),
    }
}
