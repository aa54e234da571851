//! Token-validation middleware for protected routes.
//!
//! Layered onto the protected router only; the login and registration
//! routes never pass through here.

use crate::auth::jwt::JwtHandler;
use crate::response::ApiError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Require a valid `Authorization: Bearer <token>` header.
///
/// On success the decoded claims are inserted into request extensions so
/// downstream handlers can read the authenticated username.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
        .ok_or(ApiError::MissingToken)?;

    let claims = jwt_handler
        .validate_token(&token)
        .map_err(|_| ApiError::InvalidToken)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
