//! Authentication middleware for JWT token validation

use axum::{extract::State, http::Request, middleware::Next, response::Response};
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Authenticated principal, inserted into request extensions by
/// [`auth_middleware`]
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    /// Expiry of the presented token, kept so logout can blacklist it
    /// for exactly its remaining lifetime
    pub token_exp: u64,
}

/// Authentication middleware
///
/// Extracts the Bearer token, validates signature and expiry, rejects
/// blacklisted (logged-out) tokens, and exposes the principal to handlers
/// through request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let claims = state
        .jwt_service
        .validate_token(token)
        .map_err(|_| ApiError::Unauthorized)?;

    let is_blacklisted = state
        .jwt_service
        .is_token_blacklisted(&state.redis_pool, token)
        .await
        .map_err(|e| {
            error!("Failed to check token blacklist: {}", e);
            ApiError::InternalServerError
        })?;

    if is_blacklisted {
        return Err(ApiError::Unauthorized);
    }

    let user = AuthUser {
        id: claims.sub,
        username: claims.username,
        token_exp: claims.exp,
    };

    req.extensions_mut().insert(user);

    let response = next.run(req).await;

    Ok(response)
}
