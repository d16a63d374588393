use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use plantdesk_auth::{Principal, verify_token};
use plantdesk_core::AppError;

use crate::state::AppState;

/// Extractor that verifies the bearer token and resolves the caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let principal = verify_token(token, &state.jwt_config)?.principal()?;

        Ok(AuthUser(principal))
    }
}
