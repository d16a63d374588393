//! Bearer token verification.
//!
//! Production tokens come from the identity provider; [`create_access_token`]
//! mints tokens with the same secret for local development and tests.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use plantdesk_config::JwtConfig;
use plantdesk_core::AppError;

use crate::claims::Claims;
use crate::role::Role;

pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry).max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// Every failure is an authentication error.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AppError::unauthorized("Invalid or expired token")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantdesk_core::ErrorKind;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_token_verifies_with_same_secret() {
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, "pm@example.edu", Role::Manager, &config())
            .unwrap();

        let claims = verify_token(&token, &config()).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::Manager);
        assert_eq!(claims.principal().unwrap().id, user_id);
    }

    #[test]
    fn test_token_rejected_with_other_secret() {
        let token =
            create_access_token(Uuid::new_v4(), "a@example.edu", Role::Admin, &config()).unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..config()
        };

        let err = verify_token(&token, &other).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_expired_token_rejected() {
        let expired = JwtConfig {
            access_token_expiry: -600,
            ..config()
        };
        let token =
            create_access_token(Uuid::new_v4(), "a@example.edu", Role::Client, &expired).unwrap();

        let err = verify_token(&token, &config()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_token("not.a.token", &config()).is_err());
    }
}
