//! JWT claims and the principal resolved from them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use plantdesk_core::AppError;

use crate::role::Role;

/// JWT claims for access tokens.
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address
/// - `role`: One of `admin`, `manager`, `client`
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// Role granted by the identity provider
    pub role: Role,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn principal(&self) -> Result<Principal, AppError> {
        let id = Uuid::parse_str(&self.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))?;

        Ok(Principal {
            id,
            email: self.email.clone(),
            role: self.role,
        })
    }
}

/// The authenticated caller of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn new(id: Uuid, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantdesk_core::ErrorKind;

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"6f9619ff-8b86-d011-b42d-00cf4fc964ff","email":"facilities@example.edu","role":"manager","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.role, Role::Manager);
        assert_eq!(claims.exp, 9999999999);

        let principal = claims.principal().unwrap();
        assert_eq!(principal.email, "facilities@example.edu");
        assert_eq!(principal.role, Role::Manager);
    }

    #[test]
    fn test_claims_unknown_role_rejected() {
        let json = r#"{"sub":"x","email":"a@b.c","role":"superuser","exp":1,"iat":1}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_principal_requires_uuid_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: "a@b.c".to_string(),
            role: Role::Client,
            exp: 1,
            iat: 1,
        };
        let err = claims.principal().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
