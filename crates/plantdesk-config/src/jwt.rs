use crate::env::{parse_or, string_or};

#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Shared HMAC secret with the identity provider
    pub secret: String,
    /// Lifetime in seconds of tokens minted locally (development and tests)
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: string_or("JWT_SECRET", "your-secret-key-change-in-production"),
            access_token_expiry: parse_or("JWT_ACCESS_EXPIRY", 3600), // 1 hour
        }
    }
}
