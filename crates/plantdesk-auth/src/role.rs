use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Roles known to the service.
///
/// `Admin` and `Manager` use the admin dashboard; `Client` is a campus
/// department using the client portal and only ever sees its own records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Client,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Client];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Client => "client",
        }
    }

    /// Physical-plant staff (dashboard users).
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_from_string() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Manager".parse::<Role>(), Ok(Role::Manager));
        assert_eq!("client".parse::<Role>(), Ok(Role::Client));
        assert!("student".parse::<Role>().is_err());
    }

    #[test]
    fn test_is_staff() {
        assert!(Role::Admin.is_staff());
        assert!(Role::Manager.is_staff());
        assert!(!Role::Client.is_staff());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), r#""manager""#);
        let role: Role = serde_json::from_str(r#""client""#).unwrap();
        assert_eq!(role, Role::Client);
    }
}
