use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Checked server-side on every protected route; the client
/// never infers privileges from token contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Admin,
    Doctor,
}

impl Default for Role {
    fn default() -> Self {
        Role::Patient
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Admin => write!(f, "admin"),
            Role::Doctor => write!(f, "doctor"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub role: Role,
    pub email: Option<String>,
    pub iat: Option<u64>,
    pub exp: Option<u64>,
}

/// Identity attached to the request by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
