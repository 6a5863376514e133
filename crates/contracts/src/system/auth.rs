use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login reply: the bearer token plus the role hints the console uses to
/// gate its menu and mutating actions. Authorization proper stays
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub roles: Vec<String>,
    pub id: Option<i64>,
    pub username: Option<String>,
    pub mail: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}
