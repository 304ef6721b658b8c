use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub sub: String,
    pub role: String,
    pub name: String,

    /// Unix timestamp (seconds) when token was issued
    pub iat: i64,
    /// Unix timestamp (seconds) after which token is rejected
    pub exp: i64,
}
