use jsonwebtoken::{Algorithm, EncodingKey};
use std::time::Duration;

pub struct SessionsServiceConfig {
    /// Session expires when it is not renewed for this long
    pub inactivity_timeout: Duration,
    pub jwt_algorithm: Algorithm,
    pub jwt_key: EncodingKey,
}
