use super::Claims;
use std::{ops::Deref, sync::Arc};

///
/// Struct with user information.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// User information retrieved from his JWT.
///
pub struct InnerUser {
    pub identifier: String,
    pub role: String,
    pub display_name: String,
    pub expires_at: i64,
}

impl User {
    pub fn new(identifier: String, role: String, display_name: String, expires_at: i64) -> Self {
        Self {
            inner: Arc::new(InnerUser {
                identifier,
                role,
                display_name,
                expires_at,
            }),
        }
    }
}

impl From<Claims> for User {
    fn from(claims: Claims) -> Self {
        Self::new(claims.sub, claims.role, claims.name, claims.exp)
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
