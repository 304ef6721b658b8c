use crate::auth::Role;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub identifier: String,
    pub password_hash: String,
    pub role: Role,
    pub display_name: String,
}
