use crate::auth::Role;
use serde::Serialize;

#[derive(Serialize)]
pub struct UserInsertEntity<'a> {
    pub identifier: &'a str,
    pub password_hash: &'a str,
    pub role: Role,
    pub display_name: &'a str,
}
