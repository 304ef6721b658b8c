use crate::{auth::Role, repository::users_repository::entity::UserFindEntity};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub identifier: String,
    pub password_hash: String,
    pub role: Role,
    pub display_name: String,
}

impl From<UserFindEntity> for User {
    fn from(value: UserFindEntity) -> Self {
        Self {
            identifier: value.identifier,
            password_hash: value.password_hash,
            role: value.role,
            display_name: value.display_name,
        }
    }
}
