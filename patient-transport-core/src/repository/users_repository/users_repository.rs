use super::User;
use crate::{auth::Role, repository::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Inserts new user.
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when identifier is already taken
    ///
    async fn insert(
        &self,
        identifier: &str,
        password_hash: &str,
        role: Role,
        display_name: &str,
    ) -> Result<(), Error>;

    async fn find(&self, identifier: &str) -> Result<Option<User>, Error>;

    ///
    /// Replaces stored password hash
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn update_password_hash(&self, identifier: &str, password_hash: &str)
        -> Result<(), Error>;
}
