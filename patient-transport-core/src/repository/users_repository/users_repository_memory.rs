use super::{User, UsersRepository};
use crate::{auth::Role, repository::Error};
use axum::async_trait;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

///
/// Users kept in process memory.
/// Used in place of database in tests.
///
#[derive(Default)]
pub struct UsersRepositoryMemory {
    users: Mutex<HashMap<String, User>>,
}

impl UsersRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.users
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryMemory {
    async fn insert(
        &self,
        identifier: &str,
        password_hash: &str,
        role: Role,
        display_name: &str,
    ) -> Result<(), Error> {
        let mut users = self.lock();
        if users.contains_key(identifier) {
            return Err(Error::InsertUniqueViolation);
        }

        users.insert(
            identifier.to_string(),
            User {
                identifier: identifier.to_string(),
                password_hash: password_hash.to_string(),
                role,
                display_name: display_name.to_string(),
            },
        );

        Ok(())
    }

    async fn find(&self, identifier: &str) -> Result<Option<User>, Error> {
        Ok(self.lock().get(identifier).cloned())
    }

    async fn update_password_hash(
        &self,
        identifier: &str,
        password_hash: &str,
    ) -> Result<(), Error> {
        let mut users = self.lock();
        let user = users.get_mut(identifier).ok_or(Error::NoDocumentUpdated)?;
        user.password_hash = password_hash.to_string();

        Ok(())
    }
}
