use super::{
    password::{hash_password, verify_password},
    AuthService, AuthServiceConfig, AuthenticatedUser, DEMO_USERS,
};
use crate::{
    dto::input,
    error::Error,
    repository::{self, UsersRepository},
};
use axum::async_trait;
use std::sync::Arc;

const MIN_SECRET_LEN: usize = 6;
/// bcrypt ignores bytes past this limit
const MAX_SECRET_BYTES: usize = 72;

pub struct AuthServiceImpl {
    config: AuthServiceConfig,
    repository: Arc<dyn UsersRepository>,
}

impl AuthServiceImpl {
    pub fn new(config: AuthServiceConfig, repository: Arc<dyn UsersRepository>) -> Self {
        Self { config, repository }
    }

    fn validate_password_change(password_change: &input::PasswordChange) -> Result<(), Error> {
        if password_change.identifier.is_empty()
            || password_change.current_secret.is_empty()
            || password_change.new_secret.is_empty()
        {
            return Err(Error::Validation("all fields are required"));
        }

        Ok(())
    }

    fn validate_new_secret(new_secret: &str) -> Result<(), Error> {
        if new_secret.chars().count() < MIN_SECRET_LEN {
            return Err(Error::Validation(
                "new secret must be at least 6 characters long",
            ));
        }

        if new_secret.len() > MAX_SECRET_BYTES {
            return Err(Error::Validation(
                "new secret must be at most 72 bytes long",
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, credentials: input::Credentials) -> Result<AuthenticatedUser, Error> {
        tracing::info!(identifier = credentials.identifier.as_str(), "logging in");

        let input::Credentials { identifier, secret } = credentials;
        if identifier.is_empty() || secret.is_empty() {
            return Err(Error::InvalidCredentials);
        }

        let user = self
            .repository
            .find(&identifier)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if !verify_password(secret, user.password_hash).await? {
            return Err(Error::InvalidCredentials);
        }

        tracing::info!(role = user.role.as_ref(), "logged in");

        Ok(AuthenticatedUser {
            identifier: user.identifier,
            role: user.role,
            display_name: user.display_name,
        })
    }

    async fn change_password(&self, password_change: input::PasswordChange) -> Result<(), Error> {
        tracing::info!(identifier = password_change.identifier.as_str(), "changing password");

        Self::validate_password_change(&password_change)?;

        let input::PasswordChange {
            identifier,
            current_secret,
            new_secret,
        } = password_change;

        let user = self
            .repository
            .find(&identifier)
            .await?
            .ok_or(Error::UserNotExist)?;

        if !verify_password(current_secret, user.password_hash.clone()).await? {
            return Err(Error::WrongCurrentPassword);
        }

        if verify_password(new_secret.clone(), user.password_hash).await? {
            return Err(Error::SameAsOldPassword);
        }

        Self::validate_new_secret(&new_secret)?;

        let password_hash = hash_password(new_secret, self.config.password_hash_cost).await?;

        self.repository
            .update_password_hash(&identifier, &password_hash)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("changed password");

        Ok(())
    }

    async fn seed_demo_users(&self) -> Result<(), Error> {
        for demo_user in DEMO_USERS.iter() {
            if self.repository.find(demo_user.identifier).await?.is_some() {
                tracing::debug!(identifier = demo_user.identifier, "demo user already exists");
                continue;
            }

            let password_hash =
                hash_password(demo_user.secret.to_string(), self.config.password_hash_cost)
                    .await?;

            let insert_result = self
                .repository
                .insert(
                    demo_user.identifier,
                    &password_hash,
                    demo_user.role,
                    demo_user.display_name,
                )
                .await;

            match insert_result {
                Ok(()) => tracing::info!(identifier = demo_user.identifier, "created demo user"),
                // created by another instance in the meantime
                Err(repository::Error::InsertUniqueViolation) => {}
                Err(err) => return Err(Error::Database(err)),
            }
        }

        Ok(())
    }
}
