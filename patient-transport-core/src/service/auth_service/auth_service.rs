use super::AuthenticatedUser;
use crate::{dto::input, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    ///
    /// Verify user credentials
    ///
    /// ### Errors
    /// - [Error::InvalidCredentials] when
    ///     - any of credentials is empty
    ///     - user does not exist
    ///     - secret does not match
    ///
    async fn login(&self, credentials: input::Credentials) -> Result<AuthenticatedUser, Error>;

    ///
    /// Replace user password.
    /// Sessions opened before the change stay valid until they expire.
    ///
    /// ### Errors
    /// Checked in this order:
    /// - [Error::Validation] when any of fields is empty
    /// - [Error::UserNotExist] when user does not exist
    /// - [Error::WrongCurrentPassword] when current secret does not match
    /// - [Error::SameAsOldPassword] when new secret equals current one
    /// - [Error::Validation] when new secret is shorter than 6 characters
    ///   or longer than 72 bytes
    ///
    async fn change_password(&self, password_change: input::PasswordChange) -> Result<(), Error>;

    ///
    /// Create demo users that do not exist yet
    ///
    async fn seed_demo_users(&self) -> Result<(), Error>;
}
