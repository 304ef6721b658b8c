use crate::{auth::User, dto::output, error::Error, service::auth_service::AuthenticatedUser};

#[cfg_attr(test, mockall::automock)]
pub trait SessionsService: Send + Sync {
    ///
    /// Issue token for user who has just logged in
    ///
    fn open_session(&self, user: &AuthenticatedUser) -> Result<output::Session, Error>;

    ///
    /// Issue fresh token with new expiry for user with valid session
    ///
    fn renew_session(&self, user: &User) -> Result<output::Session, Error>;

    fn current_session(&self, user: &User) -> Result<output::SessionInfo, Error>;
}
