mod role;
mod screen;

pub use jwt_auth::User;
pub use role::*;
pub use screen::*;

use crate::error::Error;
use anyhow::anyhow;
use std::str::FromStr;

///
/// Reads role stored in user's session token.
///
/// ### Errors
/// - [Error::UnexpectedError] when token carries unknown role
///
pub fn user_role(user: &User) -> Result<Role, Error> {
    Role::from_str(&user.role).map_err(|_| anyhow!("unknown role '{}' in token", user.role).into())
}

///
/// Validates that user has required role.
///
/// ### Errors
/// - [Error::Auth] when user has different role
///
pub fn require_role(user: &User, role: Role) -> Result<(), Error> {
    jwt_auth::require_role(user, role.as_ref())?;

    Ok(())
}

///
/// Validates that user's role may navigate to the screen.
///
/// ### Errors
/// - [Error::NotPermitted] when screen belongs to other role
///
pub fn require_screen_access(user: &User, screen: Screen) -> Result<(), Error> {
    match user_role(user)?.screen() == screen {
        true => Ok(()),
        false => Err(Error::NotPermitted("screen is not available for user's role")),
    }
}
