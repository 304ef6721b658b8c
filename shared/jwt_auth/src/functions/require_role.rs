use crate::{error::MissingRoleError, User};

///
/// Validates that user has the required role.
///
/// ### Errors
/// - [MissingRoleError] when user has different role
///
pub fn require_role(user: &User, role: &str) -> Result<(), MissingRoleError> {
    match user.role == role {
        true => Ok(()),
        false => Err(MissingRoleError {
            missing_role: role.to_string(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn require_role_user_has_role() {
        let user = User::new(
            "solicitante".to_string(),
            "requester".to_string(),
            "Solicitante Demo".to_string(),
            253402210800,
        );

        let result = require_role(&user, "requester");

        assert!(result.is_ok());
    }

    #[test]
    fn require_role_user_has_other_role() {
        let user = User::new(
            "executor".to_string(),
            "executor".to_string(),
            "Executor Demo".to_string(),
            253402210800,
        );

        let err = require_role(&user, "requester").unwrap_err();

        assert_eq!(err.missing_role, "requester");
    }
}
