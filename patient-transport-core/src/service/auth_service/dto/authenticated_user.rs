use crate::auth::Role;

///
/// User whose credentials were verified
///
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub identifier: String,
    pub role: Role,
    pub display_name: String,
}
