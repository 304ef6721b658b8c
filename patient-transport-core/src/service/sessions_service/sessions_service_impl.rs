use super::{SessionsService, SessionsServiceConfig};
use crate::{
    auth::{self, Role, User},
    dto::output,
    error::Error,
    service::auth_service::AuthenticatedUser,
};
use jsonwebtoken::Header;
use jwt_auth::Claims;
use time::OffsetDateTime;

pub struct SessionsServiceImpl {
    config: SessionsServiceConfig,
}

impl SessionsServiceImpl {
    pub fn new(config: SessionsServiceConfig) -> Self {
        Self { config }
    }

    fn issue(
        &self,
        identifier: &str,
        role: Role,
        display_name: &str,
    ) -> Result<output::Session, Error> {
        let issued_at = OffsetDateTime::now_utc();
        let expires_at = issued_at + self.config.inactivity_timeout;

        let claims = Claims {
            sub: identifier.to_string(),
            role: role.as_ref().to_string(),
            name: display_name.to_string(),
            iat: issued_at.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
        };

        let token = jsonwebtoken::encode(
            &Header::new(self.config.jwt_algorithm),
            &claims,
            &self.config.jwt_key,
        )
        .map_err(anyhow::Error::from)?;

        tracing::info!(identifier, exp = claims.exp, "issued session token");

        Ok(output::Session {
            token,
            info: Self::session_info(identifier, role, display_name, claims.exp)?,
        })
    }

    fn session_info(
        identifier: &str,
        role: Role,
        display_name: &str,
        expires_at: i64,
    ) -> Result<output::SessionInfo, Error> {
        let expires_at =
            OffsetDateTime::from_unix_timestamp(expires_at).map_err(anyhow::Error::from)?;

        Ok(output::SessionInfo {
            identifier: identifier.to_string(),
            role,
            display_name: display_name.to_string(),
            screen: role.screen(),
            expires_at,
        })
    }
}

impl SessionsService for SessionsServiceImpl {
    fn open_session(&self, user: &AuthenticatedUser) -> Result<output::Session, Error> {
        self.issue(&user.identifier, user.role, &user.display_name)
    }

    fn renew_session(&self, user: &User) -> Result<output::Session, Error> {
        let role = auth::user_role(user)?;

        self.issue(&user.identifier, role, &user.display_name)
    }

    fn current_session(&self, user: &User) -> Result<output::SessionInfo, Error> {
        let role = auth::user_role(user)?;

        Self::session_info(&user.identifier, role, &user.display_name, user.expires_at)
    }
}
