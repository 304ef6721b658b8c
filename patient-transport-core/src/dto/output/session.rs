use crate::auth::{Role, Screen};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub identifier: String,
    pub role: Role,
    pub display_name: String,
    pub screen: Screen,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

///
/// Session issued on login or renewal.
/// Token has to be sent in `Authorization: Bearer` header.
///
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    #[serde(flatten)]
    pub info: SessionInfo,
}
