use serde::Deserialize;
use std::fmt::Debug;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub current_secret: String,
    #[serde(default)]
    pub new_secret: String,
}

impl Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
