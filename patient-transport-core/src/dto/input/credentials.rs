use serde::Deserialize;
use std::fmt::Debug;

#[derive(Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub secret: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
