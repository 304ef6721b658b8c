use serde::{Deserialize, Serialize};

///
/// Role specific screens of the client application
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[serde(rename = "solicitante")]
    Requester,

    #[serde(rename = "executor")]
    Executor,

    #[serde(rename = "admin")]
    Admin,
}
