use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecautionRequired {
    #[serde(rename = "sim")]
    Yes,

    #[default]
    #[serde(rename = "nao")]
    No,
}
