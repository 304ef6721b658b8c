use serde::{Deserialize, Serialize};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
pub enum TransportMode {
    #[serde(rename = "cadeira-rodas")]
    #[strum(serialize = "cadeira-rodas")]
    Wheelchair,

    #[serde(rename = "maca")]
    #[strum(serialize = "maca")]
    Stretcher,
}
