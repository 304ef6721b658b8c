//!
//! All roles used within application
//!

use super::Screen;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Creates transport tickets and may cancel his own
    Requester,
    /// Moves tickets through transport
    Executor,
    /// Views aggregated status
    Admin,
}

impl Role {
    ///
    /// The only screen user with this role may reach
    ///
    pub fn screen(&self) -> Screen {
        match self {
            Self::Requester => Screen::Requester,
            Self::Executor => Screen::Executor,
            Self::Admin => Screen::Admin,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn requester() {
        let role = Role::Requester.as_ref();
        assert_eq!(role, "requester");
    }

    #[test]
    fn parse_executor() {
        let role = Role::from_str("executor").unwrap();
        assert_eq!(role, Role::Executor);
    }

    #[test]
    fn parse_unknown() {
        assert!(Role::from_str("solicitante").is_err());
    }
}
