use crate::auth::Role;

pub struct DemoUser {
    pub identifier: &'static str,
    pub secret: &'static str,
    pub role: Role,
    pub display_name: &'static str,
}

///
/// Users created at startup so every screen can be reached
///
pub const DEMO_USERS: [DemoUser; 3] = [
    DemoUser {
        identifier: "solicitante",
        secret: "solicitante123",
        role: Role::Requester,
        display_name: "Solicitante Demo",
    },
    DemoUser {
        identifier: "executor",
        secret: "executor123",
        role: Role::Executor,
        display_name: "Executor Demo",
    },
    DemoUser {
        identifier: "admin",
        secret: "admin123",
        role: Role::Admin,
        display_name: "Administrador",
    },
];
