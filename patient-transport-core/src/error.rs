use crate::{model::TicketStatus, repository};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jwt_auth::error::MissingRoleError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("user not exist")]
    UserNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("wrong current password")]
    WrongCurrentPassword,

    #[error("new password is the same as the old one")]
    SameAsOldPassword,

    #[error("not permitted: {0}")]
    NotPermitted(&'static str),

    #[error("ticket already has terminal status '{0}'")]
    AlreadyTerminal(TicketStatus),

    #[error("invalid status transition '{from}' -> '{to}'")]
    InvalidTransition { from: TicketStatus, to: TicketStatus },

    #[error("auth error: {0}")]
    Auth(#[from] MissingRoleError),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = match self {
            Error::TicketNotExist | Error::UserNotExist => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidCredentials | Error::WrongCurrentPassword => StatusCode::UNAUTHORIZED,
            Error::SameAsOldPassword => StatusCode::BAD_REQUEST,
            Error::NotPermitted(_) | Error::Auth(_) => StatusCode::FORBIDDEN,
            Error::AlreadyTerminal(_) | Error::InvalidTransition { from: _, to: _ } => {
                StatusCode::CONFLICT
            }
            Error::Database(_) | Error::UnexpectedError(_) => {
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let body = ErrorMessage {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
