use crate::{
    application::ApplicationState,
    auth::{self, Screen, User},
    dto::{input, output},
    error::Error,
    service::{
        auth_service::AuthService, sessions_service::SessionsService,
        tickets_service::TicketsService,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use jwt_auth::JwtAuthLayer;
use std::sync::Arc;

pub fn routing(auth_layer: &JwtAuthLayer) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/session", get(get_session))
        .route("/api/v1/session/renew", post(renew_session))
        .route("/api/v1/screens/:screen", get(get_screen))
        .route("/api/v1/tickets", get(get_tickets).post(post_ticket))
        .route("/api/v1/tickets/summary", get(get_tickets_summary))
        .route("/api/v1/tickets/:id", put(put_ticket_status))
        .route("/api/v1/tickets/:id/cancel", put(put_ticket_cancel))
        .route_layer(auth_layer.clone())
        .route("/api/v1/login", post(login))
        .route("/api/v1/change-password", post(change_password))
        .route("/api/v1/logout", post(logout))
}

async fn login(
    State(auth_service): State<Arc<dyn AuthService>>,
    State(sessions_service): State<Arc<dyn SessionsService>>,
    Json(credentials): Json<input::Credentials>,
) -> Result<Json<output::Session>, Error> {
    let user = auth_service.login(credentials).await?;
    let session = sessions_service.open_session(&user)?;

    Ok(Json(session))
}

async fn change_password(
    State(auth_service): State<Arc<dyn AuthService>>,
    Json(password_change): Json<input::PasswordChange>,
) -> Result<StatusCode, Error> {
    auth_service.change_password(password_change).await?;

    Ok(StatusCode::OK)
}

async fn logout() -> StatusCode {
    StatusCode::OK
}

async fn get_session(
    State(sessions_service): State<Arc<dyn SessionsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::SessionInfo>, Error> {
    let session_info = sessions_service.current_session(&user)?;

    Ok(Json(session_info))
}

async fn renew_session(
    State(sessions_service): State<Arc<dyn SessionsService>>,
    Extension(user): Extension<User>,
) -> Result<Json<output::Session>, Error> {
    let session = sessions_service.renew_session(&user)?;

    Ok(Json(session))
}

async fn get_screen(
    Extension(user): Extension<User>,
    Path(screen): Path<Screen>,
) -> Result<StatusCode, Error> {
    auth::require_screen_access(&user, screen)?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Query(filters): Query<input::TicketFilters>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service.list_tickets(filters, pagination).await?;

    Ok(Json(tickets))
}

async fn get_tickets_summary(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Json<output::TicketsSummary>, Error> {
    let summary = tickets_service.tickets_summary().await?;

    Ok(Json(summary))
}

async fn post_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(ticket): Json<input::Ticket>,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    let ticket = tickets_service.create_ticket(&user, ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn put_ticket_status(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(update): Json<input::TicketStatusUpdate>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service
        .update_ticket_status(&id, &user, update)
        .await?;

    Ok(Json(ticket))
}

async fn put_ticket_cancel(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = tickets_service.cancel_ticket(&id, &user).await?;

    Ok(Json(ticket))
}
