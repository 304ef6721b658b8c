use super::ApplicationEnv;
use crate::{
    repository::{TicketsRepository, TicketsRepositoryImpl, UsersRepository, UsersRepositoryImpl},
    service::{
        auth_service::{AuthService, AuthServiceConfig, AuthServiceImpl},
        sessions_service::{SessionsService, SessionsServiceConfig, SessionsServiceImpl},
        tickets_service::{TicketsService, TicketsServiceImpl},
    },
};
use anyhow::anyhow;
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub auth_service: Arc<dyn AuthService>,
    pub sessions_service: Arc<dyn SessionsService>,
    pub tickets_service: Arc<dyn TicketsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = UsersRepositoryImpl::new(db.clone()).await?;
    let users_repository = Arc::new(users_repository);

    let tickets_repository = TicketsRepositoryImpl::new(db).await?;
    let tickets_repository = Arc::new(tickets_repository);

    let application_state = create_services(env, users_repository, tickets_repository).await?;

    Ok((application_state, ApplicationStateToClose { db_client }))
}

///
/// Creates services on top of already created repositories
/// and seeds demo users when enabled.
///
pub async fn create_services(
    env: &ApplicationEnv,
    users_repository: Arc<dyn UsersRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating services");
    let config = AuthServiceConfig {
        password_hash_cost: env.password_hash_cost,
    };
    let auth_service = AuthServiceImpl::new(config, users_repository);
    let auth_service = Arc::new(auth_service);

    let jwt_algorithm = env
        .jwt_algorithms
        .first()
        .ok_or(anyhow!("at least one jwt algorithm is required"))?;
    let config = SessionsServiceConfig {
        inactivity_timeout: env.session_inactivity_timeout,
        jwt_algorithm: *jwt_algorithm,
        jwt_key: env.jwt_encoding_key.clone(),
    };
    let sessions_service = SessionsServiceImpl::new(config);
    let sessions_service = Arc::new(sessions_service);

    let tickets_service = TicketsServiceImpl::new(tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    if env.seed_demo_users {
        tracing::info!("seeding demo users");
        auth_service.seed_demo_users().await?;
    }

    Ok(ApplicationState {
        auth_service,
        sessions_service,
        tickets_service,
    })
}
