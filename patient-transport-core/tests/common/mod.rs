#![allow(dead_code)]

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use patient_transport_core::{
    application::{create_application, create_middleware, create_services, ApplicationEnv},
    repository::{TicketsRepositoryMemory, UsersRepositoryMemory},
};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;
use tokio::net::TcpListener;

pub const JWT_SECRET: &str = "integration tests secret";
pub const MAX_HTTP_CONTENT_LEN: usize = 4096;

///
/// Serves application backed by in-memory repositories with seeded demo users.
///
/// ### Returns
/// base url of the api, e.g. `http://127.0.0.1:41234/api/v1`
///
pub async fn spawn_app() -> String {
    spawn_app_with_session_timeout(Duration::from_secs(1800)).await
}

pub async fn spawn_app_with_session_timeout(session_inactivity_timeout: Duration) -> String {
    let env = ApplicationEnv {
        log_directory: String::new(),
        log_filename: String::new(),
        bind_address: "127.0.0.1:0".parse().unwrap(),
        db_connection_string: String::new(),
        db_name: String::new(),
        max_http_content_len: MAX_HTTP_CONTENT_LEN,
        jwt_algorithms: vec![Algorithm::HS256],
        jwt_encoding_key: EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        jwt_decoding_key: DecodingKey::from_secret(JWT_SECRET.as_bytes()),
        session_inactivity_timeout,
        password_hash_cost: 4,
        seed_demo_users: true,
    };

    let state = create_services(
        &env,
        Arc::new(UsersRepositoryMemory::new()),
        Arc::new(TicketsRepositoryMemory::new()),
    )
    .await
    .unwrap();
    let middleware = create_middleware(&env);
    let app = create_application(state, middleware);

    let listener = TcpListener::bind(env.bind_address).await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}/api/v1")
}

pub async fn login(client: &Client, base_url: &str, identifier: &str, secret: &str) -> String {
    let response = client
        .post(format!("{base_url}/login"))
        .json(&json!({ "identifier": identifier, "secret": secret }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session = response.json::<Value>().await.unwrap();
    session["token"].as_str().unwrap().to_string()
}

///
/// Signs token without logging in, e.g. for users that do not exist in database
///
pub fn create_token(identifier: &str, role: &str, expires_at: OffsetDateTime) -> String {
    jwt_auth::test::create_jwt(
        identifier,
        role,
        identifier,
        expires_at.unix_timestamp(),
        "HS256".to_string(),
        JWT_SECRET.to_string(),
    )
}

pub fn maria_santos_ticket() -> Value {
    json!({
        "patientName": "Maria Santos",
        "originLocation": "uti",
        "destinationLocation": "centro-cirurgico",
        "bedLabel": "15A",
        "transportMode": "maca",
        "precautionRequired": "nao",
        "precautionType": "",
        "notes": "",
    })
}

///
/// ### Returns
/// id of created ticket
///
pub async fn create_ticket(client: &Client, base_url: &str, token: &str, ticket: Value) -> String {
    let response = client
        .post(format!("{base_url}/tickets"))
        .bearer_auth(token)
        .json(&ticket)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let ticket = response.json::<Value>().await.unwrap();
    ticket["id"].as_str().unwrap().to_string()
}
