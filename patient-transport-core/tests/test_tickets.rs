mod common;
use common::*;

use bson::oid::ObjectId;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use time::OffsetDateTime;

async fn fetch_tickets(client: &Client, base_url: &str, token: &str, query: &str) -> Vec<Value> {
    let response = client
        .get(format!("{base_url}/tickets{query}"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    response.json::<Vec<Value>>().await.unwrap()
}

async fn put_status(
    client: &Client,
    base_url: &str,
    token: &str,
    id: &str,
    status: &str,
) -> reqwest::Response {
    client
        .put(format!("{base_url}/tickets/{id}"))
        .bearer_auth(token)
        .json(&json!({ "status": status }))
        .send()
        .await
        .unwrap()
}

async fn cancel(client: &Client, base_url: &str, token: &str, id: &str) -> reqwest::Response {
    client
        .put(format!("{base_url}/tickets/{id}/cancel"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn create_then_list() {
    // new ticket is pending, listed first
    // and there is exactly one such ticket

    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "solicitante", "solicitante123").await;

    let mut older_ticket = maria_santos_ticket();
    older_ticket["patientName"] = json!("João Silva");
    create_ticket(&client, &base_url, &token, older_ticket).await;

    let response = client
        .post(format!("{base_url}/tickets"))
        .bearer_auth(&token)
        .json(&maria_santos_ticket())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response.json::<Value>().await.unwrap();
    assert_eq!(created["status"], "Pendente");
    assert_eq!(created["requesterIdentifier"], "solicitante");
    assert!(created["createdAt"].as_str().is_some());

    let tickets = fetch_tickets(&client, &base_url, &token, "").await;
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0]["id"], created["id"]);

    let matching = tickets
        .iter()
        .filter(|ticket| ticket["patientName"] == "Maria Santos" && ticket["status"] == "Pendente")
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn create_precaution_not_required_clears_type() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "solicitante", "solicitante123").await;

    let mut ticket = maria_santos_ticket();
    ticket["precautionType"] = json!("Isolamento por contato");

    let response = client
        .post(format!("{base_url}/tickets"))
        .bearer_auth(&token)
        .json(&ticket)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response.json::<Value>().await.unwrap();
    assert_eq!(created["precautionRequired"], "nao");
    assert_eq!(created["precautionType"], "");
}

#[tokio::test]
async fn create_precaution_required_without_type() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "solicitante", "solicitante123").await;

    let mut ticket = maria_santos_ticket();
    ticket["precautionRequired"] = json!("sim");

    let response = client
        .post(format!("{base_url}/tickets"))
        .bearer_auth(&token)
        .json(&ticket)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>().await.unwrap();
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn create_missing_patient_name() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "solicitante", "solicitante123").await;

    let mut ticket = maria_santos_ticket();
    ticket["patientName"] = json!("   ");

    let response = client
        .post(format!("{base_url}/tickets"))
        .bearer_auth(&token)
        .json(&ticket)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_by_executor_forbidden() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "executor", "executor123").await;

    let response = client
        .post(format!("{base_url}/tickets"))
        .bearer_auth(&token)
        .json(&maria_santos_ticket())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cancel_then_cancel_again() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "solicitante", "solicitante123").await;
    let id = create_ticket(&client, &base_url, &token, maria_santos_ticket()).await;

    let response = cancel(&client, &base_url, &token, &id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let ticket = response.json::<Value>().await.unwrap();
    assert_eq!(ticket["status"], "Cancelado");
    assert_eq!(ticket["patientName"], "Maria Santos");

    let response = cancel(&client, &base_url, &token, &id).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn cancel_by_other_user_forbidden() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "solicitante", "solicitante123").await;
    let id = create_ticket(&client, &base_url, &token, maria_santos_ticket()).await;

    let other_requester = create_token(
        "outro-solicitante",
        "requester",
        OffsetDateTime::now_utc() + Duration::from_secs(600),
    );
    let executor = login(&client, &base_url, "executor", "executor123").await;

    for other in [other_requester, executor] {
        let response = cancel(&client, &base_url, &other, &id).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = put_status(&client, &base_url, &other, &id, "Cancelado").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn executor_completes_transport() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let requester = login(&client, &base_url, "solicitante", "solicitante123").await;
    let executor = login(&client, &base_url, "executor", "executor123").await;
    let id = create_ticket(&client, &base_url, &requester, maria_santos_ticket()).await;

    let response = put_status(&client, &base_url, &executor, &id, "Concluído").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_status(&client, &base_url, &executor, &id, "Em Transporte").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ticket = response.json::<Value>().await.unwrap();
    assert_eq!(ticket["status"], "Em Transporte");

    let response = put_status(&client, &base_url, &executor, &id, "Concluído").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ticket = response.json::<Value>().await.unwrap();
    assert_eq!(ticket["status"], "Concluído");

    // terminal ticket never changes again
    let response = cancel(&client, &base_url, &requester, &id).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_status(&client, &base_url, &executor, &id, "Em Transporte").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn requester_and_admin_cannot_move_through_transport() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let requester = login(&client, &base_url, "solicitante", "solicitante123").await;
    let admin = login(&client, &base_url, "admin", "admin123").await;
    let id = create_ticket(&client, &base_url, &requester, maria_santos_ticket()).await;

    for token in [requester, admin] {
        let response = put_status(&client, &base_url, &token, &id, "Em Transporte").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn update_status_unknown_ticket() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let executor = login(&client, &base_url, "executor", "executor123").await;

    let response = put_status(
        &client,
        &base_url,
        &executor,
        &ObjectId::new().to_hex(),
        "Em Transporte",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_status(&client, &base_url, &executor, "malformed-id", "Em Transporte").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_search_and_pagination() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let token = login(&client, &base_url, "solicitante", "solicitante123").await;

    for (patient_name, transport_mode) in [
        ("Maria Santos", "maca"),
        ("João Silva", "cadeira-rodas"),
        ("Ana Maria Costa", "cadeira-rodas"),
    ] {
        let mut ticket = maria_santos_ticket();
        ticket["patientName"] = json!(patient_name);
        ticket["transportMode"] = json!(transport_mode);
        create_ticket(&client, &base_url, &token, ticket).await;
    }

    let tickets = fetch_tickets(&client, &base_url, &token, "?search=MARIA").await;
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0]["patientName"], "Ana Maria Costa");

    let tickets = fetch_tickets(&client, &base_url, &token, "?search=cadeira").await;
    assert_eq!(tickets.len(), 2);

    let tickets = fetch_tickets(&client, &base_url, &token, "?page_idx=1&page_size=2").await;
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0]["patientName"], "Maria Santos");
}

#[tokio::test]
async fn summary_counts_statuses() {
    let base_url = spawn_app().await;
    let client = Client::new();
    let requester = login(&client, &base_url, "solicitante", "solicitante123").await;
    let executor = login(&client, &base_url, "executor", "executor123").await;
    let admin = login(&client, &base_url, "admin", "admin123").await;

    let first = create_ticket(&client, &base_url, &requester, maria_santos_ticket()).await;
    let second = create_ticket(&client, &base_url, &requester, maria_santos_ticket()).await;
    create_ticket(&client, &base_url, &requester, maria_santos_ticket()).await;

    let response = put_status(&client, &base_url, &executor, &first, "Em Transporte").await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = cancel(&client, &base_url, &requester, &second).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{base_url}/tickets/summary"))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let summary = response.json::<Value>().await.unwrap();
    assert_eq!(
        summary,
        json!({
            "total": 3,
            "pending": 1,
            "inTransit": 1,
            "completed": 0,
            "cancelled": 1,
        })
    );
}
