mod common;
use common::*;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};

#[tokio::test]
async fn max_content_length_http() {
    // sending too large content should result in 413

    let base_url = spawn_app().await;
    let client = Client::new();

    // content does not matter, it should be rejected because of its size
    let content = "0".repeat(MAX_HTTP_CONTENT_LEN + 1);

    let response = client
        .post(format!("{base_url}/login"))
        .header(CONTENT_TYPE, "application/json")
        .body(content)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
