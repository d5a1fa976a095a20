mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── CREATE ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_success() {
    let server = common::make_server(common::create_test_state());

    let response = server.post("/users").json(&common::alice()).await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.text().is_empty());

    let users = server.get("/users").await.json::<Value>();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "Alice");
    assert_eq!(users[0]["email"], "a@x.com");
    assert!(users[0]["_id"].is_string());
}

#[tokio::test]
async fn test_create_user_missing_fields_rejected() {
    let server = common::make_server(common::create_test_state());

    for body in [
        json!({ "email": "a@x.com" }),
        json!({ "name": "Alice" }),
        json!({ "name": "", "email": "a@x.com" }),
        json!({ "name": "Alice", "email": "" }),
        json!({ "name": null, "email": "a@x.com" }),
        json!({}),
    ] {
        let response = server.post("/users").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().is_empty(), "body for {body} should be empty");
    }

    let users = server.get("/users").await.json::<Value>();
    assert!(users.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_wrong_type_rejected() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/users")
        .json(&json!({ "name": 42, "email": "a@x.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_create_user_non_json_body_rejected() {
    let server = common::make_server(common::create_test_state());

    let response = server.post("/users").text("name=Alice&email=a@x.com").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_create_user_allows_duplicate_email() {
    let server = common::make_server(common::create_test_state());

    server
        .post("/users")
        .json(&common::alice())
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/users")
        .json(&json!({ "name": "Alice Again", "email": "a@x.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let users = server.get("/users").await.json::<Value>();
    assert_eq!(users.as_array().unwrap().len(), 2);
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users_empty() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/users").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_users_returns_all_in_creation_order() {
    let server = common::make_server(common::create_test_state());

    for name in ["Alice", "Bob", "Carol"] {
        server
            .post("/users")
            .json(&json!({ "name": name, "email": format!("{name}@x.com") }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/users").await;

    response.assert_status_ok();
    let names: Vec<String> = response
        .json::<Value>()
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}
