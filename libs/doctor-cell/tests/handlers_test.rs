// libs/doctor-cell/tests/handlers_test.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use doctor_cell::doctor_routes;
use shared_utils::test_utils::{empty_request, json_request, read_json, TestConfig};

fn doctor_body(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Dr. Ciara Nolan",
        "specialization": "Cardiology",
        "phone": "555-0177"
    })
}

#[tokio::test]
async fn test_create_doctor_defaults_to_available() {
    let app = doctor_routes(TestConfig::default().database());

    let response = app
        .oneshot(json_request("POST", "/", doctor_body(1)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["is_available"], true);
    assert_eq!(body["specialization"], "Cardiology");
}

#[tokio::test]
async fn test_create_doctor_honours_explicit_flag() {
    let app = doctor_routes(TestConfig::default().database());

    let mut body = doctor_body(1);
    body["is_available"] = json!(false);

    let response = app.oneshot(json_request("POST", "/", body)).await.unwrap();

    assert_eq!(read_json(response).await["is_available"], false);
}

#[tokio::test]
async fn test_patch_availability() {
    let app = doctor_routes(TestConfig::default().database());

    app.clone()
        .oneshot(json_request("POST", "/", doctor_body(7)))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/7/availability", json!({ "is_available": false })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["is_available"], false);

    let response = app.oneshot(empty_request("GET", "/7")).await.unwrap();
    assert_eq!(read_json(response).await["is_available"], false);
}

#[tokio::test]
async fn test_patch_availability_unknown_doctor_is_404() {
    let app = doctor_routes(TestConfig::default().database());

    let response = app
        .oneshot(json_request("PATCH", "/9/availability", json!({ "is_available": true })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({ "error": "Doctor 9 not found" }));
}

#[tokio::test]
async fn test_update_and_delete_doctor() {
    let app = doctor_routes(TestConfig::default().database());

    app.clone()
        .oneshot(json_request("POST", "/", doctor_body(2)))
        .await
        .unwrap();

    let mut replacement = doctor_body(2);
    replacement["name"] = json!("Dr. Ciara Nolan-Hayes");
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/2", replacement))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["name"], "Dr. Ciara Nolan-Hayes");

    let response = app.clone().oneshot(empty_request("DELETE", "/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(read_json(response).await, json!([]));
}
