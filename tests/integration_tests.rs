use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use calc_service::api::{AppState, router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(method: Method, uri: &str, content_type: Option<&str>, body: Body) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(body).expect("request");

    router(AppState::new("1.0.0"))
        .oneshot(request)
        .await
        .expect("infallible router")
}

async fn get(uri: &str) -> Response {
    send(Method::GET, uri, None, Body::empty()).await
}

async fn post_json(uri: &str, payload: Value) -> Response {
    send(
        Method::POST,
        uri,
        Some("application/json"),
        Body::from(payload.to_string()),
    )
    .await
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_root_endpoint_returns_info() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["message"], "Calculation Service API");
    assert_eq!(data["version"], "1.0.0");
    assert_eq!(data["endpoints"], json!(["/health", "/calc/summarize"]));
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let data = body_json(response).await;
    assert_eq!(data["status"], "ok");
    assert!(!data["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_endpoint_methods() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = send(method.clone(), "/health", None, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn test_summarize_valid_request() {
    let response = post_json("/calc/summarize", json!({"values": [1.0, 2.0, 3.0, 4.0, 5.0]})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data, json!({"count": 5, "mean": 3.0, "min": 1.0, "max": 5.0}));
}

#[tokio::test]
async fn test_summarize_single_value() {
    let response = post_json("/calc/summarize", json!({"values": [42.5]})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["count"], 1);
    assert_eq!(data["mean"], 42.5);
    assert_eq!(data["min"], 42.5);
    assert_eq!(data["max"], 42.5);
}

#[tokio::test]
async fn test_summarize_negative_numbers() {
    let response = post_json("/calc/summarize", json!({"values": [-5.0, -2.0, 0.0, 3.0, 8.0]})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["count"], 5);
    assert_eq!(data["mean"], 0.8);
    assert_eq!(data["min"], -5.0);
    assert_eq!(data["max"], 8.0);
}

#[tokio::test]
async fn test_summarize_floating_point_precision() {
    let response = post_json("/calc/summarize", json!({"values": [0.1, 0.2, 0.3]})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["count"], 3);
    assert!((data["mean"].as_f64().unwrap() - 0.2).abs() < 1e-10);
    assert_eq!(data["min"], 0.1);
    assert_eq!(data["max"], 0.3);
}

#[tokio::test]
async fn test_summarize_integer_values() {
    let cases = [
        (json!([1, 2, 3]), 3, 2.0, 1.0, 3.0),
        (json!([10, 20, 30, 40]), 4, 25.0, 10.0, 40.0),
        (json!([-10, 0, 10]), 3, 0.0, -10.0, 10.0),
        (json!([100, 200, 300, 400, 500]), 5, 300.0, 100.0, 500.0),
        (json!([1e6, 2e6, 3e6]), 3, 2e6, 1e6, 3e6),
    ];

    for (values, count, mean, min, max) in cases {
        let response = post_json("/calc/summarize", json!({ "values": values })).await;
        assert_eq!(response.status(), StatusCode::OK);

        let data = body_json(response).await;
        assert_eq!(data["count"], count);
        assert_eq!(data["mean"], mean);
        assert_eq!(data["min"], min);
        assert_eq!(data["max"], max);
    }
}

#[tokio::test]
async fn test_summarize_empty_list_is_rejected() {
    let response = post_json("/calc/summarize", json!({"values": []})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let data = body_json(response).await;
    assert_eq!(data["detail"], "Cannot summarize an empty list");
}

#[tokio::test]
async fn test_summarize_missing_values_field() {
    let response = post_json("/calc/summarize", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let data = body_json(response).await;
    assert!(data["detail"].is_string());
}

#[tokio::test]
async fn test_summarize_invalid_data_types() {
    let payloads = [
        json!({"values": ["1", "2", "3"]}),
        json!({"values": [1, "2", 3]}),
        json!({"values": [1, true, 3]}),
        json!({"values": [1, null, 3]}),
        json!({"values": "1, 2, 3"}),
    ];

    for payload in payloads {
        let response = post_json("/calc/summarize", payload.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "{payload}"
        );

        let data = body_json(response).await;
        assert!(data["detail"].is_string());
    }
}

#[tokio::test]
async fn test_summarize_content_type_validation() {
    let response = send(
        Method::POST,
        "/calc/summarize",
        Some("text/plain"),
        Body::from("invalid data"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(
        Method::POST,
        "/calc/summarize",
        None,
        Body::from(r#"{"values": [1, 2, 3]}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json() {
    let response = send(
        Method::POST,
        "/calc/summarize",
        Some("application/json"),
        Body::from("invalid json{"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let data = body_json(response).await;
    assert!(data["detail"].is_string());
}

#[tokio::test]
async fn test_summarize_wrong_method() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = send(method.clone(), "/calc/summarize", None, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn test_nonexistent_endpoint() {
    let response = get("/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let data = body_json(response).await;
    assert_eq!(data["detail"], "The route '/nonexistent' was not found");

    let response = send(Method::POST, "/nonexistent", None, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
