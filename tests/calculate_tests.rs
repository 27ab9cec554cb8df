use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use calculator_service::features::calculator::CalculatorService;
use calculator_service::server::{AppState, build_router};

fn app() -> Router {
    build_router(AppState::new(CalculatorService::new()))
}

async fn post_raw(path: &str, body: impl Into<Body>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app().oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    (status, bytes.to_vec())
}

async fn post_json(path: &str, payload: Value) -> (StatusCode, Value) {
    let (status, bytes) = post_raw(path, payload.to_string()).await;
    let body = serde_json::from_slice(&bytes).expect("response is JSON");
    (status, body)
}

#[tokio::test]
async fn adds_two_numbers() {
    let (status, body) = post_json(
        "/calculate",
        json!({"num1": 3, "num2": 4, "operation": "add"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"result": 7.0, "status": "success", "message": "3.0 + 4.0 = 7.0"})
    );
}

#[tokio::test]
async fn every_operation_uses_its_symbol() {
    let cases = [
        ("subtract", 6.0, "10.0 - 4.0 = 6.0"),
        ("multiply", 40.0, "10.0 × 4.0 = 40.0"),
        ("divide", 2.5, "10.0 ÷ 4.0 = 2.5"),
    ];

    for (operation, expected, message) in cases {
        let (status, body) = post_json(
            "/calculate",
            json!({"num1": 10, "num2": 4, "operation": operation}),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "{operation}");
        assert_eq!(body["result"], json!(expected), "{operation}");
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], message);
        assert!(body.get("error").is_none());
    }
}

#[tokio::test]
async fn numeric_strings_are_coerced() {
    let (status, body) = post_json(
        "/calculate",
        json!({"num1": " 1.5 ", "num2": "2e1", "operation": "multiply"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(30.0));
    assert_eq!(body["message"], "1.5 × 20.0 = 30.0");
}

#[tokio::test]
async fn missing_operands_default_to_zero() {
    let (status, body) = post_json("/calculate", json!({"operation": "subtract"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(0.0));
    assert_eq!(body["message"], "0.0 - 0.0 = 0.0");
}

#[tokio::test]
async fn divide_by_zero_is_rejected() {
    for num1 in [json!(0), json!(5), json!(-3.5)] {
        let (status, body) = post_json(
            "/calculate",
            json!({"num1": num1, "num2": 0, "operation": "divide"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Cannot divide by zero", "status": "error"})
        );
    }
}

#[tokio::test]
async fn divide_by_negative_zero_is_rejected() {
    let (status, body) = post_json(
        "/calculate",
        json!({"num1": 1, "num2": "-0", "operation": "divide"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot divide by zero");
}

#[tokio::test]
async fn unknown_operation_is_rejected() {
    let expected = json!({
        "error": "Invalid operation. Use: add, subtract, multiply, or divide",
        "status": "error"
    });

    for payload in [
        json!({"num1": 1, "num2": 2, "operation": "modulo"}),
        json!({"num1": 1, "num2": 2}),
        json!({"num1": 1, "num2": 2, "operation": 7}),
        json!({"num1": 1, "num2": 2, "operation": "ADD"}),
    ] {
        let (status, body) = post_json("/calculate", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn non_numeric_operand_is_rejected() {
    let (status, body) = post_json(
        "/calculate",
        json!({"num1": "abc", "num2": 2, "operation": "add"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid number format", "status": "error"})
    );
}

#[tokio::test]
async fn overflowing_number_literal_is_rejected() {
    let (status, bytes) = post_raw(
        "/calculate",
        r#"{"num1": 1e400, "num2": 2, "operation": "add"}"#.to_string(),
    )
    .await;
    let body: Value = serde_json::from_slice(&bytes).expect("response is JSON");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid number format", "status": "error"})
    );
}

#[tokio::test]
async fn operands_are_checked_before_the_operation() {
    let (status, body) = post_json(
        "/calculate",
        json!({"num1": 1, "num2": "x", "operation": "modulo"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid number format");
}

#[tokio::test]
async fn null_operand_is_reported_as_error() {
    let (status, body) = post_json(
        "/calculate",
        json!({"num1": null, "num2": 2, "operation": "add"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["error"],
        "num1 must be a number or a numeric string, not null"
    );
    assert!(body.get("result").is_none());
}

#[tokio::test]
async fn missing_body_is_rejected() {
    for raw in ["", "{}", "not json", "[1, 2]", "null", "42"] {
        let (status, bytes) = post_raw("/calculate", raw.to_string()).await;
        let body: Value = serde_json::from_slice(&bytes).expect("response is JSON");

        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw:?}");
        assert_eq!(
            body,
            json!({"error": "No data provided", "status": "error"}),
            "{raw:?}"
        );
    }
}

#[tokio::test]
async fn responses_are_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .body(Body::from(r#"{"operation":"divide","num2":0}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let payload = r#"{"num1":0.1,"num2":0.2,"operation":"add"}"#;

    let (first_status, first) = post_raw("/calculate", payload.to_string()).await;
    let (second_status, second) = post_raw("/calculate", payload.to_string()).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(first_status, second_status);
    assert_eq!(first, second);

    let body: Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(body["message"], "0.1 + 0.2 = 0.30000000000000004");
}
