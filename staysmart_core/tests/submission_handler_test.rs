//! Validation and degraded-mode behavior of `POST /api/schedule-demo`

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use staysmart_core::{create_app, AppState, Mailer};
use tower::ServiceExt;

fn unconfigured_app() -> axum::Router {
    create_app(AppState::new(Mailer::Unconfigured))
}

fn valid_payload() -> Value {
    json!({
        "name": "Ravi Kumar",
        "email": "ravi@example.com",
        "company": "Kumar Stays",
        "phone": "+14155550100",
        "date": "2026-03-16",
        "time": "10:00 AM",
        "message": "Interested in the multi-property plan"
    })
}

async fn post_schedule_demo(app: axum::Router, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/schedule-demo")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn missing_required_fields_return_400_with_field_message() {
    for field in ["name", "email", "date", "time"] {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove(field);

        let (status, body) = post_schedule_demo(unconfigured_app(), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {}", field);
        let message = body["error"].as_str().unwrap();
        assert!(
            message.contains(field),
            "expected error {:?} to mention {}",
            message,
            field
        );
    }
}

#[tokio::test]
async fn blank_required_fields_count_as_missing() {
    let mut payload = valid_payload();
    payload["name"] = json!("   ");

    let (status, body) = post_schedule_demo(unconfigured_app(), payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn malformed_emails_return_400() {
    for email in ["foo", "foo@", "@bar.com"] {
        let mut payload = valid_payload();
        payload["email"] = json!(email);

        let (status, body) = post_schedule_demo(unconfigured_app(), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "email {:?}", email);
        assert_eq!(body["error"], "Please provide a valid email address");
    }
}

#[tokio::test]
async fn malformed_date_and_unknown_slot_return_400() {
    let mut payload = valid_payload();
    payload["date"] = json!("16/03/2026");
    let (status, _) = post_schedule_demo(unconfigured_app(), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut payload = valid_payload();
    payload["time"] = json!("01:00 PM");
    let (status, body) = post_schedule_demo(unconfigured_app(), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("time"));
}

#[tokio::test]
async fn non_json_body_returns_400_in_error_shape() {
    let response = unconfigured_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/schedule-demo")
                .header("content-type", "application/json")
                .body(Body::from("this is not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unconfigured_mailer_acknowledges_and_echoes_the_request() {
    let (status, body) = post_schedule_demo(unconfigured_app(), valid_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("emailId").is_none());
    assert_eq!(body["data"]["name"], "Ravi Kumar");
    assert_eq!(body["data"]["date"], "2026-03-16");
    assert_eq!(body["data"]["time"], "10:00 AM");
}

#[tokio::test]
async fn sunday_dates_are_accepted_by_the_server() {
    // The client controller refuses Sundays at selection time; the server
    // deliberately does not.
    let mut payload = valid_payload();
    payload["date"] = json!("2026-03-15");

    let (status, body) = post_schedule_demo(unconfigured_app(), payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["date"], "2026-03-15");
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    let payload = json!({
        "name": "Ravi Kumar",
        "email": "ravi@example.com",
        "date": "2026-03-16",
        "time": "09:00 AM"
    });

    let (status, body) = post_schedule_demo(unconfigured_app(), payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"].get("company").is_none());
}

#[tokio::test]
async fn root_and_health_report_service_state() {
    let response = unconfigured_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = unconfigured_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["email_delivery"], "degraded");
}

#[tokio::test]
async fn stats_endpoint_counts_requests() {
    let app = unconfigured_app();

    let (status, _) = post_schedule_demo(app.clone(), valid_payload()).await;
    assert_eq!(status, StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["data"]["total_requests"].as_u64().unwrap() >= 1);
}
