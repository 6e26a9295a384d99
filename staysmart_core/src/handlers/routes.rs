//! HTTP routes

use axum::{extract::State, response::IntoResponse, routing::get, routing::post, Json, Router};

use crate::{handlers::demo::handle_schedule_demo, models::request::ApiResponse, AppState};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/api/stats", get(handle_stats))
        .route("/api/schedule-demo", post(handle_schedule_demo))
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "message": "StaySmart demo-scheduling API",
        "endpoints": {
            "health": "/health",
            "stats": "/api/stats",
            "schedule_demo": "/api/schedule-demo"
        }
    })))
}

async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "email_delivery": state.mailer.mode(),
        "version": state.version
    })))
}

async fn handle_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(state.metrics.get_snapshot()))
}
