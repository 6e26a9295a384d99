//! Demo-request submission handler

use axum::{extract::State, response::IntoResponse, Json};
use tracing::{info, warn};

use crate::{
    email::{template, Mailer},
    error::{AppError, Result},
    extractors::AppJson,
    models::{DemoRequest, DemoRequestPayload, SubmissionResponse},
    AppState,
};

/// `POST /api/schedule-demo`
///
/// Validates the payload, then either forwards the notification through the
/// configured provider or, with an unconfigured mailer, acknowledges the
/// request without sending anything.
pub async fn handle_schedule_demo(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DemoRequestPayload>,
) -> Result<impl IntoResponse> {
    let request = DemoRequest::try_from(payload).map_err(AppError::BadRequest)?;

    info!(
        name = %request.name,
        date = %request.date,
        time = request.time.as_str(),
        "demo request received"
    );

    match &state.mailer {
        Mailer::Unconfigured => {
            warn!("email provider not configured - demo request accepted without notification");
            Ok(Json(SubmissionResponse::received(request)))
        }
        Mailer::Configured(client) => {
            let html = template::render_demo_notification(&request);
            let email_id = client
                .send_demo_notification(&request, &html)
                .await
                .map_err(|err| AppError::EmailDelivery(err.to_string()))?;
            Ok(Json(SubmissionResponse::submitted(email_id)))
        }
    }
}
