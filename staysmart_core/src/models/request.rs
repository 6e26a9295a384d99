//! Request and response envelopes

use serde::Serialize;

use crate::models::demo::DemoRequest;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

/// Public contract of `POST /api/schedule-demo`.
///
/// A delivered notification carries the provider's message id; in degraded
/// mode the validated request is echoed back instead.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "emailId", skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DemoRequest>,
}

impl SubmissionResponse {
    pub fn submitted(email_id: String) -> Self {
        Self {
            success: true,
            message: "Demo request submitted successfully".to_string(),
            email_id: Some(email_id),
            data: None,
        }
    }

    pub fn received(request: DemoRequest) -> Self {
        Self {
            success: true,
            message: "Demo request received (email delivery not configured)".to_string(),
            email_id: None,
            data: Some(request),
        }
    }
}
