//! HTTP client for the email-delivery provider

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EmailConfig;
use crate::models::DemoRequest;

#[derive(Error, Debug)]
pub enum EmailClientError {
    #[error("email provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("email provider returned {status}: {detail}")]
    Provider { status: u16, detail: String },
}

/// Send-once client for a Resend-style delivery API.
///
/// One POST per notification, no retries. The base URL is taken from
/// configuration so tests can point the client at a local stub.
#[derive(Clone)]
pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    from_address: String,
    notification_address: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: String,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl EmailClient {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_seconds))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            notification_address: config.notification_address.clone(),
        })
    }

    /// Sends the operator notification for one demo request and returns the
    /// provider's message id. Reply-to is set to the submitter so the
    /// operator can answer directly.
    pub async fn send_demo_notification(
        &self,
        request: &DemoRequest,
        html: &str,
    ) -> Result<String, EmailClientError> {
        let body = SendEmailRequest {
            from: &self.from_address,
            to: vec![&self.notification_address],
            reply_to: &request.email,
            subject: format!("New Demo Request from {}", request.name),
            html,
        };

        let response = self
            .http_client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            let parsed: SendEmailResponse = response.json().await?;
            tracing::info!(email_id = %parsed.id, "demo notification delivered");
            Ok(parsed.id)
        } else {
            let status = response.status().as_u16();
            let detail = response.text().await.unwrap_or_default();
            Err(EmailClientError::Provider { status, detail })
        }
    }
}
