//! HTTP transport for the form controller

use async_trait::async_trait;

use crate::form::controller::{SubmitDemo, SubmitError};
use crate::models::DemoRequest;

/// Posts a serialized `DemoRequest` to the submission endpoint.
#[derive(Clone)]
pub struct HttpSubmitter {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmitDemo for HttpSubmitter {
    async fn submit(&self, request: &DemoRequest) -> Result<(), SubmitError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        // Surface the server's `error` field when the body carries one.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|value| value.as_str())
                    .map(str::to_string)
            });

        Err(SubmitError::Rejected(message))
    }
}
