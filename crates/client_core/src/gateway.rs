//! Submission gateway: one HTTP call per submission, every result folded into an [`Outcome`].

use std::error::Error as StdError;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    error::SubmissionFailure,
    protocol::{HealthStatus, OutboundRequest, Outcome, SendReceipt, ServiceErrorBody},
};
use tracing::{info, warn};

use crate::config::ClientSettings;

#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Never fails past this boundary; transport and server errors come back as `Err` outcomes.
    async fn send(&self, request: OutboundRequest) -> Outcome;
}

pub struct HttpSubmissionGateway {
    http: Client,
    endpoint_url: String,
    health_url: String,
}

impl HttpSubmissionGateway {
    pub fn new(settings: &ClientSettings) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build HTTP client")?;
        Ok(Self::with_client(http, settings))
    }

    pub fn with_client(http: Client, settings: &ClientSettings) -> Self {
        Self {
            http,
            endpoint_url: settings.endpoint_url(),
            health_url: settings.health_url(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub async fn health_check(&self) -> anyhow::Result<HealthStatus> {
        let health = self
            .http
            .get(&self.health_url)
            .send()
            .await
            .with_context(|| format!("failed to reach mail service at {}", self.health_url))?
            .error_for_status()?
            .json::<HealthStatus>()
            .await
            .context("mail service returned a malformed health response")?;
        Ok(health)
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn send(&self, request: OutboundRequest) -> Outcome {
        info!(
            endpoint = %self.endpoint_url,
            enhance_content = request.enhance_content,
            "dispatching email submission"
        );

        let response = match self
            .http
            .post(&self.endpoint_url)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                let failure = classify_send_error(&err);
                warn!(error = %err, "email submission failed before a response: {failure}");
                return Err(failure);
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(err) => {
                warn!(%status, error = %err, "failed to read mail service response body");
                Vec::new()
            }
        };

        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice::<Value>(&body).unwrap_or_else(|err| {
                warn!(%status, error = %err, "mail service response body is not JSON");
                Value::Null
            })
        };

        if status.is_success() {
            let receipt = SendReceipt::from_value(&body);
            info!(%status, task_id = %receipt.task_id, "email submission accepted");
            return Ok(receipt);
        }

        let error_body = ServiceErrorBody::from_value(&body);
        warn!(
            %status,
            message = error_body.message.as_deref().unwrap_or_default(),
            details = error_body.error_details.as_deref().unwrap_or_default(),
            "mail service rejected submission"
        );
        Err(SubmissionFailure::server_rejected(
            status.as_u16(),
            error_body.message,
        ))
    }
}

/// Builder errors mean the request never left; anything else before a response is a lost reply.
fn classify_send_error(err: &reqwest::Error) -> SubmissionFailure {
    let detail = error_chain(err);
    if err.is_builder() {
        SubmissionFailure::RequestSetupFailed { detail }
    } else {
        SubmissionFailure::NoResponse { detail }
    }
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
