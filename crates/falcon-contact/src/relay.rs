//! Email relay
//!
//! The relay is an external service that takes a template payload and mails
//! it to a fixed destination. [`EmailRelay`] is the seam; [`EmailJsRelay`]
//! talks to the EmailJS REST endpoint.

use serde::{Deserialize, Serialize};
use std::future::Future;
use url::Url;

use crate::error::RelayError;

/// EmailJS send endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers the relay needs on every call. Configured once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Template variables, keyed the way the relay template expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePayload {
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub interest: String,
    pub message: String,
    pub to_email: String,
}

/// One relay call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub payload: TemplatePayload,
}

impl RelayRequest {
    pub fn new(credentials: &RelayCredentials, payload: TemplatePayload) -> Self {
        Self {
            service_id: credentials.service_id.clone(),
            template_id: credentials.template_id.clone(),
            public_key: credentials.public_key.clone(),
            payload,
        }
    }

    /// JSON body accepted by the EmailJS REST API.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": self.payload,
        })
    }
}

/// Sends a message through the relay.
///
/// Resolves once the relay accepts or rejects the message. Implementations
/// must not retry; one call is one attempt.
pub trait EmailRelay: Send + Sync {
    fn send(&self, request: RelayRequest) -> impl Future<Output = Result<(), RelayError>> + Send;
}

#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: Url,
}

impl EmailJsRelay {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl EmailRelay for EmailJsRelay {
    fn send(&self, request: RelayRequest) -> impl Future<Output = Result<(), RelayError>> + Send {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        async move { post_to_relay(client, endpoint, request).await }
    }
}

async fn post_to_relay(
    client: reqwest::Client,
    endpoint: Url,
    request: RelayRequest,
) -> Result<(), RelayError> {
    tracing::debug!(
        endpoint = %endpoint,
        service_id = %request.service_id,
        template_id = %request.template_id,
        "Posting message to relay"
    );

    let response = client
        .post(endpoint)
        .json(&request.to_json())
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(RelayError::Rejected {
        status: status.as_u16(),
        body,
    })
}
