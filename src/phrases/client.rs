use std::fmt;

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    StatusCode,
};
use serde_json::Value;

use super::{errors::PhraseError, models::chat_payload::ChatPayload};

pub const API_KEY_HEADER: &str = "api-key";

/// What a single phrase request came back with.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueOutcome {
    /// HTTP 200, body decoded as opaque JSON.
    Success(Value),
    /// Any other status, body kept as raw text.
    Failure { status: u16, text: String },
}

impl IssueOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for IssueOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(body) => write!(f, "Response: {}", body),
            Self::Failure { status, text } => write!(f, "Error: {} {}", status, text),
        }
    }
}

/// Sends chat payloads to a single endpoint using an `api-key` header.
///
/// Every call to [`PhraseClient::issue`] is exactly one POST. There is no
/// retry and no timeout beyond what the underlying `reqwest::Client` has.
#[derive(Debug, Clone)]
pub struct PhraseClient {
    endpoint: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl PhraseClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        http_client: Option<reqwest::Client>,
    ) -> PhraseClient {
        PhraseClient {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            http_client: http_client.unwrap_or_default(),
        }
    }

    fn headers(&self) -> Result<HeaderMap, PhraseError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(&self.api_key)?);

        Ok(headers)
    }

    pub async fn issue(&self, payload: &ChatPayload) -> Result<IssueOutcome, PhraseError> {
        let headers = self.headers()?;

        tracing::info!(
            endpoint = %self.endpoint,
            messages = payload.messages.len(),
            "sending phrase request"
        );

        let res = self
            .http_client
            .post(&self.endpoint)
            .headers(headers)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%e, "phrase request failed");
                e
            })?;

        let status = res.status();
        let text = res.text().await?;

        tracing::info!(%status, "phrase request completed");

        match status {
            StatusCode::OK => match serde_json::from_str(&text) {
                Ok(body) => Ok(IssueOutcome::Success(body)),
                Err(e) => {
                    tracing::error!(%text, "phrase response is not json");
                    Err(PhraseError::Decode(e))
                }
            },
            _ => Ok(IssueOutcome::Failure {
                status: status.as_u16(),
                text,
            }),
        }
    }
}
