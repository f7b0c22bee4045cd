//! Submission of the final record collection

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::SaveError;
use crate::models::MovieRecord;

/// Default save endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dummyendpoint.com/save";

/// Default timeout for the save request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Successful answer from the persistence endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub status: u16,
    pub body: String,
}

/// Destination for the whole record collection.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Submit all records in a single request. No retry, no chunking.
    async fn submit(&self, records: &[MovieRecord]) -> Result<SaveReceipt, SaveError>;
}

/// Posts the collection as a JSON array to a fixed endpoint.
pub struct HttpSink {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSink {
    pub fn new(client: Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecordSink for HttpSink {
    async fn submit(&self, records: &[MovieRecord]) -> Result<SaveReceipt, SaveError> {
        let payload =
            serde_json::to_vec(records).map_err(|e| SaveError::Unsendable(e.to_string()))?;

        tracing::debug!(
            "Submitting {} records ({} bytes) to {}",
            records.len(),
            payload.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SaveError::NoResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(SaveError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        Ok(SaveReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

/// Split transport errors into "never sent" and "sent, nothing came back".
fn classify_send_error(e: reqwest::Error) -> SaveError {
    if e.is_builder() {
        SaveError::Unsendable(e.to_string())
    } else {
        SaveError::NoResponse(e.to_string())
    }
}

/// Extract the `message` field of a JSON error body.
///
/// Non-string values are shown as JSON text.
fn rejection_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(m) if m.is_empty() => None,
        serde_json::Value::String(m) => Some(m.clone()),
        other => Some(other.to_string()),
    }
}
