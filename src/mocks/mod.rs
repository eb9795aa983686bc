//! Mock implementations for testing.
//!
//! Provides a scriptable transport that records every form request and
//! replays queued responses through the same payload parsing the real
//! transport uses.

use crate::errors::{ResponseError, SlackError, SlackResult};
use crate::transport::{parse_payload, FormRequest, HttpTransport};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;

/// Mock response configuration
#[derive(Debug)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// Delay before responding
    pub delay_ms: Option<u64>,
    /// Error to return instead of a body
    pub error: Option<SlackError>,
}

impl MockResponse {
    /// Create a minimal successful response
    pub fn ok() -> Self {
        Self::body(r#"{"ok":true}"#)
    }

    /// Create a successful response with a raw body
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            delay_ms: None,
            error: None,
        }
    }

    /// Create a successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::body(serde_json::to_string(data).unwrap())
    }

    /// Create an `ok=false` response carrying a remote error code
    pub fn slack_error(error_code: &str) -> Self {
        Self::body(format!(r#"{{"ok":false,"error":"{}"}}"#, error_code))
    }

    /// Create a response that fails with a transport-level error
    pub fn error(error: SlackError) -> Self {
        Self {
            body: String::new(),
            delay_ms: None,
            error: Some(error),
        }
    }

    /// Add a delay before the response is returned
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request method
    pub method: String,
    /// Form fields in send order
    pub fields: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up a form field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The operation name, taken from the URL's final path segment
    pub fn operation(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
    default_body: Mutex<Option<String>>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            default_body: Mutex::new(None),
        }
    }

    /// Queue a response
    pub fn enqueue(&self, response: MockResponse) {
        self.responses.lock().push_back(response);
    }

    /// Queue several responses in order
    pub fn enqueue_all(&self, responses: impl IntoIterator<Item = MockResponse>) {
        self.responses.lock().extend(responses);
    }

    /// Set a body to serve whenever the queue is empty
    pub fn set_default_body(&self, body: impl Into<String>) {
        *self.default_body.lock() = Some(body.into());
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Get remaining queued response count
    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }

    fn next_response(&self) -> SlackResult<MockResponse> {
        if let Some(response) = self.responses.lock().pop_front() {
            return Ok(response);
        }
        if let Some(body) = self.default_body.lock().clone() {
            return Ok(MockResponse::body(body));
        }
        Err(ResponseError::UnexpectedResponse {
            message: "No mock response configured".to_string(),
        }
        .into())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send_form(&self, request: FormRequest) -> SlackResult<Value> {
        self.requests.lock().push(RecordedRequest {
            url: request.url.clone(),
            method: request.method.to_string(),
            fields: request.fields.clone(),
        });

        let response = self.next_response()?;

        if let Some(delay) = response.delay_ms {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }

        if let Some(error) = response.error {
            return Err(error);
        }

        parse_payload(&response.body)
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(url: &str) -> FormRequest {
        FormRequest::post(url).field("channel", "C1")
    }

    #[tokio::test]
    async fn test_mock_replays_queued_bodies_in_order() {
        let transport = MockHttpTransport::new();
        transport.enqueue(MockResponse::body(r#"{"ok":true,"n":1}"#));
        transport.enqueue(MockResponse::body(r#"{"ok":true,"n":2}"#));

        let first = transport.send_form(form("https://slack.com/api/a")).await.unwrap();
        let second = transport.send_form(form("https://slack.com/api/b")).await.unwrap();
        assert_eq!(first["n"], 1);
        assert_eq!(second["n"], 2);
        assert_eq!(transport.remaining(), 0);
    }

    #[tokio::test]
    async fn test_mock_records_fields_and_operation() {
        let transport = MockHttpTransport::new();
        transport.set_default_body(r#"{"ok":true}"#);

        transport
            .send_form(form("https://slack.com/api/chat.postMessage"))
            .await
            .unwrap();

        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.operation(), "chat.postMessage");
        assert_eq!(recorded.field("channel"), Some("C1"));
        assert_eq!(recorded.field("missing"), None);
    }

    #[tokio::test]
    async fn test_mock_translates_remote_rejection() {
        let transport = MockHttpTransport::new();
        transport.enqueue(MockResponse::slack_error("invalid_auth"));

        let err = transport
            .send_form(form("https://slack.com/api/auth.test"))
            .await
            .unwrap_err();
        assert_eq!(err.remote_code(), Some("invalid_auth"));
    }

    #[tokio::test]
    async fn test_mock_without_responses_is_an_error() {
        let transport = MockHttpTransport::new();
        let err = transport
            .send_form(form("https://slack.com/api/api.test"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "SLACK_RESPONSE");
    }
}
