//! HTTP transport layer for the Slack client.
//!
//! Provides low-level HTTP communication with the Slack API,
//! including form encoding, response parsing, and error translation.

use crate::errors::{NetworkError, RequestError, ResponseError, SlackError, SlackResult};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP transport trait for making API requests
///
/// Every Slack operation is one form-encoded POST; the transport returns
/// the parsed JSON payload after the `ok` envelope has been checked.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a form-encoded request and receive the response payload
    async fn send_form(&self, request: FormRequest) -> SlackResult<Value>;
}

/// Form-encoded request
#[derive(Debug, Clone)]
pub struct FormRequest {
    /// HTTP method
    pub method: Method,
    /// URL path
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields
    pub fields: Vec<(String, String)>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl FormRequest {
    /// Create a new form POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: HeaderMap::new(),
            fields: Vec::new(),
            timeout: None,
        }
    }

    /// Add a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add multiple form fields
    pub fn fields(mut self, fields: impl IntoIterator<Item = (String, String)>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Convert a serializable request into form fields.
///
/// `None` fields are dropped, booleans are wired as `1`/`0`, and nested
/// structures are carried as embedded JSON.
pub fn to_form_fields<T: Serialize>(request: &T) -> SlackResult<Vec<(String, String)>> {
    let value = serde_json::to_value(request).map_err(|e| RequestError::InvalidFormData {
        message: e.to_string(),
    })?;

    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Ok(Vec::new()),
        _ => return Err(RequestError::ParametersNotObject.into()),
    };

    let mut fields = Vec::with_capacity(object.len());
    for (name, value) in object {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => if b { "1" } else { "0" }.to_string(),
            Value::Number(n) => n.to_string(),
            other => serde_json::to_string(&other).map_err(|e| RequestError::InvalidFormData {
                message: e.to_string(),
            })?,
        };
        fields.push((name, text));
    }
    Ok(fields)
}

/// Parse a response body, translating `ok=false` into an API error.
///
/// Returns the full payload on success so callers can deserialize into
/// their operation-specific response types.
pub fn parse_payload(body: &str) -> SlackResult<Value> {
    let json: Value = serde_json::from_str(body).map_err(|e| {
        SlackError::Response(ResponseError::DeserializationError {
            message: e.to_string(),
        })
    })?;

    let ok = json
        .get("ok")
        .and_then(Value::as_bool)
        .ok_or(SlackError::Response(ResponseError::MissingOkField))?;

    if !ok {
        let code = json
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error");
        return Err(SlackError::Api {
            code: code.to_string(),
        });
    }

    Ok(json)
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn send_form(&self, request: FormRequest) -> SlackResult<Value> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .form(&request.fields)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Request returned non-success status");
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        debug!(response_body = %body, "Received response");

        parse_payload(&body)
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_form_request_builder() {
        let request = FormRequest::post("https://slack.com/api/test")
            .field("channel", "C123")
            .field("text", "Hello");

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.fields.len(), 2);
        assert_eq!(
            request.fields[0],
            ("channel".to_string(), "C123".to_string())
        );
    }

    #[derive(Serialize)]
    struct SampleRequest {
        channel: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        exclude_archived: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    }

    #[test]
    fn test_to_form_fields_drops_absent_options() {
        let fields = to_form_fields(&SampleRequest {
            channel: "C42".to_string(),
            count: Some(100),
            exclude_archived: None,
            topic: None,
        })
        .unwrap();

        assert_eq!(fields.len(), 2);
        assert!(fields.contains(&("channel".to_string(), "C42".to_string())));
        assert!(fields.contains(&("count".to_string(), "100".to_string())));
    }

    #[test]
    fn test_to_form_fields_wires_bools_as_ints() {
        let fields = to_form_fields(&SampleRequest {
            channel: "C42".to_string(),
            count: None,
            exclude_archived: Some(true),
            topic: None,
        })
        .unwrap();

        assert!(fields.contains(&("exclude_archived".to_string(), "1".to_string())));
    }

    #[test]
    fn test_to_form_fields_rejects_non_object() {
        let result = to_form_fields(&"just a string");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_payload_success() {
        let payload = parse_payload(r#"{"ok":true,"channel":"C1"}"#).unwrap();
        assert_eq!(payload["channel"], "C1");
    }

    #[test]
    fn test_parse_payload_error_keeps_remote_code() {
        let err = parse_payload(r#"{"ok":false,"error":"channel_not_found"}"#).unwrap_err();
        assert_eq!(err.remote_code(), Some("channel_not_found"));
    }

    #[test]
    fn test_parse_payload_requires_ok_field() {
        let err = parse_payload(r#"{"channel":"C1"}"#).unwrap_err();
        assert!(matches!(
            err,
            SlackError::Response(ResponseError::MissingOkField)
        ));
    }
}
