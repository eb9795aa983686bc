//! Transport tests.
//!
//! Runs the real reqwest transport against a local HTTP server to cover
//! form encoding and envelope handling end to end.

use crate::client::SlackClientImpl;
use crate::config::SlackConfigBuilder;
use crate::errors::{ResponseError, SlackError};
use crate::services::auth::AuthServiceTrait;
use crate::transport::{FormRequest, HttpTransport, ReqwestTransport};
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_send_form_parses_ok_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api.test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"ok":true,"args":{"foo":"bar"}}"#),
        )
        .mount(&server)
        .await;

    let payload = transport()
        .send_form(FormRequest::post(format!("{}/api.test", server.uri())).field("foo", "bar"))
        .await
        .unwrap();

    assert_eq!(payload["ok"], true);
    assert_eq!(payload["args"]["foo"], "bar");
}

#[tokio::test]
async fn test_send_form_posts_form_encoded_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_string_contains("token=xoxp-live-test"))
        .and(body_string_contains("channel=C1234567890"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    transport()
        .send_form(
            FormRequest::post(format!("{}/chat.postMessage", server.uri()))
                .field("token", "xoxp-live-test")
                .field("channel", "C1234567890")
                .field("text", "hello"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remote_rejection_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"ok":false,"error":"invalid_auth"}"#),
        )
        .mount(&server)
        .await;

    let err = transport()
        .send_form(FormRequest::post(format!("{}/auth.test", server.uri())))
        .await
        .unwrap_err();

    assert!(matches!(err, SlackError::Api { ref code } if code == "invalid_auth"));
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_envelope_without_ok_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"channel":"C1"}"#))
        .mount(&server)
        .await;

    let err = transport()
        .send_form(FormRequest::post(format!("{}/api.test", server.uri())))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SlackError::Response(ResponseError::MissingOkField)
    ));
}

#[tokio::test]
async fn test_client_round_trips_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth.test"))
        .and(body_string_contains("token=xoxp-live-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"ok":true,"team":"Test Team","user":"jdoe",
                "team_id":"T1234567890","user_id":"U1234567890"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = SlackConfigBuilder::new()
        .token("xoxp-live-test")
        .base_url(&server.uri())
        .unwrap()
        .build()
        .unwrap();
    let client = SlackClientImpl::new(config).unwrap();

    let identity = client.auth().test().await.unwrap();
    assert_eq!(identity.team.as_deref(), Some("Test Team"));
    assert_eq!(identity.user_id.as_str(), "U1234567890");
}
