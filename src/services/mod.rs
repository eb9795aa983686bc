//! Service implementations for Slack API endpoints.
//!
//! Each service module covers one remote family (`chat.*`, `channels.*`,
//! ...) with a trait describing its operations and a concrete
//! implementation that shares one [`ServiceContext`].

use crate::config::SlackConfig;
use crate::errors::{ConfigurationError, SlackResult};
use crate::transport::{to_form_fields, FormRequest, HttpTransport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

pub mod api;
pub mod auth;
pub mod channels;
pub mod chat;
pub mod emoji;
pub mod files;
pub mod groups;
pub mod im;
pub mod search;
pub mod stars;
pub mod team;
pub mod users;

pub use api::ApiService;
pub use auth::AuthService;
pub use channels::ChannelsService;
pub use chat::ChatService;
pub use emoji::EmojiService;
pub use files::FilesService;
pub use groups::GroupsService;
pub use im::ImService;
pub use search::SearchService;
pub use stars::StarsService;
pub use team::TeamService;
pub use users::UsersService;

/// Shared state every service needs to issue a request.
///
/// Holds the transport and configuration; the credential is attached to
/// each outgoing form here so individual services never touch it.
#[derive(Clone)]
pub struct ServiceContext {
    transport: Arc<dyn HttpTransport>,
    config: Arc<SlackConfig>,
}

impl ServiceContext {
    /// Create a new context
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<SlackConfig>) -> Self {
        Self { transport, config }
    }

    /// Issue an operation with pre-built form fields, returning the raw payload
    #[instrument(skip(self, fields), fields(operation = operation))]
    pub(crate) async fn call_raw(
        &self,
        operation: &str,
        fields: Vec<(String, String)>,
    ) -> SlackResult<Value> {
        let token = self
            .config
            .token()
            .ok_or(ConfigurationError::MissingToken)?;

        let request = FormRequest::post(self.config.build_url(operation))
            .field("token", token.expose())
            .fields(fields);

        debug!(operation, "Dispatching API call");
        self.transport.send_form(request).await
    }

    /// Issue an operation from a serializable request, deserializing the payload
    pub(crate) async fn call<Req, Res>(&self, operation: &str, request: &Req) -> SlackResult<Res>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let fields = to_form_fields(request)?;
        let payload = self.call_raw(operation, fields).await?;
        serde_json::from_value(payload)
            .map_err(|e| crate::errors::ResponseError::from(e).into())
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlackConfigBuilder;
    use crate::errors::SlackError;
    use crate::mocks::{MockHttpTransport, MockResponse};

    fn context(transport: Arc<MockHttpTransport>) -> ServiceContext {
        let config = SlackConfigBuilder::new()
            .token("xoxp-test")
            .build()
            .unwrap();
        ServiceContext::new(transport, Arc::new(config))
    }

    #[tokio::test]
    async fn test_call_raw_attaches_token_first() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.enqueue(MockResponse::ok());

        let ctx = context(transport.clone());
        ctx.call_raw("api.test", vec![("foo".to_string(), "bar".to_string())])
            .await
            .unwrap();

        let recorded = transport.last_request().unwrap();
        assert!(recorded.url.ends_with("/api.test"));
        assert_eq!(
            recorded.fields[0],
            ("token".to_string(), "xoxp-test".to_string())
        );
        assert!(recorded
            .fields
            .contains(&("foo".to_string(), "bar".to_string())));
    }

    #[tokio::test]
    async fn test_call_raw_without_token_is_config_error() {
        let transport = Arc::new(MockHttpTransport::new());
        let config = SlackConfigBuilder::new().build_unchecked();
        let ctx = ServiceContext::new(transport.clone(), Arc::new(config));

        let err = ctx.call_raw("api.test", Vec::new()).await.unwrap_err();
        assert!(matches!(err, SlackError::Configuration(_)));
        assert_eq!(transport.remaining(), 0);
        assert!(transport.last_request().is_none());
    }
}
