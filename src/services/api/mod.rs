//! API meta service.
//!
//! `api.test` checks connectivity by echoing its arguments back.

use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::instrument;

/// Request for api.test
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiTestRequest {
    /// Ask the remote to fail with this error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Arbitrary arguments echoed back in the response
    #[serde(flatten)]
    pub args: HashMap<String, String>,
}

impl ApiTestRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument to echo
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Ask the remote to fail with the given error code
    pub fn error(mut self, code: impl Into<String>) -> Self {
        self.error = Some(code.into());
        self
    }
}

/// Response from api.test
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTestResponse {
    /// Success indicator
    pub ok: bool,
    /// Echo of the request arguments
    #[serde(default)]
    pub args: HashMap<String, String>,
}

/// Trait for API meta operations
#[async_trait]
pub trait ApiServiceTrait: Send + Sync {
    /// Check connectivity
    async fn test(&self, request: ApiTestRequest) -> SlackResult<ApiTestResponse>;
}

/// API meta service implementation
#[derive(Clone, Debug)]
pub struct ApiService {
    ctx: ServiceContext,
}

impl ApiService {
    /// Create a new API meta service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ApiServiceTrait for ApiService {
    #[instrument(skip(self, request))]
    async fn test(&self, request: ApiTestRequest) -> SlackResult<ApiTestResponse> {
        self.ctx.call("api.test", &request).await
    }
}
