//! Authentication service.
//!
//! `auth.test` validates the credential and reports the caller's identity.

use crate::errors::SlackResult;
use crate::services::ServiceContext;
use crate::types::{TeamId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

/// Response from auth.test
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTestResponse {
    /// Success indicator
    pub ok: bool,
    /// Workspace URL
    #[serde(default)]
    pub url: Option<String>,
    /// Team name
    #[serde(default)]
    pub team: Option<String>,
    /// Authenticated username
    #[serde(default)]
    pub user: Option<String>,
    /// Team ID
    pub team_id: TeamId,
    /// Authenticated user ID
    pub user_id: UserId,
}

/// Trait for authentication operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Validate the credential and report the caller's identity
    async fn test(&self) -> SlackResult<AuthTestResponse>;
}

/// Authentication service implementation
#[derive(Clone, Debug)]
pub struct AuthService {
    ctx: ServiceContext,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    #[instrument(skip(self))]
    async fn test(&self) -> SlackResult<AuthTestResponse> {
        let payload = self.ctx.call_raw("auth.test", Vec::new()).await?;
        serde_json::from_value(payload).map_err(|e| crate::errors::ResponseError::from(e).into())
    }
}
