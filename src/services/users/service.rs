//! Users service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for users service operations
#[async_trait]
pub trait UsersServiceTrait: Send + Sync {
    /// List workspace members
    async fn list(&self, request: ListUsersRequest) -> SlackResult<ListUsersResponse>;

    /// Get information about a user
    async fn info(&self, request: UserRequest) -> SlackResult<UserResponse>;

    /// Get a user's presence
    async fn get_presence(&self, request: UserRequest) -> SlackResult<GetPresenceResponse>;

    /// Set the authenticated user's presence
    async fn set_presence(&self, request: SetPresenceRequest) -> SlackResult<UserAckResponse>;

    /// Mark the authenticated user active
    async fn set_active(&self) -> SlackResult<UserAckResponse>;
}

/// Users service implementation
#[derive(Clone, Debug)]
pub struct UsersService {
    ctx: ServiceContext,
}

impl UsersService {
    /// Create a new users service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl UsersServiceTrait for UsersService {
    #[instrument(skip(self, request))]
    async fn list(&self, request: ListUsersRequest) -> SlackResult<ListUsersResponse> {
        self.ctx.call("users.list", &request).await
    }

    #[instrument(skip(self, request), fields(user = %request.user))]
    async fn info(&self, request: UserRequest) -> SlackResult<UserResponse> {
        self.ctx.call("users.info", &request).await
    }

    #[instrument(skip(self, request), fields(user = %request.user))]
    async fn get_presence(&self, request: UserRequest) -> SlackResult<GetPresenceResponse> {
        self.ctx.call("users.getPresence", &request).await
    }

    #[instrument(skip(self, request))]
    async fn set_presence(&self, request: SetPresenceRequest) -> SlackResult<UserAckResponse> {
        self.ctx.call("users.setPresence", &request).await
    }

    #[instrument(skip(self))]
    async fn set_active(&self) -> SlackResult<UserAckResponse> {
        let payload = self.ctx.call_raw("users.setActive", Vec::new()).await?;
        serde_json::from_value(payload).map_err(|e| crate::errors::ResponseError::from(e).into())
    }
}
