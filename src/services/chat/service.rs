//! Chat service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for chat service operations
#[async_trait]
pub trait ChatServiceTrait: Send + Sync {
    /// Post a message to a channel, group, or DM conversation
    async fn post_message(&self, request: PostMessageRequest) -> SlackResult<PostMessageResponse>;

    /// Update an existing message
    async fn update(&self, request: UpdateMessageRequest) -> SlackResult<UpdateMessageResponse>;

    /// Delete a message
    async fn delete(&self, request: DeleteMessageRequest) -> SlackResult<DeleteMessageResponse>;
}

/// Chat service implementation
#[derive(Clone, Debug)]
pub struct ChatService {
    ctx: ServiceContext,
}

impl ChatService {
    /// Create a new chat service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ChatServiceTrait for ChatService {
    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn post_message(&self, request: PostMessageRequest) -> SlackResult<PostMessageResponse> {
        self.ctx.call("chat.postMessage", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, ts = %request.ts))]
    async fn update(&self, request: UpdateMessageRequest) -> SlackResult<UpdateMessageResponse> {
        self.ctx.call("chat.update", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, ts = %request.ts))]
    async fn delete(&self, request: DeleteMessageRequest) -> SlackResult<DeleteMessageResponse> {
        self.ctx.call("chat.delete", &request).await
    }
}
