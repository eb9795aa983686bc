//! Direct-message service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for direct-message service operations
#[async_trait]
pub trait ImServiceTrait: Send + Sync {
    /// List open direct-message conversations
    async fn list(&self) -> SlackResult<ListImsResponse>;

    /// Fetch message history for a conversation
    async fn history(&self, request: ImHistoryRequest) -> SlackResult<ImHistoryResponse>;

    /// Move the read cursor for a conversation
    async fn mark(&self, request: MarkImRequest) -> SlackResult<ImAckResponse>;

    /// Close a conversation
    async fn close(&self, request: ImRequest) -> SlackResult<CloseImResponse>;
}

/// Direct-message service implementation
#[derive(Clone, Debug)]
pub struct ImService {
    ctx: ServiceContext,
}

impl ImService {
    /// Create a new direct-message service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ImServiceTrait for ImService {
    #[instrument(skip(self))]
    async fn list(&self) -> SlackResult<ListImsResponse> {
        let payload = self.ctx.call_raw("im.list", Vec::new()).await?;
        serde_json::from_value(payload).map_err(|e| crate::errors::ResponseError::from(e).into())
    }

    #[instrument(skip(self, request), fields(im = %request.channel))]
    async fn history(&self, request: ImHistoryRequest) -> SlackResult<ImHistoryResponse> {
        self.ctx.call("im.history", &request).await
    }

    #[instrument(skip(self, request), fields(im = %request.channel))]
    async fn mark(&self, request: MarkImRequest) -> SlackResult<ImAckResponse> {
        self.ctx.call("im.mark", &request).await
    }

    #[instrument(skip(self, request), fields(im = %request.channel))]
    async fn close(&self, request: ImRequest) -> SlackResult<CloseImResponse> {
        self.ctx.call("im.close", &request).await
    }
}
