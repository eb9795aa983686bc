//! Channels service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for channels service operations
#[async_trait]
pub trait ChannelsServiceTrait: Send + Sync {
    /// List channels visible to the caller
    async fn list(&self, request: ListChannelsRequest) -> SlackResult<ListChannelsResponse>;

    /// Get information about a channel
    async fn info(&self, request: ChannelRequest) -> SlackResult<ChannelResponse>;

    /// Create a channel
    async fn create(&self, request: CreateChannelRequest) -> SlackResult<ChannelResponse>;

    /// Join a channel by name
    async fn join(&self, request: JoinChannelRequest) -> SlackResult<JoinChannelResponse>;

    /// Leave a channel
    async fn leave(&self, request: ChannelRequest) -> SlackResult<LeaveChannelResponse>;

    /// Invite a user to a channel
    async fn invite(&self, request: ChannelUserRequest) -> SlackResult<ChannelResponse>;

    /// Remove a user from a channel
    async fn kick(&self, request: ChannelUserRequest) -> SlackResult<ChannelAckResponse>;

    /// Archive a channel
    async fn archive(&self, request: ChannelRequest) -> SlackResult<ChannelAckResponse>;

    /// Unarchive a channel
    async fn unarchive(&self, request: ChannelRequest) -> SlackResult<ChannelAckResponse>;

    /// Rename a channel
    async fn rename(&self, request: RenameChannelRequest) -> SlackResult<RenameChannelResponse>;

    /// Fetch message history for a channel
    async fn history(&self, request: ChannelHistoryRequest)
        -> SlackResult<ChannelHistoryResponse>;

    /// Move the read cursor for a channel
    async fn mark(&self, request: MarkChannelRequest) -> SlackResult<ChannelAckResponse>;

    /// Set a channel's purpose
    async fn set_purpose(
        &self,
        request: SetChannelPurposeRequest,
    ) -> SlackResult<SetChannelPurposeResponse>;

    /// Set a channel's topic
    async fn set_topic(
        &self,
        request: SetChannelTopicRequest,
    ) -> SlackResult<SetChannelTopicResponse>;
}

/// Channels service implementation
#[derive(Clone, Debug)]
pub struct ChannelsService {
    ctx: ServiceContext,
}

impl ChannelsService {
    /// Create a new channels service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ChannelsServiceTrait for ChannelsService {
    #[instrument(skip(self, request))]
    async fn list(&self, request: ListChannelsRequest) -> SlackResult<ListChannelsResponse> {
        self.ctx.call("channels.list", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn info(&self, request: ChannelRequest) -> SlackResult<ChannelResponse> {
        self.ctx.call("channels.info", &request).await
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create(&self, request: CreateChannelRequest) -> SlackResult<ChannelResponse> {
        self.ctx.call("channels.create", &request).await
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn join(&self, request: JoinChannelRequest) -> SlackResult<JoinChannelResponse> {
        self.ctx.call("channels.join", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn leave(&self, request: ChannelRequest) -> SlackResult<LeaveChannelResponse> {
        self.ctx.call("channels.leave", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, user = %request.user))]
    async fn invite(&self, request: ChannelUserRequest) -> SlackResult<ChannelResponse> {
        self.ctx.call("channels.invite", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel, user = %request.user))]
    async fn kick(&self, request: ChannelUserRequest) -> SlackResult<ChannelAckResponse> {
        self.ctx.call("channels.kick", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn archive(&self, request: ChannelRequest) -> SlackResult<ChannelAckResponse> {
        self.ctx.call("channels.archive", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn unarchive(&self, request: ChannelRequest) -> SlackResult<ChannelAckResponse> {
        self.ctx.call("channels.unarchive", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn rename(&self, request: RenameChannelRequest) -> SlackResult<RenameChannelResponse> {
        self.ctx.call("channels.rename", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn history(
        &self,
        request: ChannelHistoryRequest,
    ) -> SlackResult<ChannelHistoryResponse> {
        self.ctx.call("channels.history", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn mark(&self, request: MarkChannelRequest) -> SlackResult<ChannelAckResponse> {
        self.ctx.call("channels.mark", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn set_purpose(
        &self,
        request: SetChannelPurposeRequest,
    ) -> SlackResult<SetChannelPurposeResponse> {
        self.ctx.call("channels.setPurpose", &request).await
    }

    #[instrument(skip(self, request), fields(channel = %request.channel))]
    async fn set_topic(
        &self,
        request: SetChannelTopicRequest,
    ) -> SlackResult<SetChannelTopicResponse> {
        self.ctx.call("channels.setTopic", &request).await
    }
}
