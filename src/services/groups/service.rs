//! Groups service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for groups service operations
#[async_trait]
pub trait GroupsServiceTrait: Send + Sync {
    /// List groups visible to the caller
    async fn list(&self, request: ListGroupsRequest) -> SlackResult<ListGroupsResponse>;

    /// Get information about a group
    async fn info(&self, request: GroupRequest) -> SlackResult<GroupResponse>;

    /// Create a group
    async fn create(&self, request: CreateGroupRequest) -> SlackResult<GroupResponse>;

    /// Invite a user to a group
    async fn invite(&self, request: GroupUserRequest) -> SlackResult<GroupResponse>;

    /// Remove a user from a group
    async fn kick(&self, request: GroupUserRequest) -> SlackResult<GroupAckResponse>;

    /// Leave a group
    async fn leave(&self, request: GroupRequest) -> SlackResult<GroupAckResponse>;

    /// Archive a group
    async fn archive(&self, request: GroupRequest) -> SlackResult<GroupAckResponse>;

    /// Unarchive a group
    async fn unarchive(&self, request: GroupRequest) -> SlackResult<GroupAckResponse>;

    /// Rename a group
    async fn rename(&self, request: RenameGroupRequest) -> SlackResult<RenameGroupResponse>;

    /// Fetch message history for a group
    async fn history(&self, request: GroupHistoryRequest) -> SlackResult<GroupHistoryResponse>;

    /// Move the read cursor for a group
    async fn mark(&self, request: MarkGroupRequest) -> SlackResult<GroupAckResponse>;

    /// Set a group's purpose
    async fn set_purpose(
        &self,
        request: SetGroupPurposeRequest,
    ) -> SlackResult<SetGroupPurposeResponse>;

    /// Set a group's topic
    async fn set_topic(&self, request: SetGroupTopicRequest)
        -> SlackResult<SetGroupTopicResponse>;
}

/// Groups service implementation
#[derive(Clone, Debug)]
pub struct GroupsService {
    ctx: ServiceContext,
}

impl GroupsService {
    /// Create a new groups service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl GroupsServiceTrait for GroupsService {
    #[instrument(skip(self, request))]
    async fn list(&self, request: ListGroupsRequest) -> SlackResult<ListGroupsResponse> {
        self.ctx.call("groups.list", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn info(&self, request: GroupRequest) -> SlackResult<GroupResponse> {
        self.ctx.call("groups.info", &request).await
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create(&self, request: CreateGroupRequest) -> SlackResult<GroupResponse> {
        self.ctx.call("groups.create", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel, user = %request.user))]
    async fn invite(&self, request: GroupUserRequest) -> SlackResult<GroupResponse> {
        self.ctx.call("groups.invite", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel, user = %request.user))]
    async fn kick(&self, request: GroupUserRequest) -> SlackResult<GroupAckResponse> {
        self.ctx.call("groups.kick", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn leave(&self, request: GroupRequest) -> SlackResult<GroupAckResponse> {
        self.ctx.call("groups.leave", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn archive(&self, request: GroupRequest) -> SlackResult<GroupAckResponse> {
        self.ctx.call("groups.archive", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn unarchive(&self, request: GroupRequest) -> SlackResult<GroupAckResponse> {
        self.ctx.call("groups.unarchive", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn rename(&self, request: RenameGroupRequest) -> SlackResult<RenameGroupResponse> {
        self.ctx.call("groups.rename", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn history(&self, request: GroupHistoryRequest) -> SlackResult<GroupHistoryResponse> {
        self.ctx.call("groups.history", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn mark(&self, request: MarkGroupRequest) -> SlackResult<GroupAckResponse> {
        self.ctx.call("groups.mark", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn set_purpose(
        &self,
        request: SetGroupPurposeRequest,
    ) -> SlackResult<SetGroupPurposeResponse> {
        self.ctx.call("groups.setPurpose", &request).await
    }

    #[instrument(skip(self, request), fields(group = %request.channel))]
    async fn set_topic(
        &self,
        request: SetGroupTopicRequest,
    ) -> SlackResult<SetGroupTopicResponse> {
        self.ctx.call("groups.setTopic", &request).await
    }
}
