//! Stars service for the Slack API.
//!
//! Listing items the authenticated user has starred.

use crate::errors::SlackResult;
use crate::services::ServiceContext;
use crate::types::{ChannelId, File, Message, Paging, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Request to list starred items
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListStarsRequest {
    /// List another user's stars instead of the caller's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
}

impl ListStarsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// List another user's stars
    pub fn user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set results per page
    pub fn count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the page number
    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }
}

/// One starred item; the populated field depends on `item_type`
#[derive(Debug, Clone, Deserialize)]
pub struct StarredItem {
    /// Item kind (`message`, `file`, `channel`, ...)
    #[serde(rename = "type")]
    pub item_type: String,
    /// Channel, for message and channel stars
    #[serde(default)]
    pub channel: Option<ChannelId>,
    /// Message, for message stars
    #[serde(default)]
    pub message: Option<Message>,
    /// File, for file stars
    #[serde(default)]
    pub file: Option<File>,
}

/// Response from stars.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListStarsResponse {
    /// Success indicator
    pub ok: bool,
    /// Starred items on this page
    #[serde(default)]
    pub items: Vec<StarredItem>,
    /// Pagination block
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Trait for stars service operations
#[async_trait]
pub trait StarsServiceTrait: Send + Sync {
    /// List starred items
    async fn list(&self, request: ListStarsRequest) -> SlackResult<ListStarsResponse>;
}

/// Stars service implementation
#[derive(Clone, Debug)]
pub struct StarsService {
    ctx: ServiceContext,
}

impl StarsService {
    /// Create a new stars service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl StarsServiceTrait for StarsService {
    #[instrument(skip(self, request))]
    async fn list(&self, request: ListStarsRequest) -> SlackResult<ListStarsResponse> {
        self.ctx.call("stars.list", &request).await
    }
}
