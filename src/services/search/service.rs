//! Search service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for search service operations
#[async_trait]
pub trait SearchServiceTrait: Send + Sync {
    /// Search messages and files together
    async fn all(&self, request: SearchRequest) -> SlackResult<SearchAllResponse>;

    /// Search messages only
    async fn messages(&self, request: SearchRequest) -> SlackResult<SearchMessagesResponse>;

    /// Search files only
    async fn files(&self, request: SearchRequest) -> SlackResult<SearchFilesResponse>;
}

/// Search service implementation
#[derive(Clone, Debug)]
pub struct SearchService {
    ctx: ServiceContext,
}

impl SearchService {
    /// Create a new search service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl SearchServiceTrait for SearchService {
    #[instrument(skip(self, request), fields(query = %request.query))]
    async fn all(&self, request: SearchRequest) -> SlackResult<SearchAllResponse> {
        self.ctx.call("search.all", &request).await
    }

    #[instrument(skip(self, request), fields(query = %request.query))]
    async fn messages(&self, request: SearchRequest) -> SlackResult<SearchMessagesResponse> {
        self.ctx.call("search.messages", &request).await
    }

    #[instrument(skip(self, request), fields(query = %request.query))]
    async fn files(&self, request: SearchRequest) -> SlackResult<SearchFilesResponse> {
        self.ctx.call("search.files", &request).await
    }
}
