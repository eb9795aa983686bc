//! Files service for the Slack API.
//!
//! Listing, inspecting, and deleting uploaded files.

use crate::errors::SlackResult;
use crate::services::ServiceContext;
use crate::types::{File, FileId, Paging, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Request to list files
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListFilesRequest {
    /// Filter to files uploaded by one user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Only files created after this timestamp (Unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_from: Option<i64>,
    /// Only files created before this timestamp (Unix seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_to: Option<i64>,
    /// Comma-separated type filter (`images`, `zips`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
}

impl ListFilesRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by uploader
    pub fn user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Only files created after this timestamp
    pub fn ts_from(mut self, ts: i64) -> Self {
        self.ts_from = Some(ts);
        self
    }

    /// Only files created before this timestamp
    pub fn ts_to(mut self, ts: i64) -> Self {
        self.ts_to = Some(ts);
        self
    }

    /// Filter by file types
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
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

/// Request to inspect a single file
#[derive(Debug, Clone, Serialize)]
pub struct FileInfoRequest {
    /// File ID
    pub file: FileId,
    /// Comments per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Comment page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
}

impl FileInfoRequest {
    /// Create a new request
    pub fn new(file: impl Into<FileId>) -> Self {
        Self {
            file: file.into(),
            count: None,
            page: None,
        }
    }

    /// Set comments per page
    pub fn count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the comment page number
    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Request to delete a file
#[derive(Debug, Clone, Serialize)]
pub struct DeleteFileRequest {
    /// File ID
    pub file: FileId,
}

impl DeleteFileRequest {
    /// Create a new request
    pub fn new(file: impl Into<FileId>) -> Self {
        Self { file: file.into() }
    }
}

/// Response from files.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListFilesResponse {
    /// Success indicator
    pub ok: bool,
    /// Files on this page
    #[serde(default)]
    pub files: Vec<File>,
    /// Pagination block
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Response from files.info
#[derive(Debug, Clone, Deserialize)]
pub struct FileInfoResponse {
    /// Success indicator
    pub ok: bool,
    /// The file in question
    pub file: File,
    /// Comment pagination block
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Response from files.delete
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFileResponse {
    /// Success indicator
    pub ok: bool,
}

/// Trait for files service operations
#[async_trait]
pub trait FilesServiceTrait: Send + Sync {
    /// List files visible to the caller
    async fn list(&self, request: ListFilesRequest) -> SlackResult<ListFilesResponse>;

    /// Get information about a file
    async fn info(&self, request: FileInfoRequest) -> SlackResult<FileInfoResponse>;

    /// Delete a file
    async fn delete(&self, request: DeleteFileRequest) -> SlackResult<DeleteFileResponse>;
}

/// Files service implementation
#[derive(Clone, Debug)]
pub struct FilesService {
    ctx: ServiceContext,
}

impl FilesService {
    /// Create a new files service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl FilesServiceTrait for FilesService {
    #[instrument(skip(self, request))]
    async fn list(&self, request: ListFilesRequest) -> SlackResult<ListFilesResponse> {
        self.ctx.call("files.list", &request).await
    }

    #[instrument(skip(self, request), fields(file = %request.file))]
    async fn info(&self, request: FileInfoRequest) -> SlackResult<FileInfoResponse> {
        self.ctx.call("files.info", &request).await
    }

    #[instrument(skip(self, request), fields(file = %request.file))]
    async fn delete(&self, request: DeleteFileRequest) -> SlackResult<DeleteFileResponse> {
        self.ctx.call("files.delete", &request).await
    }
}
