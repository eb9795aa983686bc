//! Team service for the Slack API.
//!
//! Workspace information and access logs.

use crate::errors::SlackResult;
use crate::services::ServiceContext;
use crate::types::{Paging, TeamId, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// Request to page through the access log
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccessLogRequest {
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
}

impl AccessLogRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
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

/// Workspace identity
#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfo {
    /// Team ID
    pub id: TeamId,
    /// Team name
    pub name: String,
    /// Workspace domain
    #[serde(default)]
    pub domain: Option<String>,
    /// Email domain restriction
    #[serde(default)]
    pub email_domain: Option<String>,
    /// Icon set keyed by size
    #[serde(default)]
    pub icon: Option<Value>,
}

/// Response from team.info
#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfoResponse {
    /// Success indicator
    pub ok: bool,
    /// Workspace identity
    pub team: TeamInfo,
}

/// One access-log entry, grouping logins by user, IP, and user agent
#[derive(Debug, Clone, Deserialize)]
pub struct AccessLogEntry {
    /// User who logged in
    pub user_id: UserId,
    /// Username at login time
    #[serde(default)]
    pub username: Option<String>,
    /// First login in this group (Unix seconds)
    #[serde(default)]
    pub date_first: Option<i64>,
    /// Most recent login in this group (Unix seconds)
    #[serde(default)]
    pub date_last: Option<i64>,
    /// Logins in this group
    #[serde(default)]
    pub count: Option<i64>,
    /// Source IP address
    #[serde(default)]
    pub ip: Option<String>,
    /// User agent string
    #[serde(default)]
    pub user_agent: Option<String>,
    /// ISP, when known
    #[serde(default)]
    pub isp: Option<String>,
    /// Country, when known
    #[serde(default)]
    pub country: Option<String>,
    /// Region, when known
    #[serde(default)]
    pub region: Option<String>,
}

/// Response from team.accessLogs
#[derive(Debug, Clone, Deserialize)]
pub struct AccessLogResponse {
    /// Success indicator
    pub ok: bool,
    /// Login groups on this page
    #[serde(default)]
    pub logins: Vec<AccessLogEntry>,
    /// Pagination block
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Trait for team service operations
#[async_trait]
pub trait TeamServiceTrait: Send + Sync {
    /// Get information about the workspace
    async fn info(&self) -> SlackResult<TeamInfoResponse>;

    /// Page through the workspace access log
    async fn access_logs(&self, request: AccessLogRequest) -> SlackResult<AccessLogResponse>;
}

/// Team service implementation
#[derive(Clone, Debug)]
pub struct TeamService {
    ctx: ServiceContext,
}

impl TeamService {
    /// Create a new team service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl TeamServiceTrait for TeamService {
    #[instrument(skip(self))]
    async fn info(&self) -> SlackResult<TeamInfoResponse> {
        let payload = self.ctx.call_raw("team.info", Vec::new()).await?;
        serde_json::from_value(payload).map_err(|e| crate::errors::ResponseError::from(e).into())
    }

    #[instrument(skip(self, request))]
    async fn access_logs(&self, request: AccessLogRequest) -> SlackResult<AccessLogResponse> {
        self.ctx.call("team.accessLogs", &request).await
    }
}
