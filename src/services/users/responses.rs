//! Response types for the users service.

use crate::types::User;
use serde::Deserialize;

/// Response from users.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    /// Success indicator
    pub ok: bool,
    /// Workspace members
    #[serde(default)]
    pub members: Vec<User>,
}

/// Response from users.info
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    /// Success indicator
    pub ok: bool,
    /// The user in question
    pub user: User,
}

/// Response from users.getPresence
#[derive(Debug, Clone, Deserialize)]
pub struct GetPresenceResponse {
    /// Success indicator
    pub ok: bool,
    /// Presence (`active` or `away`)
    pub presence: String,
    /// Whether the user has a connection open
    #[serde(default)]
    pub online: Option<bool>,
    /// Whether the server marked the user away for inactivity
    #[serde(default)]
    pub auto_away: Option<bool>,
    /// Whether the user asked to appear away
    #[serde(default)]
    pub manual_away: Option<bool>,
    /// Number of open connections
    #[serde(default)]
    pub connection_count: Option<i32>,
    /// Last activity timestamp (Unix seconds)
    #[serde(default)]
    pub last_activity: Option<i64>,
}

/// Response for user operations that return nothing beyond `ok`
#[derive(Debug, Clone, Deserialize)]
pub struct UserAckResponse {
    /// Success indicator
    pub ok: bool,
}
