//! Response types for the groups service.

use crate::types::{Group, GroupId, Message, Timestamp};
use serde::Deserialize;

/// Response from groups.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListGroupsResponse {
    /// Success indicator
    pub ok: bool,
    /// Groups visible to the caller
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Response from groups.info, groups.create, and groups.invite
#[derive(Debug, Clone, Deserialize)]
pub struct GroupResponse {
    /// Success indicator
    pub ok: bool,
    /// The group in question
    pub group: Group,
}

/// Group identity returned by a rename
#[derive(Debug, Clone, Deserialize)]
pub struct RenamedGroup {
    /// Group ID, unchanged by the rename
    pub id: GroupId,
    /// New name
    pub name: String,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: Option<i64>,
}

/// Response from groups.rename
#[derive(Debug, Clone, Deserialize)]
pub struct RenameGroupResponse {
    /// Success indicator
    pub ok: bool,
    /// Group identity after the rename
    pub channel: RenamedGroup,
}

/// Response from groups.history
#[derive(Debug, Clone, Deserialize)]
pub struct GroupHistoryResponse {
    /// Success indicator
    pub ok: bool,
    /// Timestamp of the newest message considered
    #[serde(default)]
    pub latest: Option<Timestamp>,
    /// Messages, newest first
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Whether older messages remain
    #[serde(default)]
    pub has_more: bool,
}

/// Response from groups.setPurpose
#[derive(Debug, Clone, Deserialize)]
pub struct SetGroupPurposeResponse {
    /// Success indicator
    pub ok: bool,
    /// Purpose text as stored
    pub purpose: String,
}

/// Response from groups.setTopic
#[derive(Debug, Clone, Deserialize)]
pub struct SetGroupTopicResponse {
    /// Success indicator
    pub ok: bool,
    /// Topic text as stored
    pub topic: String,
}

/// Response for group operations that return nothing beyond `ok`
#[derive(Debug, Clone, Deserialize)]
pub struct GroupAckResponse {
    /// Success indicator
    pub ok: bool,
}
