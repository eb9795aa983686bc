//! Request types for the groups service.

use crate::types::{GroupId, Timestamp, UserId};
use serde::Serialize;

/// Request to list groups
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListGroupsRequest {
    /// Omit archived groups from the listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_archived: Option<bool>,
}

impl ListGroupsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit archived groups
    pub fn exclude_archived(mut self, exclude: bool) -> Self {
        self.exclude_archived = Some(exclude);
        self
    }
}

/// Request naming a single group
#[derive(Debug, Clone, Serialize)]
pub struct GroupRequest {
    /// Group ID, sent as `channel` on the wire
    pub channel: GroupId,
}

impl GroupRequest {
    /// Create a new request
    pub fn new(group: impl Into<GroupId>) -> Self {
        Self {
            channel: group.into(),
        }
    }
}

/// Request to create a group
#[derive(Debug, Clone, Serialize)]
pub struct CreateGroupRequest {
    /// Name for the new group
    pub name: String,
}

impl CreateGroupRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request pairing a group with a user
#[derive(Debug, Clone, Serialize)]
pub struct GroupUserRequest {
    /// Group ID, sent as `channel` on the wire
    pub channel: GroupId,
    /// User ID
    pub user: UserId,
}

impl GroupUserRequest {
    /// Create a new request
    pub fn new(group: impl Into<GroupId>, user: impl Into<UserId>) -> Self {
        Self {
            channel: group.into(),
            user: user.into(),
        }
    }
}

/// Request to rename a group
#[derive(Debug, Clone, Serialize)]
pub struct RenameGroupRequest {
    /// Group ID, sent as `channel` on the wire
    pub channel: GroupId,
    /// New name
    pub name: String,
}

impl RenameGroupRequest {
    /// Create a new request
    pub fn new(group: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            channel: group.into(),
            name: name.into(),
        }
    }
}

/// Request to fetch group history
#[derive(Debug, Clone, Serialize)]
pub struct GroupHistoryRequest {
    /// Group ID, sent as `channel` on the wire
    pub channel: GroupId,
    /// End of the time range (newest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<Timestamp>,
    /// Start of the time range (oldest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<Timestamp>,
    /// Include messages with latest or oldest timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    /// Number of messages to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Include unread counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreads: Option<bool>,
}

impl GroupHistoryRequest {
    /// Create a new request
    pub fn new(group: impl Into<GroupId>) -> Self {
        Self {
            channel: group.into(),
            latest: None,
            oldest: None,
            inclusive: None,
            count: None,
            unreads: None,
        }
    }

    /// Set the newest timestamp to include
    pub fn latest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.latest = Some(ts.into());
        self
    }

    /// Set the oldest timestamp to include
    pub fn oldest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.oldest = Some(ts.into());
        self
    }

    /// Include boundary timestamps
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = Some(inclusive);
        self
    }

    /// Set the number of messages to return
    pub fn count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Include unread counts
    pub fn unreads(mut self, unreads: bool) -> Self {
        self.unreads = Some(unreads);
        self
    }
}

/// Request to move the read cursor
#[derive(Debug, Clone, Serialize)]
pub struct MarkGroupRequest {
    /// Group ID, sent as `channel` on the wire
    pub channel: GroupId,
    /// Timestamp of the most recently seen message
    pub ts: Timestamp,
}

impl MarkGroupRequest {
    /// Create a new request
    pub fn new(group: impl Into<GroupId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: group.into(),
            ts: ts.into(),
        }
    }
}

/// Request to set a group's purpose
#[derive(Debug, Clone, Serialize)]
pub struct SetGroupPurposeRequest {
    /// Group ID, sent as `channel` on the wire
    pub channel: GroupId,
    /// New purpose text
    pub purpose: String,
}

impl SetGroupPurposeRequest {
    /// Create a new request
    pub fn new(group: impl Into<GroupId>, purpose: impl Into<String>) -> Self {
        Self {
            channel: group.into(),
            purpose: purpose.into(),
        }
    }
}

/// Request to set a group's topic
#[derive(Debug, Clone, Serialize)]
pub struct SetGroupTopicRequest {
    /// Group ID, sent as `channel` on the wire
    pub channel: GroupId,
    /// New topic text
    pub topic: String,
}

impl SetGroupTopicRequest {
    /// Create a new request
    pub fn new(group: impl Into<GroupId>, topic: impl Into<String>) -> Self {
        Self {
            channel: group.into(),
            topic: topic.into(),
        }
    }
}
