//! Request types for the channels service.

use crate::types::{ChannelId, Timestamp, UserId};
use serde::Serialize;

/// Request to list channels
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListChannelsRequest {
    /// Omit archived channels from the listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_archived: Option<bool>,
}

impl ListChannelsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit archived channels
    pub fn exclude_archived(mut self, exclude: bool) -> Self {
        self.exclude_archived = Some(exclude);
        self
    }
}

/// Request naming a single channel
#[derive(Debug, Clone, Serialize)]
pub struct ChannelRequest {
    /// Channel ID
    pub channel: ChannelId,
}

impl ChannelRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

/// Request to create a channel
#[derive(Debug, Clone, Serialize)]
pub struct CreateChannelRequest {
    /// Name for the new channel
    pub name: String,
}

impl CreateChannelRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request to join a channel by name
#[derive(Debug, Clone, Serialize)]
pub struct JoinChannelRequest {
    /// Channel name to join, created if it does not exist
    pub name: String,
}

impl JoinChannelRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request pairing a channel with a user
#[derive(Debug, Clone, Serialize)]
pub struct ChannelUserRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// User ID
    pub user: UserId,
}

impl ChannelUserRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, user: impl Into<UserId>) -> Self {
        Self {
            channel: channel.into(),
            user: user.into(),
        }
    }
}

/// Request to rename a channel
#[derive(Debug, Clone, Serialize)]
pub struct RenameChannelRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// New name
    pub name: String,
}

impl RenameChannelRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            name: name.into(),
        }
    }
}

/// Request to fetch channel history
#[derive(Debug, Clone, Serialize)]
pub struct ChannelHistoryRequest {
    /// Channel ID
    pub channel: ChannelId,
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

impl ChannelHistoryRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
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
pub struct MarkChannelRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Timestamp of the most recently seen message
    pub ts: Timestamp,
}

impl MarkChannelRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
        }
    }
}

/// Request to set a channel's purpose
#[derive(Debug, Clone, Serialize)]
pub struct SetChannelPurposeRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// New purpose text
    pub purpose: String,
}

impl SetChannelPurposeRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, purpose: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            purpose: purpose.into(),
        }
    }
}

/// Request to set a channel's topic
#[derive(Debug, Clone, Serialize)]
pub struct SetChannelTopicRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// New topic text
    pub topic: String,
}

impl SetChannelTopicRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, topic: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            topic: topic.into(),
        }
    }
}
