//! Response types for the channels service.

use crate::types::{Channel, ChannelId, Message, Timestamp};
use serde::Deserialize;

/// Response from channels.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListChannelsResponse {
    /// Success indicator
    pub ok: bool,
    /// Channels visible to the caller
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// Response from channels.info, channels.create, and channels.invite
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelResponse {
    /// Success indicator
    pub ok: bool,
    /// The channel in question
    pub channel: Channel,
}

/// Response from channels.join
#[derive(Debug, Clone, Deserialize)]
pub struct JoinChannelResponse {
    /// Success indicator
    pub ok: bool,
    /// The joined channel
    pub channel: Channel,
    /// Set when the caller was already a member
    #[serde(default)]
    pub already_in_channel: Option<bool>,
}

/// Response from channels.leave
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveChannelResponse {
    /// Success indicator
    pub ok: bool,
    /// Set when the caller was not a member to begin with
    #[serde(default)]
    pub not_in_channel: Option<bool>,
}

/// Channel identity returned by a rename
#[derive(Debug, Clone, Deserialize)]
pub struct RenamedChannel {
    /// Channel ID, unchanged by the rename
    pub id: ChannelId,
    /// New name
    pub name: String,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: Option<i64>,
}

/// Response from channels.rename
#[derive(Debug, Clone, Deserialize)]
pub struct RenameChannelResponse {
    /// Success indicator
    pub ok: bool,
    /// Channel identity after the rename
    pub channel: RenamedChannel,
}

/// Response from channels.history
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelHistoryResponse {
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

/// Response from channels.setPurpose
#[derive(Debug, Clone, Deserialize)]
pub struct SetChannelPurposeResponse {
    /// Success indicator
    pub ok: bool,
    /// Purpose text as stored
    pub purpose: String,
}

/// Response from channels.setTopic
#[derive(Debug, Clone, Deserialize)]
pub struct SetChannelTopicResponse {
    /// Success indicator
    pub ok: bool,
    /// Topic text as stored
    pub topic: String,
}

/// Response for channel operations that return nothing beyond `ok`
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelAckResponse {
    /// Success indicator
    pub ok: bool,
}
