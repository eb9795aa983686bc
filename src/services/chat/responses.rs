//! Response types for the chat service.

use crate::types::{ChannelId, Message, Timestamp};
use serde::Deserialize;

/// Response from chat.postMessage
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Success indicator
    pub ok: bool,
    /// Timestamp assigned to the new message
    pub ts: Timestamp,
    /// Channel the message landed in
    pub channel: ChannelId,
    /// Echo of the posted message
    #[serde(default)]
    pub message: Option<Message>,
}

/// Response from chat.update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessageResponse {
    /// Success indicator
    pub ok: bool,
    /// Channel containing the message
    pub channel: ChannelId,
    /// Timestamp of the updated message
    pub ts: Timestamp,
    /// Text after the update
    #[serde(default)]
    pub text: Option<String>,
}

/// Response from chat.delete
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteMessageResponse {
    /// Success indicator
    pub ok: bool,
    /// Channel the message was deleted from
    pub channel: ChannelId,
    /// Timestamp of the deleted message
    pub ts: Timestamp,
}
