//! Request types for the chat service.

use crate::types::{ChannelId, Timestamp};
use serde::Serialize;

/// Request to post a message
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    /// Target channel, group, or DM conversation ID
    pub channel: ChannelId,
    /// Message text
    pub text: String,
    /// Bot username to post as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Post as the authenticated user rather than a bot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_user: Option<bool>,
    /// Message parsing mode (`full` or `none`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<String>,
    /// Link channel and user names found in the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_names: Option<bool>,
    /// Unfurl links in the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
    /// Icon image URL for the posting bot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Icon emoji for the posting bot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
}

impl PostMessageRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            username: None,
            as_user: None,
            parse: None,
            link_names: None,
            unfurl_links: None,
            icon_url: None,
            icon_emoji: None,
        }
    }

    /// Set the bot username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Post as the authenticated user
    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }

    /// Set the parsing mode
    pub fn parse(mut self, parse: impl Into<String>) -> Self {
        self.parse = Some(parse.into());
        self
    }

    /// Link names found in the text
    pub fn link_names(mut self, link: bool) -> Self {
        self.link_names = Some(link);
        self
    }

    /// Unfurl links in the text
    pub fn unfurl_links(mut self, unfurl: bool) -> Self {
        self.unfurl_links = Some(unfurl);
        self
    }

    /// Set the bot icon URL
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Set the bot icon emoji
    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }
}

/// Request to update an existing message
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMessageRequest {
    /// Channel containing the message
    pub channel: ChannelId,
    /// Timestamp of the message to update
    pub ts: Timestamp,
    /// Replacement text
    pub text: String,
}

impl UpdateMessageRequest {
    /// Create a new request
    pub fn new(
        channel: impl Into<ChannelId>,
        ts: impl Into<Timestamp>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
            text: text.into(),
        }
    }
}

/// Request to delete a message
#[derive(Debug, Clone, Serialize)]
pub struct DeleteMessageRequest {
    /// Channel containing the message
    pub channel: ChannelId,
    /// Timestamp of the message to delete
    pub ts: Timestamp,
}

impl DeleteMessageRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
        }
    }
}
