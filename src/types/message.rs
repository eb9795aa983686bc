//! Message and file types for the Slack API.

use super::{ChannelId, FileId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Slack message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message type
    #[serde(rename = "type", default)]
    pub message_type: Option<String>,
    /// Message subtype
    #[serde(default)]
    pub subtype: Option<String>,
    /// Message timestamp (unique ID within a channel)
    pub ts: Timestamp,
    /// User who sent the message
    #[serde(default)]
    pub user: Option<UserId>,
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
    /// Username, for bot messages
    #[serde(default)]
    pub username: Option<String>,
    /// Channel ID, included in some responses
    #[serde(default)]
    pub channel: Option<ChannelId>,
    /// Whether the calling user starred this message
    #[serde(default)]
    pub is_starred: Option<bool>,
    /// Permalink, included in search results
    #[serde(default)]
    pub permalink: Option<String>,
}

/// File metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// File ID
    pub id: FileId,
    /// Filename
    #[serde(default)]
    pub name: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// File type (e.g. `png`, `text`)
    #[serde(default)]
    pub filetype: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    /// Uploader
    #[serde(default)]
    pub user: Option<UserId>,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: Option<i64>,
    /// Channels the file has been shared to
    #[serde(default)]
    pub channels: Vec<ChannelId>,
    /// Permalink
    #[serde(default)]
    pub permalink: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserializes_history_entry() {
        let json = r#"{
            "type": "message",
            "ts": "1358546515.000008",
            "user": "U2147483896",
            "text": "Hello"
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.ts.as_str(), "1358546515.000008");
        assert_eq!(message.text.as_deref(), Some("Hello"));
        assert!(message.subtype.is_none());
    }

    #[test]
    fn test_file_deserializes_listing_entry() {
        let json = r#"{
            "id": "F12345678",
            "name": "test.png",
            "filetype": "png",
            "size": 12345,
            "user": "U024BE7LH",
            "channels": ["C024BE91L"]
        }"#;

        let file: File = serde_json::from_str(json).unwrap();
        assert_eq!(file.id.as_str(), "F12345678");
        assert_eq!(file.filetype.as_deref(), Some("png"));
        assert_eq!(file.channels.len(), 1);
    }
}
