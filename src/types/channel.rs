//! Channel, group, and direct-message conversation types.

use super::{ChannelId, GroupId, ImId, UserId};
use serde::{Deserialize, Serialize};

/// Topic or purpose attached to a channel or group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicInfo {
    /// Topic/purpose text
    #[serde(default)]
    pub value: String,
    /// User who last set it
    #[serde(default)]
    pub creator: Option<UserId>,
    /// When it was last set (Unix seconds)
    #[serde(default)]
    pub last_set: Option<i64>,
}

/// Public channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID
    pub id: ChannelId,
    /// Channel name (without #)
    pub name: String,
    /// Whether this is a channel
    #[serde(default)]
    pub is_channel: bool,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: Option<i64>,
    /// Creator user ID
    #[serde(default)]
    pub creator: Option<UserId>,
    /// Whether archived
    #[serde(default)]
    pub is_archived: bool,
    /// Whether this is the workspace default channel
    #[serde(default)]
    pub is_general: bool,
    /// Whether the calling user is a member
    #[serde(default)]
    pub is_member: bool,
    /// Member user IDs
    #[serde(default)]
    pub members: Vec<UserId>,
    /// Channel topic
    #[serde(default)]
    pub topic: Option<TopicInfo>,
    /// Channel purpose
    #[serde(default)]
    pub purpose: Option<TopicInfo>,
    /// Member count, when the listing includes it
    #[serde(default)]
    pub num_members: Option<i64>,
}

/// Private group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group ID
    pub id: GroupId,
    /// Group name (without #)
    pub name: String,
    /// Whether this is a group
    #[serde(default)]
    pub is_group: bool,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: Option<i64>,
    /// Creator user ID
    #[serde(default)]
    pub creator: Option<UserId>,
    /// Whether archived
    #[serde(default)]
    pub is_archived: bool,
    /// Member user IDs
    #[serde(default)]
    pub members: Vec<UserId>,
    /// Group topic
    #[serde(default)]
    pub topic: Option<TopicInfo>,
    /// Group purpose
    #[serde(default)]
    pub purpose: Option<TopicInfo>,
}

/// Direct-message conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Im {
    /// Conversation ID
    pub id: ImId,
    /// Whether this is a direct message
    #[serde(default)]
    pub is_im: bool,
    /// The other party
    pub user: UserId,
    /// Creation timestamp (Unix seconds)
    #[serde(default)]
    pub created: Option<i64>,
    /// Whether the other party has been deactivated
    #[serde(default)]
    pub is_user_deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_deserializes_listing_entry() {
        let json = r#"{
            "id": "C024BE91L",
            "name": "general",
            "is_channel": true,
            "created": 1360782804,
            "creator": "U024BE7LH",
            "is_archived": false,
            "is_general": true,
            "is_member": true,
            "members": ["U024BE7LH"],
            "topic": {"value": "Company-wide chat", "creator": "U024BE7LH", "last_set": 1369677212},
            "num_members": 6
        }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.id.as_str(), "C024BE91L");
        assert_eq!(channel.name, "general");
        assert!(channel.is_general);
        assert_eq!(channel.topic.unwrap().value, "Company-wide chat");
        assert!(channel.purpose.is_none());
    }

    #[test]
    fn test_im_deserializes_minimal_entry() {
        let json = r#"{"id": "D024BFF1M", "is_im": true, "user": "U024BE7LH", "created": 1360782804}"#;
        let im: Im = serde_json::from_str(json).unwrap();
        assert_eq!(im.id.as_str(), "D024BFF1M");
        assert_eq!(im.user.as_str(), "U024BE7LH");
        assert!(!im.is_user_deleted);
    }
}
