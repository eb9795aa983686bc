//! Test fixtures for Slack API responses.
//!
//! Provides realistic test data for unit tests.

use crate::types::*;

/// Create a fixture channel
pub fn channel() -> Channel {
    Channel {
        id: ChannelId::new("C1234567890"),
        name: "general".to_string(),
        is_channel: true,
        created: Some(1234567890),
        creator: Some(UserId::new("U1234567890")),
        is_archived: false,
        is_general: true,
        is_member: true,
        members: vec![UserId::new("U1234567890"), UserId::new("U0987654321")],
        topic: Some(TopicInfo {
            value: "General discussion".to_string(),
            creator: Some(UserId::new("U1234567890")),
            last_set: Some(1234567890),
        }),
        purpose: Some(TopicInfo {
            value: "A channel for general discussions".to_string(),
            creator: Some(UserId::new("U1234567890")),
            last_set: Some(1234567890),
        }),
        num_members: Some(42),
    }
}

/// Create a fixture private group
pub fn group() -> Group {
    Group {
        id: GroupId::new("G1234567890"),
        name: "secret-plans".to_string(),
        is_group: true,
        created: Some(1234567890),
        creator: Some(UserId::new("U1234567890")),
        is_archived: false,
        members: vec![UserId::new("U1234567890")],
        topic: None,
        purpose: None,
    }
}

/// Create a fixture direct-message conversation
pub fn im() -> Im {
    Im {
        id: ImId::new("D1234567890"),
        is_im: true,
        user: UserId::new("U1234567890"),
        created: Some(1234567890),
        is_user_deleted: false,
    }
}

/// Create a fixture message
pub fn message() -> Message {
    Message {
        message_type: Some("message".to_string()),
        subtype: None,
        ts: Timestamp::new("1234567890.123456"),
        user: Some(UserId::new("U1234567890")),
        text: Some("Hello, World!".to_string()),
        username: None,
        channel: Some(ChannelId::new("C1234567890")),
        is_starred: None,
        permalink: None,
    }
}

/// Create a fixture bot message
pub fn bot_message() -> Message {
    let mut msg = message();
    msg.subtype = Some("bot_message".to_string());
    msg.user = None;
    msg.username = Some("Test Bot".to_string());
    msg
}

/// Create a fixture user
pub fn user() -> User {
    User {
        id: UserId::new("U1234567890"),
        name: Some("jdoe".to_string()),
        real_name: Some("John Doe".to_string()),
        team_id: Some(TeamId::new("T1234567890")),
        deleted: false,
        color: Some("9f69e7".to_string()),
        tz: Some("America/New_York".to_string()),
        tz_label: Some("Eastern Standard Time".to_string()),
        tz_offset: Some(-18000),
        profile: Some(user_profile()),
        is_admin: false,
        is_owner: false,
        is_primary_owner: false,
        is_restricted: false,
        is_ultra_restricted: false,
        is_bot: false,
        has_2fa: false,
        presence: Some("active".to_string()),
    }
}

/// Create a fixture user profile
pub fn user_profile() -> UserProfile {
    UserProfile {
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        real_name: Some("John Doe".to_string()),
        email: Some("john.doe@example.com".to_string()),
        skype: None,
        phone: Some("+1234567890".to_string()),
        title: Some("Software Engineer".to_string()),
    }
}

/// Create a fixture bot user
pub fn bot_user() -> User {
    let mut u = user();
    u.id = UserId::new("U0BOT00001");
    u.name = Some("testbot".to_string());
    u.real_name = Some("Test Bot".to_string());
    u.is_bot = true;
    u
}

/// Create a fixture file
pub fn file() -> File {
    File {
        id: FileId::new("F1234567890"),
        name: Some("document.pdf".to_string()),
        title: Some("Important Document".to_string()),
        filetype: Some("pdf".to_string()),
        size: Some(1024000),
        user: Some(UserId::new("U1234567890")),
        created: Some(1234567890),
        channels: vec![ChannelId::new("C1234567890")],
        permalink: Some(
            "https://team.slack.com/files/U1234567890/F1234567890/document.pdf".to_string(),
        ),
    }
}

/// Create fixture JSON responses
pub mod responses {
    use serde_json::json;

    /// Create an OK response
    pub fn ok() -> serde_json::Value {
        json!({ "ok": true })
    }

    /// Create a channels.list response
    pub fn channels_list() -> serde_json::Value {
        json!({
            "ok": true,
            "channels": [
                {
                    "id": "C1234567890",
                    "name": "general",
                    "is_channel": true,
                    "is_member": true,
                    "created": 1234567890
                },
                {
                    "id": "C0987654321",
                    "name": "random",
                    "is_channel": true,
                    "is_member": true,
                    "created": 1234567890
                }
            ]
        })
    }

    /// Create a groups.list response
    pub fn groups_list() -> serde_json::Value {
        json!({
            "ok": true,
            "groups": [
                {
                    "id": "G1234567890",
                    "name": "secret-plans",
                    "is_group": true,
                    "created": 1234567890
                }
            ]
        })
    }

    /// Create a users.list response
    pub fn users_list() -> serde_json::Value {
        json!({
            "ok": true,
            "members": [
                {
                    "id": "U1234567890",
                    "name": "jdoe",
                    "real_name": "John Doe",
                    "is_bot": false
                },
                {
                    "id": "U0987654321",
                    "name": "jsmith",
                    "real_name": "Jane Smith",
                    "is_bot": false
                }
            ]
        })
    }

    /// Create an im.list response
    pub fn im_list() -> serde_json::Value {
        json!({
            "ok": true,
            "ims": [
                {
                    "id": "D1234567890",
                    "is_im": true,
                    "user": "U1234567890",
                    "created": 1234567890
                },
                {
                    "id": "D0987654321",
                    "is_im": true,
                    "user": "U0987654321",
                    "created": 1234567890
                }
            ]
        })
    }

    /// Create a chat.postMessage response
    pub fn post_message() -> serde_json::Value {
        json!({
            "ok": true,
            "channel": "C1234567890",
            "ts": "1234567890.123456",
            "message": {
                "type": "message",
                "text": "Hello, World!",
                "user": "U1234567890",
                "ts": "1234567890.123456"
            }
        })
    }

    /// Create an auth.test response
    pub fn auth_test() -> serde_json::Value {
        json!({
            "ok": true,
            "url": "https://team.slack.com/",
            "team": "Test Team",
            "user": "jdoe",
            "team_id": "T1234567890",
            "user_id": "U1234567890"
        })
    }

    /// Create an error response
    pub fn error(code: &str) -> serde_json::Value {
        json!({
            "ok": false,
            "error": code
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_fixture() {
        let ch = channel();
        assert_eq!(ch.id.as_str(), "C1234567890");
        assert_eq!(ch.name, "general");
        assert!(ch.is_channel);
        assert!(ch.is_member);
    }

    #[test]
    fn test_user_fixture() {
        let u = user();
        assert_eq!(u.id.as_str(), "U1234567890");
        assert_eq!(u.name.as_deref(), Some("jdoe"));
        assert!(!u.is_bot);
    }

    #[test]
    fn test_im_fixture_points_at_user() {
        let dm = im();
        assert_eq!(dm.user.as_str(), "U1234567890");
        assert!(dm.is_im);
    }

    #[test]
    fn test_listing_fixtures_deserialize() {
        let parsed: crate::services::channels::ListChannelsResponse =
            serde_json::from_value(responses::channels_list()).unwrap();
        assert_eq!(parsed.channels.len(), 2);

        let parsed: crate::services::users::ListUsersResponse =
            serde_json::from_value(responses::users_list()).unwrap();
        assert_eq!(parsed.members.len(), 2);

        let parsed: crate::services::im::ListImsResponse =
            serde_json::from_value(responses::im_list()).unwrap();
        assert_eq!(parsed.ims.len(), 2);
    }
}
