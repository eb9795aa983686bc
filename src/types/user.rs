//! User types for the Slack API.

use super::{TeamId, UserId};
use serde::{Deserialize, Serialize};

/// Slack user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Username
    #[serde(default)]
    pub name: Option<String>,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// Whether deleted/deactivated
    #[serde(default)]
    pub deleted: bool,
    /// User color
    #[serde(default)]
    pub color: Option<String>,
    /// Timezone
    #[serde(default)]
    pub tz: Option<String>,
    /// Timezone label
    #[serde(default)]
    pub tz_label: Option<String>,
    /// Timezone offset in seconds
    #[serde(default)]
    pub tz_offset: Option<i32>,
    /// User profile
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Whether admin
    #[serde(default)]
    pub is_admin: bool,
    /// Whether owner
    #[serde(default)]
    pub is_owner: bool,
    /// Whether primary owner
    #[serde(default)]
    pub is_primary_owner: bool,
    /// Whether restricted
    #[serde(default)]
    pub is_restricted: bool,
    /// Whether ultra restricted
    #[serde(default)]
    pub is_ultra_restricted: bool,
    /// Whether this account is a bot
    #[serde(default)]
    pub is_bot: bool,
    /// Whether two-factor auth is enabled
    #[serde(default)]
    pub has_2fa: bool,
    /// Presence, when the listing includes it
    #[serde(default)]
    pub presence: Option<String>,
}

impl User {
    /// Get the best display name for this user
    pub fn display_name(&self) -> &str {
        if let Some(name) = &self.name {
            if !name.is_empty() {
                return name;
            }
        }
        if let Some(real_name) = &self.real_name {
            if !real_name.is_empty() {
                return real_name;
            }
        }
        self.id.as_str()
    }
}

/// User profile details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Skype handle
    #[serde(default)]
    pub skype: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Job title
    #[serde(default)]
    pub title: Option<String>,
}

/// Presence values reported by the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Connected and recently active
    Active,
    /// Not connected, or idle
    Away,
    /// Let the server derive presence from connection state
    Auto,
}

impl Presence {
    /// Wire value for presence-setting requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Active => "active",
            Presence::Away => "away",
            Presence::Auto => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback_chain() {
        let mut user: User = serde_json::from_str(r#"{"id": "U1", "name": "bobby"}"#).unwrap();
        assert_eq!(user.display_name(), "bobby");

        user.name = Some(String::new());
        user.real_name = Some("Bobby Tables".to_string());
        assert_eq!(user.display_name(), "Bobby Tables");

        user.real_name = None;
        assert_eq!(user.display_name(), "U1");
    }

    #[test]
    fn test_presence_wire_values() {
        assert_eq!(Presence::Away.as_str(), "away");
        assert_eq!(serde_json::to_string(&Presence::Auto).unwrap(), "\"auto\"");
    }
}
