//! Request types for the users service.

use crate::types::{Presence, UserId};
use serde::Serialize;

/// Request to list users
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersRequest {
    /// Include presence in each listing entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<bool>,
}

impl ListUsersRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Include presence in the listing
    pub fn presence(mut self, include: bool) -> Self {
        self.presence = Some(include);
        self
    }
}

/// Request naming a single user
#[derive(Debug, Clone, Serialize)]
pub struct UserRequest {
    /// User ID
    pub user: UserId,
}

impl UserRequest {
    /// Create a new request
    pub fn new(user: impl Into<UserId>) -> Self {
        Self { user: user.into() }
    }
}

/// Request to set the authenticated user's presence
#[derive(Debug, Clone, Serialize)]
pub struct SetPresenceRequest {
    /// Requested presence
    pub presence: Presence,
}

impl SetPresenceRequest {
    /// Create a new request
    pub fn new(presence: Presence) -> Self {
        Self { presence }
    }

    /// Mark the authenticated user away
    pub fn away() -> Self {
        Self::new(Presence::Away)
    }

    /// Let the server derive presence automatically
    pub fn auto() -> Self {
        Self::new(Presence::Auto)
    }
}
