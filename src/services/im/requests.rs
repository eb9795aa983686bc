//! Request types for the direct-message service.

use crate::types::{ImId, Timestamp};
use serde::Serialize;

/// Request naming a single direct-message conversation
#[derive(Debug, Clone, Serialize)]
pub struct ImRequest {
    /// Conversation ID, sent as `channel` on the wire
    pub channel: ImId,
}

impl ImRequest {
    /// Create a new request
    pub fn new(im: impl Into<ImId>) -> Self {
        Self {
            channel: im.into(),
        }
    }
}

/// Request to fetch direct-message history
#[derive(Debug, Clone, Serialize)]
pub struct ImHistoryRequest {
    /// Conversation ID, sent as `channel` on the wire
    pub channel: ImId,
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

impl ImHistoryRequest {
    /// Create a new request
    pub fn new(im: impl Into<ImId>) -> Self {
        Self {
            channel: im.into(),
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
pub struct MarkImRequest {
    /// Conversation ID, sent as `channel` on the wire
    pub channel: ImId,
    /// Timestamp of the most recently seen message
    pub ts: Timestamp,
}

impl MarkImRequest {
    /// Create a new request
    pub fn new(im: impl Into<ImId>, ts: impl Into<Timestamp>) -> Self {
        Self {
            channel: im.into(),
            ts: ts.into(),
        }
    }
}
