//! Response types for the direct-message service.

use crate::types::{Im, Message, Timestamp};
use serde::Deserialize;

/// Response from im.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListImsResponse {
    /// Success indicator
    pub ok: bool,
    /// Open direct-message conversations
    #[serde(default)]
    pub ims: Vec<Im>,
}

/// Response from im.history
#[derive(Debug, Clone, Deserialize)]
pub struct ImHistoryResponse {
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

/// Response from im.close
#[derive(Debug, Clone, Deserialize)]
pub struct CloseImResponse {
    /// Success indicator
    pub ok: bool,
    /// Set when the conversation was already closed
    #[serde(default)]
    pub already_closed: Option<bool>,
    /// Set when nothing changed
    #[serde(default)]
    pub no_op: Option<bool>,
}

/// Response for direct-message operations that return nothing beyond `ok`
#[derive(Debug, Clone, Deserialize)]
pub struct ImAckResponse {
    /// Success indicator
    pub ok: bool,
}
