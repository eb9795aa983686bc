//! Response types for the search service.

use crate::types::{File, Message, Paging};
use serde::Deserialize;

/// Message matches within a search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageMatches {
    /// Total matching messages
    #[serde(default)]
    pub total: i64,
    /// Pagination block
    #[serde(default)]
    pub paging: Option<Paging>,
    /// Matches on this page
    #[serde(default)]
    pub matches: Vec<Message>,
}

/// File matches within a search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileMatches {
    /// Total matching files
    #[serde(default)]
    pub total: i64,
    /// Pagination block
    #[serde(default)]
    pub paging: Option<Paging>,
    /// Matches on this page
    #[serde(default)]
    pub matches: Vec<File>,
}

/// Response from search.all
#[derive(Debug, Clone, Deserialize)]
pub struct SearchAllResponse {
    /// Success indicator
    pub ok: bool,
    /// Echo of the query
    #[serde(default)]
    pub query: Option<String>,
    /// Message matches
    #[serde(default)]
    pub messages: Option<MessageMatches>,
    /// File matches
    #[serde(default)]
    pub files: Option<FileMatches>,
}

/// Response from search.messages
#[derive(Debug, Clone, Deserialize)]
pub struct SearchMessagesResponse {
    /// Success indicator
    pub ok: bool,
    /// Echo of the query
    #[serde(default)]
    pub query: Option<String>,
    /// Message matches
    #[serde(default)]
    pub messages: Option<MessageMatches>,
}

/// Response from search.files
#[derive(Debug, Clone, Deserialize)]
pub struct SearchFilesResponse {
    /// Success indicator
    pub ok: bool,
    /// Echo of the query
    #[serde(default)]
    pub query: Option<String>,
    /// File matches
    #[serde(default)]
    pub files: Option<FileMatches>,
}
