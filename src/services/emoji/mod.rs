//! Emoji service.
//!
//! Listing custom emoji defined in the workspace.

use crate::errors::SlackResult;
use crate::services::ServiceContext;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::instrument;

/// Response from emoji.list
#[derive(Debug, Clone, Deserialize)]
pub struct EmojiListResponse {
    /// Success indicator
    pub ok: bool,
    /// Custom emoji, name to image URL or `alias:<name>` reference
    #[serde(default)]
    pub emoji: HashMap<String, String>,
}

impl EmojiListResponse {
    /// Resolve an emoji, following at most one alias level
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let value = self.emoji.get(name)?;
        match value.strip_prefix("alias:") {
            Some(target) => self.emoji.get(target).map(String::as_str),
            None => Some(value),
        }
    }
}

/// Trait for emoji operations
#[async_trait]
pub trait EmojiServiceTrait: Send + Sync {
    /// List custom emoji
    async fn list(&self) -> SlackResult<EmojiListResponse>;
}

/// Emoji service implementation
#[derive(Clone, Debug)]
pub struct EmojiService {
    ctx: ServiceContext,
}

impl EmojiService {
    /// Create a new emoji service
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl EmojiServiceTrait for EmojiService {
    #[instrument(skip(self))]
    async fn list(&self) -> SlackResult<EmojiListResponse> {
        let payload = self.ctx.call_raw("emoji.list", Vec::new()).await?;
        serde_json::from_value(payload).map_err(|e| crate::errors::ResponseError::from(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_follows_one_alias_level() {
        let response: EmojiListResponse = serde_json::from_str(
            r#"{"ok":true,"emoji":{
                "shipit": "https://emoji.example/shipit.png",
                "squirrel": "alias:shipit",
                "loop": "alias:loop"
            }}"#,
        )
        .unwrap();

        assert_eq!(
            response.resolve("shipit"),
            Some("https://emoji.example/shipit.png")
        );
        assert_eq!(
            response.resolve("squirrel"),
            Some("https://emoji.example/shipit.png")
        );
        assert_eq!(response.resolve("missing"), None);
        // An alias pointing at itself resolves to its own alias text.
        assert_eq!(response.resolve("loop"), Some("alias:loop"));
    }
}
