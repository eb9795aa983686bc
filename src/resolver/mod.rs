//! Lazy name-to-identifier resolution.
//!
//! Slack operations want identifiers (`C024BE91L`) while callers usually
//! hold display names (`#general`). The [`Resolver`] keeps one
//! lazily-populated name-to-ID map per category, filled wholesale from the
//! category's listing operation on first use. A name that is absent after
//! a successful fill is a normal miss, not an error.

use crate::errors::{ResponseError, SlackResult};
use crate::services::ServiceContext;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Identifier categories with their own name cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Public channels, listed via `channels.list`
    Channel,
    /// Private groups, listed via `groups.list`
    Group,
    /// Users, listed via `users.list`
    User,
}

/// Static description of how one category is listed and keyed
#[derive(Debug)]
pub struct CategorySpec {
    /// Listing operation that returns every member of the category
    pub listing_operation: &'static str,
    /// Payload field holding the listing array
    pub payload_field: &'static str,
    /// Entry field holding the display name
    pub name_field: &'static str,
    /// Sigil callers may prefix names with
    pub sigil: char,
}

static CATEGORY_SPECS: [CategorySpec; 3] = [
    CategorySpec {
        listing_operation: "channels.list",
        payload_field: "channels",
        name_field: "name",
        sigil: '#',
    },
    CategorySpec {
        listing_operation: "groups.list",
        payload_field: "groups",
        name_field: "name",
        sigil: '#',
    },
    CategorySpec {
        listing_operation: "users.list",
        payload_field: "members",
        name_field: "name",
        sigil: '@',
    },
];

impl Category {
    fn index(self) -> usize {
        match self {
            Category::Channel => 0,
            Category::Group => 1,
            Category::User => 2,
        }
    }

    /// Listing and keying metadata for this category
    pub fn spec(self) -> &'static CategorySpec {
        &CATEGORY_SPECS[self.index()]
    }

    /// Category name, for diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Channel => "channel",
            Category::Group => "group",
            Category::User => "user",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type NameCache = Mutex<Option<HashMap<String, String>>>;

/// Name-to-identifier resolver with per-category caches.
///
/// Each cache has its own lock, held across the check-fetch-populate
/// sequence so concurrent lookups trigger at most one listing fetch per
/// category. A failed fetch leaves the cache exactly as it was.
pub struct Resolver {
    ctx: ServiceContext,
    caches: [NameCache; 3],
    im_cache: NameCache,
}

impl Resolver {
    /// Create a resolver issuing listing fetches through the given context
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            caches: [Mutex::new(None), Mutex::new(None), Mutex::new(None)],
            im_cache: Mutex::new(None),
        }
    }

    /// Resolve a display name to an identifier within one category.
    ///
    /// At most one leading sigil is stripped before lookup, so `#general`
    /// and `general` resolve alike while `##general` does not. Returns
    /// `Ok(None)` when the name is simply not present.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn resolve(&self, category: Category, name: &str) -> SlackResult<Option<String>> {
        let spec = category.spec();
        let key = strip_sigil(name, spec.sigil);

        let mut cache = self.caches[category.index()].lock().await;
        if cache.is_none() {
            let payload = self.ctx.call_raw(spec.listing_operation, Vec::new()).await?;
            let map = build_map(&payload, spec)?;
            debug!(category = %category, entries = map.len(), "Populated name cache");
            *cache = Some(map);
        }

        Ok(cache
            .as_ref()
            .and_then(|map| map.get(key))
            .cloned())
    }

    /// Resolve a user name to that user's direct-message conversation ID.
    ///
    /// The user name is resolved first; an unknown user short-circuits to
    /// `Ok(None)` without touching `im.list`. A known user without an open
    /// conversation is also a miss.
    #[instrument(skip(self))]
    pub async fn resolve_im(&self, name: &str) -> SlackResult<Option<String>> {
        let user_id = match self.resolve(Category::User, name).await? {
            Some(id) => id,
            None => return Ok(None),
        };

        let mut cache = self.im_cache.lock().await;
        if cache.is_none() {
            let payload = self.ctx.call_raw("im.list", Vec::new()).await?;
            let map = build_keyed_map(&payload, "im.list", "ims", "user")?;
            debug!(entries = map.len(), "Populated direct-message cache");
            *cache = Some(map);
        }

        Ok(cache
            .as_ref()
            .and_then(|map| map.get(&user_id))
            .cloned())
    }

    /// Drop one category's cache so the next lookup refetches the listing
    pub async fn invalidate(&self, category: Category) {
        *self.caches[category.index()].lock().await = None;
    }

    /// Drop every cache, including the direct-message one
    pub async fn invalidate_all(&self) {
        for cache in &self.caches {
            *cache.lock().await = None;
        }
        *self.im_cache.lock().await = None;
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

/// Strip at most one leading sigil from a name
fn strip_sigil(name: &str, sigil: char) -> &str {
    name.strip_prefix(sigil).unwrap_or(name)
}

fn build_map(payload: &Value, spec: &CategorySpec) -> SlackResult<HashMap<String, String>> {
    build_keyed_map(
        payload,
        spec.listing_operation,
        spec.payload_field,
        spec.name_field,
    )
}

/// Build a key-to-ID map from a listing payload.
///
/// Entries missing the key or ID field are skipped; a payload missing the
/// listing array entirely is malformed and rejected.
fn build_keyed_map(
    payload: &Value,
    operation: &str,
    payload_field: &str,
    key_field: &str,
) -> SlackResult<HashMap<String, String>> {
    let entries = payload
        .get(payload_field)
        .and_then(Value::as_array)
        .ok_or_else(|| ResponseError::UnexpectedResponse {
            message: format!("{} payload has no '{}' array", operation, payload_field),
        })?;

    let mut map = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let (Some(key), Some(id)) = (
            entry.get(key_field).and_then(Value::as_str),
            entry.get("id").and_then(Value::as_str),
        ) {
            map.insert(key.to_string(), id.to_string());
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_sigil_removes_at_most_one() {
        assert_eq!(strip_sigil("#general", '#'), "general");
        assert_eq!(strip_sigil("general", '#'), "general");
        assert_eq!(strip_sigil("##general", '#'), "#general");
        assert_eq!(strip_sigil("@#mixed", '@'), "#mixed");
    }

    #[test]
    fn test_category_spec_table() {
        assert_eq!(Category::Channel.spec().listing_operation, "channels.list");
        assert_eq!(Category::Group.spec().payload_field, "groups");
        assert_eq!(Category::User.spec().name_field, "name");
        assert_eq!(Category::User.spec().sigil, '@');
    }

    #[test]
    fn test_build_map_skips_malformed_entries() {
        let payload = json!({
            "ok": true,
            "channels": [
                {"id": "C1", "name": "general"},
                {"id": "C2"},
                {"name": "orphan"},
                {"id": "C3", "name": "random"}
            ]
        });

        let map = build_map(&payload, Category::Channel.spec()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("general").map(String::as_str), Some("C1"));
        assert_eq!(map.get("random").map(String::as_str), Some("C3"));
    }

    #[test]
    fn test_build_map_rejects_missing_array() {
        let payload = json!({"ok": true});
        let err = build_map(&payload, Category::Channel.spec()).unwrap_err();
        assert_eq!(err.error_code(), "SLACK_RESPONSE");
    }
}
