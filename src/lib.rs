//! Slack Web API Client
//!
//! Client library for the Slack Web API with:
//! - One typed method per remote operation (chat, channels, groups, im, users, ...)
//! - Lazy name-to-identifier resolution with per-category caching
//! - Form-encoded transport with typed error translation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = slack_web::create_client_from_env()?;
//!
//!     // Post a message, addressing the channel by display name
//!     let response = client.post_message_to("#general", "Hello, Slack!").await?;
//!
//!     println!("Message posted: {}", response.ts);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod client;
pub mod config;
pub mod errors;
pub mod resolver;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{SlackClient, SlackClientImpl};
pub use config::{SlackConfig, SlackConfigBuilder};
pub use errors::{SlackError, SlackResult};
pub use resolver::{Category, Resolver};

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted when the builder opts into env credentials
pub const TOKEN_ENV_VAR: &str = "SLACK_TOKEN";

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<SlackClientImpl> {
    SlackClientImpl::new(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_TOKEN` - API token
/// - `SLACK_BASE_URL` - Override for the API base URL
/// - `SLACK_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> SlackResult<SlackClientImpl> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
