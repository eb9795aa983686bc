//! Channels service for the Slack API.
//!
//! Listing, membership, lifecycle, history, and metadata operations for
//! public channels.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
