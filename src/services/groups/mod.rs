//! Groups service for the Slack API.
//!
//! Listing, membership, lifecycle, history, and metadata operations for
//! private groups. The wire protocol names the group parameter `channel`
//! even though it carries a group ID.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
