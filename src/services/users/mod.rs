//! Users service for the Slack API.
//!
//! Listing, lookup, and presence operations for workspace members.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
