//! Chat service for the Slack API.
//!
//! Posting, updating, and deleting messages.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
