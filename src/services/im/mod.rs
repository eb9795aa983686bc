//! Direct-message service for the Slack API.
//!
//! Listing, history, read-cursor, and close operations for
//! direct-message conversations.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
