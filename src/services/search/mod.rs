//! Search service for the Slack API.
//!
//! Full-text search across messages and files.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
