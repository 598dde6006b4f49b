//! Receives Slack Events API callbacks and answers shared marketplace links
//! with a structured message in the same channel.
//!
//! See [router] for the request flow and [message::build_message] for the
//! message layout.

pub mod api;
pub mod auth;
mod block;
pub mod error;
pub mod event;
pub mod message;
pub mod router;

pub use auth::SlackBotToken;
pub use error::SlackError;
