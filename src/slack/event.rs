//! The subset of the Slack Events API we listen to: the URL verification
//! handshake and `link_shared` callbacks.
//!
//! <https://api.slack.com/apis/connections/events-api#callback-field>

use crate::error::Failure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The envelope `type` Slack uses when checking a newly configured request
/// URL.
pub const URL_VERIFICATION: &str = "url_verification";

/// Channels are referred to by their underlying ID, which Slack hands us with
/// every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelId(pub String);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outer wrapper of every request Slack sends us.
#[derive(Debug, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub typ: String,
    pub challenge: Option<String>,
    pub team_id: Option<String>,
    pub event: Option<Event>,
}

/// <https://api.slack.com/events/link_shared>
#[derive(Debug, PartialEq, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub typ: Option<String>,
    pub event_ts: Option<String>,
    pub channel: ChannelId,
    #[serde(default)]
    pub links: Vec<SharedLink>,
}

/// Only the URL matters to us; it's kept as Slack sent it, without checking
/// it's well formed.
#[derive(Debug, PartialEq, Deserialize)]
pub struct SharedLink {
    #[serde(default)]
    pub domain: String,
    pub url: String,
}

/// What an envelope asks of us, having checked that everything we need is
/// present.
#[derive(Debug, PartialEq)]
pub enum Callback<'a> {
    Verification {
        challenge: &'a str,
    },
    /// Only the first link is considered.
    LinkShared {
        event: &'a Event,
        link: &'a SharedLink,
    },
}

impl EventEnvelope {
    pub fn interpret(&self) -> Result<Callback<'_>, Failure> {
        if self.typ == URL_VERIFICATION {
            return self
                .challenge
                .as_deref()
                .map(|challenge| Callback::Verification { challenge })
                .ok_or(Failure::MissingChallenge);
        }

        let event = self.event.as_ref().ok_or(Failure::MissingEvent)?;
        let link = event.links.first().ok_or(Failure::MissingLink)?;

        Ok(Callback::LinkShared { event, link })
    }
}
