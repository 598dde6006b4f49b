use crate::{meli::MeliError, slack::SlackError};
use std::fmt;

/// Sum type representing every way relaying a Slack event can fail.
#[derive(Debug)]
pub enum Failure {
    MalformedPayload(serde_json::Error),
    MissingChallenge,
    MissingEvent,
    MissingLink,
    /// The shared link doesn't contain a listing identifier.
    UnrecognisedLink(String),
    Marketplace(MeliError),
    Slack(SlackError),
}

impl From<MeliError> for Failure {
    fn from(e: MeliError) -> Self {
        Failure::Marketplace(e)
    }
}

impl From<SlackError> for Failure {
    fn from(e: SlackError) -> Self {
        Failure::Slack(e)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            Failure::MalformedPayload(e) => format!("Failed to deserialize payload: {}", e),
            Failure::MissingChallenge => "Verification request is missing a challenge".into(),
            Failure::MissingEvent => "Event callback is missing an event".into(),
            Failure::MissingLink => "Event does not contain any links".into(),
            Failure::UnrecognisedLink(u) => format!("No marketplace item found in link: {}", u),
            Failure::Marketplace(e) => e.to_string(),
            Failure::Slack(e) => e.to_string(),
        };

        write!(f, "{}", x)
    }
}
