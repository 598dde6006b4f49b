//! Slack subrouter definition.
//!
//! The following subroute is supported:
//!
//! - POST: `/slack-message`

use super::{
    event::{Callback, EventEnvelope},
    message::build_message,
    SlackError,
};
use crate::{error::Failure, meli::id::extract_item_id, router::Deps};
use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Router};
use tracing::{error, info, warn};

/// The body we answer a successfully relayed event with.
pub const CONFIRMATION: &str = "Mensagem enviada.";

/// Instantiate a new Slack subrouter.
pub fn slack_router() -> Router<Deps> {
    Router::new().route("/slack-message", post(event_handler))
}

/// Handler for the POST subroute `/slack-message`.
///
/// Accepts an [EventEnvelope] in JSON format. The payload itself is trusted.
///
/// URL verification requests are answered with their challenge. Anything else
/// is expected to share a marketplace link, which is looked up and posted back
/// to the channel it was shared in.
async fn event_handler(
    State(deps): State<Deps>,
    // Parsed by hand so that malformed payloads are all answered alike.
    body: Bytes,
) -> Result<String, (StatusCode, String)> {
    relay(&deps, &body).await.map_err(|e| handle_failure(&e))
}

async fn relay(deps: &Deps, body: &[u8]) -> Result<String, Failure> {
    let envelope =
        serde_json::from_slice::<EventEnvelope>(body).map_err(Failure::MalformedPayload)?;

    match envelope.interpret()? {
        Callback::Verification { challenge } => {
            info!("Answering Slack URL verification");

            Ok(challenge.to_owned())
        }
        Callback::LinkShared { event, link } => {
            info!(
                team = envelope.team_id.as_deref().unwrap_or_default(),
                event = event.typ.as_deref().unwrap_or_default(),
                event_ts = event.event_ts.as_deref().unwrap_or_default(),
                channel = %event.channel,
                domain = %link.domain,
                "Relaying shared link"
            );

            let item_id = extract_item_id(&link.url);
            if item_id.is_empty() {
                return Err(Failure::UnrecognisedLink(link.url.clone()));
            }

            let item = deps.meli_client.fetch_item(&item_id).await?;
            let desc = deps.meli_client.fetch_item_description(&item_id).await?;

            let msg = build_message(&event.channel, &item, &desc);

            match deps.slack_client.post_message(&msg, &deps.slack_token).await {
                Ok(_) => info!(
                    item = %item_id,
                    permalink = %item.permalink,
                    descriptions = item.descriptions.len(),
                    "Posted listing"
                ),
                // Slack got the message, so there's nothing the sender could
                // do about it.
                Err(SlackError::APIResponseError(e)) => {
                    warn!(item = %item_id, "Slack did not accept listing: {}", e)
                }
                Err(e) => return Err(e.into()),
            }

            Ok(CONFIRMATION.to_owned())
        }
    }
}

pub fn handle_failure(e: &Failure) -> (StatusCode, String) {
    let code = match e {
        Failure::MalformedPayload(_)
        | Failure::MissingChallenge
        | Failure::MissingEvent
        | Failure::MissingLink
        | Failure::UnrecognisedLink(_) => StatusCode::BAD_REQUEST,
        Failure::Marketplace(_) => StatusCode::BAD_GATEWAY,
        Failure::Slack(SlackError::APIRequestFailed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        Failure::Slack(SlackError::APIResponseError(_)) => StatusCode::BAD_GATEWAY,
    };

    let es = e.to_string();

    error!("{}", es);
    (code, es)
}
