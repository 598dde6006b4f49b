//! Send a marketplace listing to a Slack channel as a structured message.

use super::{api::*, block::*, event::ChannelId, SlackBotToken, SlackError};
use crate::meli::item::{Item, ItemDescription};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
pub struct MessageRequest {
    channel: ChannelId,
    blocks: Vec<Block>,
    // Used for notifications in the presence of `blocks`.
    text: String,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
}

impl SlackClient {
    /// Post a message. Only a failure to reach Slack at all is reported as
    /// [SlackError::APIRequestFailed]; anything Slack says back that isn't a
    /// success becomes [SlackError::APIResponseError].
    pub async fn post_message(
        &self,
        msg: &MessageRequest,
        token: &SlackBotToken,
    ) -> Result<(), SlackError> {
        let body = self
            .post("/chat.postMessage", token)
            .json(msg)
            .send()
            .await?
            .text()
            .await;

        decode_response(body)
    }
}

/// Once Slack has the request, whatever comes back is Slack's answer, even a
/// body we fail to read.
fn decode_response<E: fmt::Display>(body: Result<String, E>) -> Result<(), SlackError> {
    let body = body
        .map_err(|e| SlackError::APIResponseError(format!("unreadable response: {}", e)))?;

    match serde_json::from_str::<APIResult<MessageResponse>>(&body) {
        Ok(APIResult::Ok(_)) => Ok(()),
        Ok(APIResult::Err(res)) => Err(SlackError::APIResponseError(res.error)),
        Err(_) => Err(SlackError::APIResponseError(format!(
            "unrecognised response: {}",
            body
        ))),
    }
}

/// Put together the message for a listing, mapping it to its format on
/// Slack's end.
pub fn build_message(channel: &ChannelId, item: &Item, desc: &ItemDescription) -> MessageRequest {
    let msg = MessageRequest {
        channel: channel.clone(),
        blocks: build_blocks(item, desc),
        text: build_notif_text(item),
    };

    match serde_json::to_string(&msg) {
        Ok(raw) => debug!(channel = %channel, "Built listing message: {}", raw),
        Err(e) => debug!(channel = %channel, "Built unprintable listing message: {}", e),
    }

    msg
}

fn build_blocks(item: &Item, desc: &ItemDescription) -> Vec<Block> {
    vec![
        Block::Section {
            text: Text::Mrkdwn {
                text: format!(
                    "*{}*\n\n*{}* {}",
                    item.title, item.currency_id, item.price
                ),
            },
            accessory: Some(Accessory::Image {
                image_url: item.secure_thumbnail.to_owned(),
                alt_text: item.title.to_owned(),
            }),
        },
        Block::Context {
            elements: vec![Text::Mrkdwn {
                text: format!("*Description:* {} ", fmt_description(&desc.plain_text)),
            }],
        },
    ]
}

fn build_notif_text(item: &Item) -> String {
    format!("{}: {} {}", item.title, item.currency_id, item.price)
}

/// Double quotes in descriptions are swapped for single quotes, which is how
/// listings have always been shown in the channel.
fn fmt_description(x: &str) -> String {
    x.replace('"', "'")
}
