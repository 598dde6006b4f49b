use serde::Serialize;

/// Slack's block API is its most modern, and allows us to mix rich formatting
/// with foreign plaintext. This is our limited subset thereof.
///
/// <https://api.slack.com/reference/block-kit/blocks>
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: Text,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
    /// Smaller, greyed out text beneath the main content.
    Context { elements: Vec<Text> },
}

/// <https://api.slack.com/reference/block-kit/composition-objects#text>
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// "mrkdown" is Slack's alternative to Markdown.
    ///
    /// <https://api.slack.com/reference/surfaces/formatting#basics>
    Mrkdwn { text: String },
}

/// <https://api.slack.com/reference/block-kit/block-elements#image>
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Image { image_url: String, alt_text: String },
}
