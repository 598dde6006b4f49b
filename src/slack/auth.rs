//! Helpers around the bot token used to authenticate against Slack's Web API.

/// A newtype wrapper around the Slack bot token.
///
/// The token is sent exactly as configured, so it's expected to already carry
/// its scheme, for example `Bearer xoxb-...`.
#[derive(Clone)]
pub struct SlackBotToken(pub String);

/// Convert a bot token to an `Authorization` header value.
///
/// ```
/// let token = SlackBotToken("Bearer xoxb-foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
/// ```
pub fn to_auth_header_val(t: &SlackBotToken) -> String {
    t.0.to_owned()
}
