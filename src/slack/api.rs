//! Type definitions and helpers for the Slack Web API.

use super::auth::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// Slack retries event deliveries it considers failed. We'd rather drop a
/// message than post it twice.
const NO_RETRY_HEADER: &str = "X-Slack-No-Retry";

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client].
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Where Slack's API lives. Swappable so tests can point it at a mock server.
#[derive(Clone)]
pub struct SlackClient {
    base: String,
}

impl SlackClient {
    pub fn new(base: String) -> Self {
        Self { base }
    }

    /// Create a POST request to any Slack API endpoint, handling
    /// authentication.
    pub fn post<T: ToString>(&self, path: T, token: &SlackBotToken) -> reqwest::RequestBuilder {
        CLIENT
            .post(self.base.to_owned() + &path.to_string())
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
            .header(NO_RETRY_HEADER, "1")
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "channel": "C123ABC456"
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "invalid_auth"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

/// The universal response in case of an unsuccessful request.
// `ok` is checked so that an otherwise empty successful response can't be
// mistaken for this variant.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Empty {
        #[allow(dead_code)]
        #[serde(deserialize_with = "crate::de::only_true")]
        ok: bool,
    }

    #[test]
    fn test_api_result_variants() {
        let ok = serde_json::from_str::<APIResult<Empty>>(r#"{"ok": true}"#).unwrap();
        assert!(matches!(ok, APIResult::Ok(_)));

        let err = serde_json::from_str::<APIResult<Empty>>(
            r#"{"ok": false, "error": "channel_not_found"}"#,
        )
        .unwrap();
        match err {
            APIResult::Err(e) => assert_eq!(e.error, "channel_not_found"),
            APIResult::Ok(_) => panic!("expected an error response"),
        }

        assert!(serde_json::from_str::<APIResult<Empty>>(r#"{"ok": false}"#).is_err());
    }
}
