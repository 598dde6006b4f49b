//! Helpers for the Mercado Libre API.

use super::MeliError;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

/// The base URL of the Mercado Libre API.
pub const API_BASE: &str = "https://api.mercadolibre.com";

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client].
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Where the marketplace API lives. Swappable so tests can point it at a mock
/// server.
#[derive(Clone)]
pub struct MeliClient {
    base: String,
}

impl MeliClient {
    pub fn new(base: String) -> Self {
        Self { base }
    }

    /// GET any API endpoint and decode its JSON body, treating any non-2xx
    /// status as a failure.
    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: String) -> Result<T, MeliError> {
        let res = CLIENT.get(self.base.to_owned() + &path).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(MeliError::APIResponseStatus(status));
        }

        res.json().await.map_err(MeliError::APIResponseUndecodable)
    }
}
