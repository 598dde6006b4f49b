//! Listing metadata and descriptions.

use super::{api::MeliClient, MeliError};
use serde::Deserialize;

/// The fields we use from
/// <https://developers.mercadolibre.com/en_us/items-and-searches#Item-details>.
///
/// Listings are sparse in practice, e.g. "a convenir" listings have a `null`
/// price, so missing or `null` fields fall back to their defaults.
#[derive(Debug, PartialEq, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub currency_id: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub secure_thumbnail: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub permalink: String,
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub descriptions: Vec<DescriptionRef>,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct DescriptionRef {
    #[allow(dead_code)]
    pub id: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct ItemDescription {
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub plain_text: String,
}

impl MeliClient {
    pub async fn fetch_item(&self, id: &str) -> Result<Item, MeliError> {
        self.get_json(format!("/items/{}", id)).await
    }

    pub async fn fetch_item_description(&self, id: &str) -> Result<ItemDescription, MeliError> {
        self.get_json(format!("/items/{}/description", id)).await
    }
}
