//! Look up listings on Mercado Libre's public, unauthenticated REST API.
//!
//! <https://developers.mercadolibre.com/en_us/items-and-searches>

pub mod api;
pub mod error;
pub mod id;
pub mod item;

pub use error::MeliError;
