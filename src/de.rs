//! Deserialisers that only accept a single boolean value, useful for telling
//! apart the two halves of an untagged union such as Slack's `ok` field.

use serde::de::{Deserialize, Deserializer, Error};

fn exactly<'a, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b == expected {
            Ok(b)
        } else {
            Err(Error::custom(format!("invalid bool: {}", b)))
        }
    })
}

pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, true)
}

pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    exactly(deserializer, false)
}

/// Treat an explicit `null` like a missing field, falling back to the type's
/// default. Pair with `#[serde(default)]` to cover absent fields as well.
pub fn null_as_default<'a, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'a>,
    T: Deserialize<'a> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
