//! Find listing identifiers in marketplace URLs.
//!
//! Listing URLs embed the identifier with a hyphen after the site prefix, for
//! example `https://produto.mercadolivre.com.br/MLB-987654321-some-slug`,
//! whereas the API wants it without: `MLB987654321`.

use once_cell::sync::Lazy;
use regex::Regex;

// Explicit ranges as `\d` would also match non-ASCII digits.
static ITEM_ID: Lazy<Regex> = Lazy::new(|| {
    // This unwrap is tested below.
    Regex::new(r"[A-Z]{3}-[0-9]+").unwrap()
});

/// Pull the first listing identifier out of a URL, normalised for the API.
/// Returns an empty string if there isn't one.
///
/// ```
/// assert_eq!(extract_item_id("https://x.com/MLB-123-foo"), "MLB123");
/// ```
pub fn extract_item_id(url: &str) -> String {
    ITEM_ID
        .find(url)
        .map(|m| m.as_str().replace('-', ""))
        .unwrap_or_default()
}
