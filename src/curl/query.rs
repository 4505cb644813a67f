//! URL structure and query-string handling

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use url::{ParseError, Url};

use super::sniff::has_valid_percent_escapes;

static QUERY_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+$").expect("Invalid query regex")
});

static QUERY_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]*$").expect("Invalid query regex")
});

/// Split a URL token into its base and optional query part.
///
/// Returns `None` when the token holds more than one `?`.
pub fn split_url(url: &str) -> Option<(&str, Option<&str>)> {
    let mut parts = url.splitn(3, '?');
    let base = parts.next().unwrap_or_default();
    let query = parts.next();
    if parts.next().is_some() {
        return None;
    }
    Some((base, query))
}

/// Structural check of an absolute URL: a scheme and a non-empty host.
///
/// An out-of-range port is a numeric problem, not a structural one, so it is
/// not rejected here.
pub fn is_valid_base_url(base: &str) -> bool {
    match Url::parse(base) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(ParseError::InvalidPort) => true,
        Err(_) => false,
    }
}

/// Validate a raw query string (without the leading `?`).
///
/// Every `&`-separated parameter must be `key=value` with a non-empty key.
/// Key and value are limited to `[A-Za-z0-9._%+-]` (value may be empty) and
/// every percent escape must carry two hex digits.
pub fn is_valid_query(query: &str) -> bool {
    query.split('&').all(is_valid_param)
}

fn is_valid_param(param: &str) -> bool {
    let Some((key, value)) = param.split_once('=') else {
        return false;
    };

    QUERY_KEY_RE.is_match(key)
        && has_valid_percent_escapes(key)
        && QUERY_VALUE_RE.is_match(value)
        && has_valid_percent_escapes(value)
        && !value.contains('#')
}

/// Decode a query string into a name → value map.
///
/// Segments without `=` or with an empty name are skipped. Values are
/// form-decoded (`+` becomes a space, `%XX` escapes are resolved); a value
/// that does not decode to UTF-8 is kept verbatim. Later duplicates
/// overwrite earlier ones.
pub fn parse_query(query: &str) -> IndexMap<String, String> {
    let mut params = IndexMap::new();

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        params.insert(key.to_string(), decode_component(value));
    }

    params
}

fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
