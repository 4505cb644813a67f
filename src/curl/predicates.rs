//! Token classification shared by the validator and the extractor
//!
//! Each token is tested against an ordered table of predicates; the first
//! match decides its [`TokenKind`]. Tokens that match nothing are
//! [`TokenKind::Other`].

/// Flags that are accepted and carry no meaning for the generated request
pub const IGNORED_FLAGS: &[&str] = &["--location"];

/// Flags that take the HTTP method as their next token
pub const METHOD_FLAGS: &[&str] = &["-X", "--request"];

/// Flags that take the request body as their next token
pub const DATA_FLAGS: &[&str] = &["-d", "--data"];

/// Flags that take a `Name: value` header as their next token
pub const HEADER_FLAGS: &[&str] = &["-H", "--header"];

/// What a single token represents in a curl command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A flag that is consumed without effect
    Ignored,
    /// An `http://` or `https://` URL
    Url,
    /// `-X` / `--request`
    MethodFlag,
    /// `-d` / `--data`
    DataFlag,
    /// `-H` / `--header`
    HeaderFlag,
    /// Anything outside the supported grammar
    Other,
}

type Predicate = fn(&str) -> bool;

/// Classification table, evaluated top to bottom
const CLASSIFIERS: &[(Predicate, TokenKind)] = &[
    (is_ignored_flag, TokenKind::Ignored),
    (is_http_url, TokenKind::Url),
    (is_method_flag, TokenKind::MethodFlag),
    (is_data_flag, TokenKind::DataFlag),
    (is_header_flag, TokenKind::HeaderFlag),
];

/// Classify a token by the first matching predicate
pub fn classify(token: &str) -> TokenKind {
    CLASSIFIERS
        .iter()
        .find(|(matches, _)| matches(token))
        .map(|&(_, kind)| kind)
        .unwrap_or(TokenKind::Other)
}

pub fn is_ignored_flag(token: &str) -> bool {
    IGNORED_FLAGS.contains(&token)
}

/// True for tokens starting with `http://` or `https://` (any case),
/// optionally wrapped in single quotes.
pub fn is_http_url(token: &str) -> bool {
    let url = strip_single_quotes(token).to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

pub fn is_method_flag(token: &str) -> bool {
    METHOD_FLAGS.contains(&token)
}

pub fn is_data_flag(token: &str) -> bool {
    DATA_FLAGS.contains(&token)
}

pub fn is_header_flag(token: &str) -> bool {
    HEADER_FLAGS.contains(&token)
}

/// Looks like the start of another option rather than a value
pub fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Remove any leading and trailing single quotes left inside a token
/// (e.g. `"'http://example.com'"` quoted twice on the command line).
pub fn strip_single_quotes(token: &str) -> &str {
    token.trim_matches('\'')
}
