//! Structural validation of curl commands
//!
//! The validator walks the tokens once, left to right, and stops at the first
//! violation. Only a closed set of options is accepted:
//!
//! | Option | Value |
//! |---|---|
//! | `--location` | none, ignored |
//! | `http(s)://...` | the request URL, at most once |
//! | `-X`, `--request` | one of GET, POST, PUT, DELETE, PATCH, HEAD; at most once |
//! | `-d`, `--data` | JSON, XML or form-urlencoded body; at most once |
//! | `-H`, `--header` | `Name: value`; at most once |
//!
//! The `Display` text of each [`ValidationError`] is the user-facing
//! diagnostic and must not change.

use thiserror::Error;
use tracing::debug;

use super::predicates::{classify, looks_like_flag, strip_single_quotes, TokenKind};
use super::query::{is_valid_base_url, is_valid_query, split_url};
use super::sniff::{is_json, is_url_encoded, is_xml};
use super::tokenizer::tokenize;
use crate::http;

/// Literal program name every command must start with
pub const CURL: &str = "curl";

/// Outcome of validating a curl command
pub type ValidationResult = Result<(), ValidationError>;

/// First problem found in a curl command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: Command must start with 'curl'.")]
    MissingCurl,

    /// A second URL token, or a URL with more than one `?`
    #[error("Error: Multiple URLs found.")]
    MultipleUrls,

    #[error("Error: Invalid URL.")]
    InvalidUrl,

    #[error("Error: Invalid query parameter format.")]
    InvalidQuery,

    #[error("Error: No HTTP method specified.")]
    MissingMethod,

    #[error("Error: Unsupported HTTP method '{0}' specified.")]
    UnsupportedMethod(String),

    #[error("Error: Multiple Request Types found.")]
    MultipleMethods,

    #[error("Error: No data provided for the data option.")]
    MissingData,

    #[error("Error: Unsupported data format.")]
    UnsupportedDataFormat,

    #[error("Error: Multiple Data Types found.")]
    MultipleData,

    #[error("Error: No header found")]
    MissingHeader,

    #[error("Error: Invalid header format. Headers must include a colon.")]
    InvalidHeader,

    #[error("Error: Multiple Headers found.")]
    MultipleHeaders,

    #[error("Error: Unrecognized option '{0}'.")]
    UnrecognizedOption(String),

    #[error("Error: No URL found.")]
    MissingUrl,
}

/// Validate a raw curl command line
pub fn validate(raw: &str) -> ValidationResult {
    let tokens = tokenize(raw);
    let result = validate_tokens(&tokens);
    if let Err(ref e) = result {
        debug!(tokens = tokens.len(), error = %e, "curl command rejected");
    }
    result
}

/// Convenience wrapper around [`validate`]
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Validate an already tokenized command
pub fn validate_tokens(tokens: &[String]) -> ValidationResult {
    if tokens.first().map(String::as_str) != Some(CURL) {
        return Err(ValidationError::MissingCurl);
    }

    let mut state = ScanState::default();
    let mut i = 1;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        let value = tokens.get(i + 1).map(String::as_str);

        i += match classify(token) {
            TokenKind::Ignored => 1,
            TokenKind::Url => {
                state.accept_url(token)?;
                1
            }
            TokenKind::MethodFlag => {
                state.accept_method(value)?;
                2
            }
            TokenKind::DataFlag => {
                state.accept_data(value)?;
                2
            }
            TokenKind::HeaderFlag => {
                state.accept_header(value)?;
                2
            }
            TokenKind::Other => {
                return Err(ValidationError::UnrecognizedOption(token.to_string()));
            }
        };
    }

    if !state.has_url {
        return Err(ValidationError::MissingUrl);
    }

    Ok(())
}

/// What has been seen so far in one validation pass
#[derive(Debug, Default)]
struct ScanState {
    has_url: bool,
    has_method: bool,
    has_data: bool,
    has_header: bool,
}

impl ScanState {
    fn accept_url(&mut self, token: &str) -> ValidationResult {
        if self.has_url {
            return Err(ValidationError::MultipleUrls);
        }

        let url = strip_single_quotes(token).to_ascii_lowercase();
        let (base, query) = split_url(&url).ok_or(ValidationError::MultipleUrls)?;

        if !is_valid_base_url(base) {
            return Err(ValidationError::InvalidUrl);
        }
        if let Some(query) = query {
            if !is_valid_query(query) {
                return Err(ValidationError::InvalidQuery);
            }
        }

        self.has_url = true;
        Ok(())
    }

    fn accept_method(&mut self, value: Option<&str>) -> ValidationResult {
        let method = value.ok_or(ValidationError::MissingMethod)?;
        if !http::is_supported(method) {
            return Err(ValidationError::UnsupportedMethod(method.to_string()));
        }
        if self.has_method {
            return Err(ValidationError::MultipleMethods);
        }

        self.has_method = true;
        Ok(())
    }

    fn accept_data(&mut self, value: Option<&str>) -> ValidationResult {
        let data = match value {
            Some(data) if !looks_like_flag(data) => data,
            _ => return Err(ValidationError::MissingData),
        };
        if !(is_json(data) || is_xml(data) || is_url_encoded(data)) {
            return Err(ValidationError::UnsupportedDataFormat);
        }
        if self.has_data {
            return Err(ValidationError::MultipleData);
        }

        self.has_data = true;
        Ok(())
    }

    fn accept_header(&mut self, value: Option<&str>) -> ValidationResult {
        let header = value.ok_or(ValidationError::MissingHeader)?;
        if !header.contains(':') {
            return Err(ValidationError::InvalidHeader);
        }
        if self.has_header {
            return Err(ValidationError::MultipleHeaders);
        }

        self.has_header = true;
        Ok(())
    }
}
