//! Extraction of a structured request from a curl command
//!
//! Extraction does not validate. It is meant to run after
//! [`validate`](super::validate) accepted the same input, and on anything else
//! it degrades to defaults instead of failing.

use indexmap::IndexMap;
use serde::Serialize;

use super::predicates::{classify, strip_single_quotes, TokenKind};
use super::query::parse_query;
use super::tokenizer::tokenize;
use crate::http::Method;

/// The request described by a curl command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurlCommand {
    /// Request method, `GET` unless a supported `-X` value was given
    pub method: Method,
    /// Scheme, host and path, without the query string
    pub url: Option<String>,
    /// Decoded query parameters; later duplicates win
    pub query_params: IndexMap<String, String>,
    /// Query string exactly as written, without the leading `?`
    pub raw_query: Option<String>,
    /// Header name to value, both trimmed
    pub headers: IndexMap<String, String>,
    /// Raw payload of `-d` / `--data`
    pub body: Option<String>,
    /// Remaining tokens, in command order
    pub options: Vec<String>,
}

impl CurlCommand {
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Extract a [`CurlCommand`] from a raw command line
pub fn extract(raw: &str) -> CurlCommand {
    extract_tokens(&tokenize(raw))
}

/// Extract from an already tokenized command. The first token (the program
/// name) is skipped without being checked.
pub fn extract_tokens(tokens: &[String]) -> CurlCommand {
    let mut command = CurlCommand::default();
    let mut i = 1;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        let value = tokens.get(i + 1);

        match classify(token) {
            TokenKind::MethodFlag => {
                command.method = value
                    .and_then(|m| m.parse().ok())
                    .unwrap_or_default();
                if value.is_some() {
                    i += 1;
                }
            }
            TokenKind::Url => {
                let url = strip_single_quotes(token);
                match url.split_once('?') {
                    Some((base, query)) => {
                        command.url = Some(base.to_string());
                        command.query_params = parse_query(query);
                        command.raw_query = Some(query.to_string());
                    }
                    None => {
                        command.url = Some(url.to_string());
                        command.query_params.clear();
                        command.raw_query = None;
                    }
                }
            }
            TokenKind::HeaderFlag => {
                if let Some(header) = value {
                    if let Some((name, value)) = header.split_once(':') {
                        let name = name.trim();
                        if !name.is_empty() {
                            command.headers.insert(name.to_string(), value.trim().to_string());
                        }
                    }
                    i += 1;
                }
            }
            TokenKind::DataFlag => {
                command.body = value.cloned();
                if value.is_some() {
                    i += 1;
                }
            }
            TokenKind::Ignored | TokenKind::Other => {
                command.options.push(token.to_string());
            }
        }

        i += 1;
    }

    command
}
