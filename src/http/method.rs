//! HTTP methods supported in curl commands

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// HTTP method of a curl command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

/// All supported methods, in display order
pub const SUPPORTED_METHODS: &[Method] = &[
    Method::Get,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Patch,
    Method::Head,
];

impl Method {
    /// Upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }

    /// Methods for which a generated client accepts a request body
    pub fn accepts_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a method name outside [`SUPPORTED_METHODS`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method '{0}'")]
pub struct UnsupportedMethod(pub String);

impl FromStr for Method {
    type Err = UnsupportedMethod;

    /// Case-insensitive parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_METHODS
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnsupportedMethod(s.to_string()))
    }
}

/// Check if a string names a supported method (any case)
pub fn is_supported(method: &str) -> bool {
    method.parse::<Method>().is_ok()
}
