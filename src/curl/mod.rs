//! curl command parsing
//!
//! Three stages, each usable on its own:
//!
//! - [`tokenize`] splits a command line into shell-like tokens
//! - [`validate`] checks the tokens against the supported option grammar and
//!   reports the first problem
//! - [`extract`] turns the tokens into a [`CurlCommand`]
//!
//! Callers should only extract commands that validated.
//!
//! ```
//! use curl2retrofit::curl::{extract, validate};
//! use curl2retrofit::http::Method;
//!
//! let cmd = "curl -X POST 'https://api.example.com/users' -d 'name=John'";
//! assert!(validate(cmd).is_ok());
//!
//! let command = extract(cmd);
//! assert_eq!(command.method, Method::Post);
//! assert_eq!(command.body.as_deref(), Some("name=John"));
//! ```

pub mod extractor;
pub mod predicates;
pub mod query;
pub mod sniff;
pub mod tokenizer;
pub mod validator;

pub use extractor::{extract, extract_tokens, CurlCommand};
pub use tokenizer::tokenize;
pub use validator::{is_valid, validate, validate_tokens, ValidationError, ValidationResult};
