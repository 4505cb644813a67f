//! curl2retrofit library interface
//!
//! Turns a `curl` command line into a Retrofit service declaration.
//!
//! # Module Organization
//!
//! - [`curl`] - Tokenizer, validator and extractor for curl commands
//! - [`http`] - Supported HTTP methods
//! - [`codegen`] - Kotlin and Java Retrofit rendering
//! - [`interface`] - Reading, appending to and creating interface files
//! - [`config`] - TOML configuration
//! - [`errors`] - Error types (Curl2RetrofitError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - CLI execution logic

pub mod cli;
pub mod codegen;
pub mod config;
pub mod context;
pub mod core;
pub mod curl;
pub mod errors;
pub mod http;
pub mod interface;
pub mod status;
