//! HTTP protocol types
//!
//! Provides the method enumeration shared by validation, extraction and code generation.

mod method;

pub use method::*;
