//! Execution context

mod environment;

pub use environment::*;
