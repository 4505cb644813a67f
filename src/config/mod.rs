//! Configuration loading

mod config;

pub use config::*;
