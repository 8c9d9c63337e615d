//! Configuration management for the terminal interface.
//!
//! Values are resolved from built-in defaults, an optional TOML file and
//! command-line flags, in that order of precedence.

mod config;

pub use config::*;
