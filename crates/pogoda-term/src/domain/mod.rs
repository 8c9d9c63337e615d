//! Core domain logic for the terminal interface.
//!
//! This module contains the classification rules, the session history and the
//! form state machine, independent of how the terminal renders them.

pub mod models;
pub mod services;
