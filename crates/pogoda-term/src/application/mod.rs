//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing, logging setup, one-shot evaluation
//! and the main UI loop. It coordinates between the domain logic and the terminal.

pub mod cli;
pub mod logging;
pub mod ui;
mod widgets;
