//! Command-line interface module.
//!
//! Provides argument parsing and command dispatch.

pub mod args;
pub mod commands;
pub mod parser;
pub mod usage;
