//! Management commands for notification preferences.
//!
//! Loads preference documents from disk, runs them through
//! [`notifprefs_core`] and returns the JSON to print. The binary in
//! `main.rs` only wires up logging, configuration and argument parsing.

pub mod cli;
pub mod commands;
pub mod config;
