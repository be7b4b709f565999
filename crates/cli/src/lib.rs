//! Command-line front end for the cmdbridge dispatch adapter.

pub mod builtins;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod output;
pub mod styles;
