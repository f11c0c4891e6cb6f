//! CLI module
//!
//! Command-line interface for browsing items.
//!
//! # Commands
//!
//! - `items` - Fetch one page newer than, older than or around an item
//! - `stream` - Stream items until the end of the sequence
//! - `info` - Show tags and comments of an item
//! - `whoami` - Show the session restored from `--cookie`

mod commands;
mod runner;

pub use commands::{Cli, Commands, FilterArgs, OutputFormat, PageDirection, StreamDirection};
pub use runner::Runner;
