//! CLI module
//!
//! Command-line interface for the converter.
//!
//! # Commands
//!
//! - `convert` - Print the full request body for the input
//! - `schema` - Print only the cleaned schema
//! - `detect` - Print whether the input is data or a schema
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, InputArgs, OutputFormat};
pub use runner::{read_input, Runner};
pub use server::serve;
