//! CLI commands and argument parsing

use crate::types::{ApiType, ConversationMode, OutputMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Schema CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-schema")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Target API
    #[arg(long, global = true)]
    pub api: Option<ApiType>,

    /// Structured Outputs or JSON mode
    #[arg(long, global = true)]
    pub mode: Option<OutputMode>,

    /// Prompt layout for the Responses API
    #[arg(long, global = true)]
    pub conversation: Option<ConversationMode>,

    /// Require every property and mark the schema strict
    #[arg(long, global = true)]
    pub strict: Option<bool>,

    /// Value forced onto `additionalProperties`
    #[arg(long, global = true)]
    pub additional_properties: Option<bool>,

    /// Fallback schema name
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a command reads its JSON from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input file (reads stdin when neither this nor --json is given)
    pub input: Option<PathBuf>,

    /// Inline input JSON
    #[arg(long, conflicts_with = "input")]
    pub json: Option<String>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert data or a schema into a full request body
    Convert {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print only the cleaned schema
    Schema {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Report whether the input looks like data or a schema
    Detect {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
