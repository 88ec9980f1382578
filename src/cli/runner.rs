//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InputArgs, OutputFormat};
use crate::config::ConversionOptions;
use crate::converter;
use crate::error::{Error, Result, ResultExt};
use serde::Serialize;
use std::fs;
use std::io::Read;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let options = self.options()?;

        match &self.cli.command {
            Commands::Convert { input } => self.convert(input, &options),
            Commands::Schema { input } => self.schema(input, &options),
            Commands::Detect { input } => self.detect(input),
            Commands::Serve { port } => crate::cli::serve(options, *port).await,
        }
    }

    /// Options file first, then individual flags on top
    pub fn options(&self) -> Result<ConversionOptions> {
        let mut options = match &self.cli.config {
            Some(path) => ConversionOptions::from_file(path)?,
            None => ConversionOptions::default(),
        };

        if let Some(api) = self.cli.api {
            options.api_type = api;
        }
        if let Some(mode) = self.cli.mode {
            options.output_mode = mode;
        }
        if let Some(conversation) = self.cli.conversation {
            options.conversation_mode = conversation;
        }
        if let Some(strict) = self.cli.strict {
            options.strict_mode = strict;
        }
        if let Some(allowed) = self.cli.additional_properties {
            options.additional_properties = allowed;
        }
        if let Some(name) = &self.cli.name {
            options.schema_name = name.clone();
        }

        options.validate()?;
        Ok(options)
    }

    fn convert(&self, input: &InputArgs, options: &ConversionOptions) -> Result<()> {
        let text = read_input(input)?;
        match converter::convert(&text, options)? {
            Some(conversion) => self.print(&conversion.envelope),
            None => Err(Error::config("Input is empty")),
        }
    }

    fn schema(&self, input: &InputArgs, options: &ConversionOptions) -> Result<()> {
        let text = read_input(input)?;
        match converter::schema_only(&text, options)? {
            Some(output) => self.print(&output.schema),
            None => Err(Error::config("Input is empty")),
        }
    }

    fn detect(&self, input: &InputArgs) -> Result<()> {
        let text = read_input(input)?;
        match converter::detect(&text)? {
            Some(kind) => {
                println!("{kind}");
                Ok(())
            }
            None => Err(Error::config("Input is empty")),
        }
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

/// Read input from a file, inline JSON, or stdin
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(path) = &input.input {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()));
    }

    if let Some(json) = &input.json {
        return Ok(json.clone());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}
