//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Electronics reference search over a static catalog
#[derive(Parser, Debug)]
#[command(name = "elecdex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging; errors are still reported
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/elecdex/config.toml, then ./elecdex.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Site root holding data/electronics.json: a directory or http(s) base URL
    #[arg(long, global = true, value_name = "DIR_OR_URL")]
    pub site_root: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective output format from flags alone.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.effective_output_format(false)
    }

    /// Like [`Cli::output_format`], with `machine_default` from config
    /// applying only when no flag chose a format.
    #[must_use]
    pub fn effective_output_format(&self, machine_default: bool) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }

        if let Some(fmt) = self.output_format {
            return fmt;
        }

        OutputFormat::from_args(self.machine || machine_default, None)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter the catalog and print matching entries
    Search(commands::search::SearchArgs),

    /// Write the HTML results fragment for a query
    Render(commands::render::RenderArgs),

    /// Interactively search the catalog (TUI)
    Browse(commands::browse::BrowseArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),

    /// Print shell completions
    Completions(commands::completions::CompletionsArgs),
}
