//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod browse;
pub mod completions;
pub mod config;
pub mod render;
pub mod search;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args),
        Commands::Render(args) => render::run(ctx, args),
        Commands::Browse(args) => browse::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}
