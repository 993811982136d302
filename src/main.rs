//! elecdex - electronics reference search
//!
//! Filter a static electronics catalog from the command line, render the
//! results fragment as HTML, or browse it interactively.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use elecdex::Result;
use elecdex::app::AppContext;
use elecdex::cli::output::robot_error_structured;
use elecdex::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Completions(args) = &cli.command {
        return exit_with(elecdex::cli::commands::completions::run(args), false);
    }

    // machine mode may come from config or env
    let ctx = AppContext::from_cli(&cli);
    let machine = ctx
        .as_ref()
        .map_or_else(|_| cli.output_format().is_machine_readable(), |ctx| ctx.robot_mode);
    init_tracing(&cli, machine);

    exit_with(ctx.and_then(|ctx| run(&cli, &ctx)), machine)
}

fn run(cli: &Cli, ctx: &AppContext) -> Result<()> {
    if !ctx.output_format.use_colors() {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }
    elecdex::cli::commands::run(ctx, &cli.command)
}

fn exit_with(result: Result<()>, machine: bool) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if machine {
                // Machine mode: structured JSON error on stdout
                let response = robot_error_structured(&e);
                println!("{}", serde_json::to_string(&response).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli, machine: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,elecdex=info",
        1 => "info,elecdex=debug",
        2 => "debug,elecdex=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if machine {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
