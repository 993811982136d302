//! elecdex render - Write the HTML results fragment

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{self, OutputFormat, robot_ok};
use crate::error::Result;
use crate::render::{ResultsArea, html};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Search query (omit for the default view)
    #[arg(default_value = "")]
    pub query: String,

    /// Write the fragment to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    area: &'a ResultsArea,
    html: &'a str,
}

pub fn run(ctx: &AppContext, args: &RenderArgs) -> Result<()> {
    let mut controller = ctx.controller();
    // a failed load keeps its notice; there is nothing to filter
    if controller.load_error().is_none() {
        controller.on_enter(args.query.as_str());
    }

    let markup = html::fragment(controller.area()).into_string();

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &markup)?;
        info!(path = %path.display(), bytes = markup.len(), "results fragment written");
    }

    if ctx.output_format.is_machine_readable() {
        let report = RenderReport {
            query: &args.query,
            output: args.output.as_ref().map(|p| p.display().to_string()),
            area: controller.area(),
            html: &markup,
        };
        let mut response = robot_ok(report);
        if let Some(reason) = controller.load_error() {
            response = response.with_warning(reason);
        }
        return match ctx.output_format {
            OutputFormat::Jsonl => output::emit_jsonl(std::slice::from_ref(&response)),
            _ => output::emit_json(&response),
        };
    }

    match &args.output {
        Some(path) if ctx.output_format.use_colors() => {
            println!("{} Wrote results fragment to {}", "✓".green(), path.display());
        }
        Some(path) => println!("Wrote results fragment to {}", path.display()),
        None => println!("{markup}"),
    }
    if let Some(reason) = controller.load_error() {
        eprintln!("warning: {reason}");
    }
    Ok(())
}
