//! elecdex search - Filter the catalog
//!
//! A blank query lists the default view; anything else is a case-insensitive
//! substring match over name, category, description and keywords.

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout, OutputFormat, robot_ok};
use crate::error::Result;
use crate::render::{self, ResultsArea, ResultsView, terminal};
use crate::search::{self, SearchMode};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (omit for the default view)
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub mode: SearchMode,
    /// Items in the catalog
    pub total: usize,
    /// Items shown
    pub count: usize,
    pub results: ResultsView,
}

impl SearchReport {
    fn area(&self) -> ResultsArea {
        ResultsArea::Results {
            view: self.results.clone(),
        }
    }
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let matched = search::search_with_view_size(
        catalog.items(),
        &args.query,
        ctx.config.search.default_view_size,
    );

    let results = render::build_view(matched);
    let report = SearchReport {
        query: args.query.clone(),
        mode: SearchMode::for_query(&args.query),
        total: catalog.len(),
        count: results.cards().len(),
        results,
    };

    match ctx.output_format {
        OutputFormat::Json => return output::emit_json(&robot_ok(&report)),
        OutputFormat::Jsonl => return output::emit_jsonl(report.results.cards()),
        OutputFormat::Human => println!("{}", human(&report)),
        OutputFormat::Plain => println!("{}", terminal::plain(&report.area())),
        OutputFormat::Tsv => println!(
            "{}",
            output::tsv(&terminal::TSV_HEADERS, report.results.cards(), terminal::tsv_row)
        ),
    }
    Ok(())
}

fn human(report: &SearchReport) -> String {
    let title = match report.mode {
        SearchMode::DefaultView => format!("Showing {} of {} items", report.count, report.total),
        SearchMode::Filter => format!(
            "{} results for '{}'",
            report.count.to_string().bold(),
            report.query.cyan()
        ),
    };

    let mut layout = HumanLayout::new();
    layout.title(&title).push_line(terminal::human(&report.area()));
    layout.build()
}
