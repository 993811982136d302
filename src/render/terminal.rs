//! Terminal rendering of the results area.

use colored::Colorize;

use super::{CardView, LinkKind, NO_RESULTS_MESSAGE, ResultsArea, ResultsView};

/// Column headers for TSV output.
pub const TSV_HEADERS: [&str; 6] = ["name", "category", "description", "documentation", "datasheet", "tutorial"];

/// Colored, human-oriented listing.
#[must_use]
pub fn human(area: &ResultsArea) -> String {
    match area {
        ResultsArea::LoadFailed { notice } => format!("{} {}", "!".red(), notice),
        ResultsArea::Results { view } => match view {
            ResultsView::NoResults => format!("{} {}", "!".yellow(), NO_RESULTS_MESSAGE),
            ResultsView::Cards(cards) => cards
                .iter()
                .map(human_card)
                .collect::<Vec<_>>()
                .join("\n\n"),
        },
    }
}

fn human_card(card: &CardView) -> String {
    let mut lines = vec![
        format!("{} {}  {}", card.icon, card.name.bold(), card.category.cyan()),
        format!("   {}", card.description.dimmed()),
    ];
    for link in &card.links {
        lines.push(format!(
            "   {} {} {}",
            link.kind.glyph(),
            link.kind.label(),
            link.href.blue().underline()
        ));
    }
    lines.join("\n")
}

/// Uncolored listing, one block per card.
#[must_use]
pub fn plain(area: &ResultsArea) -> String {
    match area {
        ResultsArea::LoadFailed { notice } => notice.clone(),
        ResultsArea::Results { view } => match view {
            ResultsView::NoResults => NO_RESULTS_MESSAGE.to_string(),
            ResultsView::Cards(cards) => cards
                .iter()
                .map(plain_card)
                .collect::<Vec<_>>()
                .join("\n\n"),
        },
    }
}

fn plain_card(card: &CardView) -> String {
    let mut out = format!("{} {} [{}]\n   {}", card.icon, card.name, card.category, card.description);
    for link in &card.links {
        out.push_str(&format!("\n   {}: {}", link.kind.label(), link.href));
    }
    out
}

/// One TSV row per card, columns as in [`TSV_HEADERS`].
#[must_use]
pub fn tsv_row(card: &CardView) -> Vec<String> {
    let mut row = vec![
        sanitize_tsv(&card.name),
        sanitize_tsv(&card.category),
        sanitize_tsv(&card.description),
    ];
    row.extend(LinkKind::ALL.into_iter().map(|kind| {
        card.links
            .iter()
            .find(|link| link.kind == kind)
            .map(|link| sanitize_tsv(&link.href))
            .unwrap_or_default()
    }));
    row
}

fn sanitize_tsv(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}
