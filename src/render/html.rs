//! HTML markup for the results area.
//!
//! Markup mirrors the portfolio page: a `#electronicsResults` container holding
//! one `.electronics__item` card per result, and a `#noResults` placeholder
//! whose visibility is toggled through its inline `display` style. All text
//! and URLs pass through maud's escaping.

use maud::{Markup, html};

use super::{CardView, NO_RESULTS_MESSAGE, ResultsArea, ResultsView};

pub const RESULTS_CONTAINER_ID: &str = "electronicsResults";
pub const NO_RESULTS_ID: &str = "noResults";

/// One result card.
#[must_use]
pub fn card(card: &CardView) -> Markup {
    html! {
        div class="electronics__item" {
            div class="electronics__item-header" {
                div class="electronics__item-icon" { (card.icon) }
                div {
                    span class="electronics__item-category" { (card.category) }
                    h4 class="electronics__item-name" { (card.name) }
                }
            }
            p class="electronics__item-description" { (card.description) }
            div class="electronics__item-links" {
                @for link in &card.links {
                    a href=(link.href) target="_blank" rel="noopener noreferrer" class="electronics__item-link" {
                        (link.kind.glyph()) " " (link.kind.label())
                    }
                }
            }
        }
    }
}

/// Inner markup of the results container: every card, or nothing.
#[must_use]
pub fn results(view: &ResultsView) -> Markup {
    html! {
        @for entry in view.cards() {
            (card(entry))
        }
    }
}

/// Inline style of the no-results placeholder for `view`.
#[must_use]
pub const fn no_results_style(view: &ResultsView) -> &'static str {
    if view.shows_no_results() {
        "display: block"
    } else {
        "display: none"
    }
}

/// Notice replacing the container contents after a failed load.
#[must_use]
pub fn load_failure(notice: &str) -> Markup {
    html! {
        p style="text-align: center; color: var(--text-muted);" { (notice) }
    }
}

/// Inner markup of the results container for the current area state.
#[must_use]
pub fn container_contents(area: &ResultsArea) -> Markup {
    match area {
        ResultsArea::Results { view } => results(view),
        ResultsArea::LoadFailed { notice } => load_failure(notice),
    }
}

/// The full placement fragment: results container plus no-results placeholder.
#[must_use]
pub fn fragment(area: &ResultsArea) -> Markup {
    let placeholder_style = area.results().map_or("display: none", no_results_style);

    html! {
        div id=(RESULTS_CONTAINER_ID) class="electronics__results" {
            (container_contents(area))
        }
        div id=(NO_RESULTS_ID) class="electronics__no-results" style=(placeholder_style) {
            p { (NO_RESULTS_MESSAGE) }
        }
    }
}
