//! Snapshot tests for rendered markup, terminal text and error output.

use insta::{assert_json_snapshot, assert_snapshot};

use elecdex::error::{ElecError, LoadFailureKind};
use elecdex::render::{self, CardView, ResultsArea, html, terminal};
use elecdex::search::search;

#[path = "../common/mod.rs"]
mod common;

fn card_named(name: &str) -> CardView {
    let items = common::sample_items();
    let item = items.iter().find(|i| i.name == name).unwrap();
    CardView::from_item(item)
}

#[test]
fn card_markup_with_single_link() {
    let markup = html::card(&card_named("LED")).into_string();
    assert_snapshot!(markup, @r#"<div class="electronics__item"><div class="electronics__item-header"><div class="electronics__item-icon">⚡</div><div><span class="electronics__item-category">Components</span><h4 class="electronics__item-name">LED</h4></div></div><p class="electronics__item-description">Light emitting diode</p><div class="electronics__item-links"><a href="https://example.com/led-basics" target="_blank" rel="noopener noreferrer" class="electronics__item-link">🎓 Tutorial</a></div></div>"#);
}

#[test]
fn card_markup_without_links_uses_explicit_icon() {
    let markup = html::card(&card_named("Multimeter")).into_string();
    assert_snapshot!(markup, @r#"<div class="electronics__item"><div class="electronics__item-header"><div class="electronics__item-icon">🔍</div><div><span class="electronics__item-category">Tools</span><h4 class="electronics__item-name">Multimeter</h4></div></div><p class="electronics__item-description">Measures voltage, current and resistance</p><div class="electronics__item-links"></div></div>"#);
}

#[test]
fn no_results_fragment() {
    let items = common::sample_items();
    let area = ResultsArea::Results {
        view: render::build_view(search(&items, "stm32")),
    };
    assert_snapshot!(html::fragment(&area).into_string(), @r#"<div id="electronicsResults" class="electronics__results"></div><div id="noResults" class="electronics__no-results" style="display: block"><p>No results found. Try a different search term.</p></div>"#);
}

#[test]
fn load_failure_fragment() {
    assert_snapshot!(html::fragment(&ResultsArea::load_failed()).into_string(), @r#"<div id="electronicsResults" class="electronics__results"><p style="text-align: center; color: var(--text-muted);">Failed to load electronics data.</p></div><div id="noResults" class="electronics__no-results" style="display: none"><p>No results found. Try a different search term.</p></div>"#);
}

#[test]
fn plain_terminal_listing() {
    let items = common::sample_items();
    let area = ResultsArea::Results {
        view: render::build_view(search(&items, "serial")),
    };
    assert_snapshot!(terminal::plain(&area), @r"
    🔗 I2C [Protocols]
       Two-wire serial bus

    🔗 SPI [Protocols]
       Four-wire synchronous serial bus

    🔗 UART [Protocols]
       Asynchronous serial link
    ");
}

#[test]
fn load_failure_message() {
    let err = ElecError::LoadFailure {
        location: "https://example.com/data/electronics.json".to_string(),
        kind: LoadFailureKind::HttpStatus(500),
        reason: "HTTP 500 Internal Server Error".to_string(),
    };
    assert_snapshot!(err.to_string(), @"Failed to load electronics data from https://example.com/data/electronics.json: HTTP 500 Internal Server Error");
    assert_snapshot!(err.to_structured().to_string(), @"[E502] Failed to load electronics data from https://example.com/data/electronics.json: HTTP 500 Internal Server Error");
}

#[test]
fn not_interactive_message() {
    let err = ElecError::NotInteractive("browse command requires an interactive terminal".to_string());
    assert_snapshot!(err.to_string(), @"Interactive terminal required: browse command requires an interactive terminal");
}

#[test]
fn structured_not_found_error() {
    let err = ElecError::LoadFailure {
        location: "site/data/electronics.json".to_string(),
        kind: LoadFailureKind::NotFound,
        reason: "No such file or directory".to_string(),
    };
    assert_json_snapshot!(err.to_structured(), @r#"
    {
      "code": "DATA_NOT_FOUND",
      "numeric_code": 103,
      "message": "Failed to load electronics data from site/data/electronics.json: No such file or directory",
      "suggestion": "Point --site-root at the directory or URL that contains data/electronics.json",
      "context": {
        "kind": "not_found",
        "location": "site/data/electronics.json"
      },
      "recoverable": true,
      "category": "data"
    }
    "#);
}
