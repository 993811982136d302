//! Rendering of search results.
//!
//! Items are first mapped to a view-model ([`ResultsView`]); the view-model is
//! then turned into HTML markup ([`html`]) or colored terminal text
//! ([`terminal`]). Both steps are pure: the same input always yields the same
//! output, and placing that output is left to the caller.

pub mod html;
pub mod terminal;

use serde::Serialize;

use crate::catalog::Item;

/// Glyph used when neither the item nor its category provides one.
pub const FALLBACK_ICON: &str = "📦";

/// Text shown in the results area when the catalog could not be loaded.
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load electronics data.";

/// Text of the placeholder shown when a query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different search term.";

/// Fallback glyph for the known categories.
#[must_use]
pub fn category_icon(category: &str) -> Option<&'static str> {
    match category {
        "Components" => Some("⚡"),
        "Microcontrollers" => Some("🎛️"),
        "Protocols" => Some("🔗"),
        "Topics" => Some("📚"),
        "Tools" => Some("🔧"),
        _ => None,
    }
}

/// Icon for a card: explicit icon, then category fallback, then the generic glyph.
#[must_use]
pub fn resolve_icon(item: &Item) -> &str {
    item.icon
        .as_deref()
        .filter(|icon| !icon.is_empty())
        .or_else(|| category_icon(&item.category))
        .unwrap_or(FALLBACK_ICON)
}

/// Kind of external reference shown on a card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Documentation,
    Datasheet,
    Tutorial,
}

impl LinkKind {
    pub const ALL: [Self; 3] = [Self::Documentation, Self::Datasheet, Self::Tutorial];

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Documentation => "📖",
            Self::Datasheet => "📄",
            Self::Tutorial => "🎓",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Documentation => "Docs",
            Self::Datasheet => "Datasheet",
            Self::Tutorial => "Tutorial",
        }
    }

    fn href(self, item: &Item) -> Option<&str> {
        let link = match self {
            Self::Documentation => &item.links.documentation,
            Self::Datasheet => &item.links.datasheet,
            Self::Tutorial => &item.links.tutorial,
        };
        link.as_deref().filter(|href| !href.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub kind: LinkKind,
    pub href: String,
}

/// Everything one result card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub icon: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub links: Vec<LinkView>,
}

impl CardView {
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        let links = LinkKind::ALL
            .into_iter()
            .filter_map(|kind| {
                kind.href(item).map(|href| LinkView {
                    kind,
                    href: href.to_string(),
                })
            })
            .collect();

        Self {
            icon: resolve_icon(item).to_string(),
            category: item.category.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            links,
        }
    }
}

/// Rendered state of the results area for one filter execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum ResultsView {
    Cards(Vec<CardView>),
    NoResults,
}

impl ResultsView {
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Cards(cards) => cards,
            Self::NoResults => &[],
        }
    }

    #[must_use]
    pub const fn shows_no_results(&self) -> bool {
        matches!(self, Self::NoResults)
    }
}

/// Map matched items to the view-model.
pub fn build_view<'a, I>(items: I) -> ResultsView
where
    I: IntoIterator<Item = &'a Item>,
{
    let cards: Vec<CardView> = items.into_iter().map(CardView::from_item).collect();
    if cards.is_empty() {
        ResultsView::NoResults
    } else {
        ResultsView::Cards(cards)
    }
}

/// What the results area currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsArea {
    Results { view: ResultsView },
    LoadFailed { notice: String },
}

impl ResultsArea {
    #[must_use]
    pub fn load_failed() -> Self {
        Self::LoadFailed {
            notice: LOAD_FAILURE_NOTICE.to_string(),
        }
    }

    #[must_use]
    pub const fn results(&self) -> Option<&ResultsView> {
        match self {
            Self::Results { view } => Some(view),
            Self::LoadFailed { .. } => None,
        }
    }
}
