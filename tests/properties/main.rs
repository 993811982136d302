//! Property tests for filtering, rendering and debouncing.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use elecdex::catalog::{Catalog, Item, ItemLinks};
use elecdex::controller::{ControllerOptions, SearchController};
use elecdex::debounce::Debouncer;
use elecdex::render::{self, html};
use elecdex::search::{DEFAULT_VIEW_SIZE, search};

fn arb_link() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "https://[a-z]{3,10}\\.com/[a-z0-9]{0,8}".prop_map(Some),
    ]
}

fn arb_item() -> impl Strategy<Value = Item> {
    (
        "[A-Za-z0-9 ]{1,20}",
        prop_oneof![
            Just("Components".to_string()),
            Just("Microcontrollers".to_string()),
            Just("Protocols".to_string()),
            Just("Topics".to_string()),
            Just("Tools".to_string()),
            "[A-Za-z]{3,10}",
        ],
        "[A-Za-z0-9 ,.<>&]{0,60}",
        prop::collection::vec("[a-z0-9]{1,8}", 0..4),
        prop::option::of("[⚡🔌📡]"),
        (arb_link(), arb_link(), arb_link()),
    )
        .prop_map(|(name, category, description, keywords, icon, (documentation, datasheet, tutorial))| Item {
            name,
            category,
            description,
            keywords,
            icon,
            links: ItemLinks {
                documentation,
                datasheet,
                tutorial,
            },
        })
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_item(), 0..30)
}

fn positions(items: &[Item], results: &[&Item]) -> Vec<usize> {
    results
        .iter()
        .map(|r| items.iter().position(|i| std::ptr::eq(i, *r)).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn case_of_query_does_not_matter(items in arb_items(), query in "[A-Za-z0-9]{1,6}") {
        let upper = positions(&items, &search(&items, &query.to_uppercase()));
        let lower = positions(&items, &search(&items, &query.to_lowercase()));
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn blank_query_is_bounded_prefix(items in arb_items(), spaces in " {0,4}") {
        let results = positions(&items, &search(&items, &spaces));
        let expected: Vec<usize> = (0..items.len().min(DEFAULT_VIEW_SIZE)).collect();
        prop_assert_eq!(results, expected);
    }

    #[test]
    fn results_keep_source_order(items in arb_items(), query in "[a-z]{1,2}") {
        let results = positions(&items, &search(&items, &query));
        let mut sorted = results.clone();
        sorted.sort_unstable();
        prop_assert_eq!(results, sorted);
    }

    #[test]
    fn every_result_matches(items in arb_items(), query in "[a-z0-9]{1,3}") {
        for item in search(&items, &query) {
            let hit = item.name.to_lowercase().contains(&query)
                || item.category.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
                || item.keywords.iter().any(|k| k.to_lowercase().contains(&query));
            prop_assert!(hit);
        }
    }

    #[test]
    fn substring_of_a_field_selects_item(
        items in prop::collection::vec(arb_item(), 1..20),
        pick in any::<prop::sample::Index>(),
        start in 0usize..20,
        len in 1usize..6,
    ) {
        let idx = pick.index(items.len());
        let name: Vec<char> = items[idx].name.chars().collect();
        let start = start.min(name.len() - 1);
        let end = (start + len).min(name.len());
        let needle: String = name[start..end].iter().collect();
        prop_assume!(!needle.trim().is_empty());

        let results = positions(&items, &search(&items, &needle));
        prop_assert!(results.contains(&idx));
    }

    #[test]
    fn rendering_is_deterministic(items in arb_items(), query in "[a-z]{0,2}") {
        let first = html::results(&render::build_view(search(&items, &query))).into_string();
        let second = html::results(&render::build_view(search(&items, &query))).into_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_card_per_result(items in arb_items(), query in "[a-z]{0,2}") {
        let matched = search(&items, &query);
        let view = render::build_view(matched.iter().copied());
        prop_assert_eq!(view.cards().len(), matched.len());
        prop_assert_eq!(view.shows_no_results(), matched.is_empty());
    }

    #[test]
    fn links_are_never_empty(item in arb_item()) {
        let card = render::CardView::from_item(&item);
        prop_assert!(card.links.len() <= 3);
        prop_assert!(card.links.iter().all(|link| !link.href.is_empty()));
    }

    #[test]
    fn card_text_is_escaped(item in arb_item()) {
        let escape = |text: &str| text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");
        let markup = html::card(&render::CardView::from_item(&item)).into_string();

        let description = format!(
            r#"<p class="electronics__item-description">{}</p>"#,
            escape(&item.description)
        );
        prop_assert!(markup.contains(&description));
    }

    #[test]
    fn burst_within_delay_fires_once_with_last(
        values in prop::collection::vec("[a-z]{1,5}", 1..10),
        gaps in prop::collection::vec(0u64..300, 10),
    ) {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let mut at = start;
        let mut fired = Vec::new();

        for (value, gap) in values.iter().zip(&gaps) {
            at += Duration::from_millis(*gap);
            fired.extend(debouncer.poll(at));
            debouncer.trigger(value.clone(), at);
        }
        fired.extend(debouncer.poll(at + Duration::from_millis(300)));

        prop_assert_eq!(fired, vec![values.last().unwrap().clone()]);
    }

    #[test]
    fn enter_cancels_pending_input(typed in "[a-z]{1,6}", entered in "[a-z]{1,6}") {
        let items = vec![Item {
            name: "LED".to_string(),
            category: "Components".to_string(),
            description: String::new(),
            keywords: Vec::new(),
            icon: None,
            links: ItemLinks::default(),
        }];
        let mut controller = SearchController::new(Ok(Catalog::new(items)), ControllerOptions::default());
        let start = Instant::now();

        controller.on_input(typed, start);
        controller.on_enter(entered.clone());
        prop_assert!(!controller.tick(start + Duration::from_secs(5)));
        prop_assert_eq!(controller.executions(), 1);
        prop_assert_eq!(controller.query(), entered.as_str());
    }
}
