//! End-to-end search and pagination through the public API.

use std::sync::Arc;
use std::time::Duration;

use storefront_commerce::prelude::*;

const DELAY: Duration = Duration::from_millis(1000);

fn numbered_catalog(count: usize) -> Arc<Catalog> {
    let products = (1..=count)
        .map(|i| {
            Product::new(
                i.to_string(),
                format!("Ball {}", i),
                "Match ball",
                "Balls",
                Money::toman(1000),
            )
        })
        .collect();
    Arc::new(Catalog::new(products).unwrap())
}

fn ids(view: &QueryView<'_>) -> Vec<String> {
    view.items.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn test_twenty_items_in_pages_of_eight() {
    let mut query = CatalogQuery::new(
        numbered_catalog(20),
        &StorefrontConfig::default(),
        ManualScheduler::new(),
    );

    let view = query.view();
    assert_eq!(view.items.len(), 8);
    assert_eq!(view.total_count, 20);
    assert!(view.has_more);
    assert!(!view.loading);

    assert!(query.load_more());
    assert!(query.view().loading);
    query.advance(DELAY);
    assert_eq!(query.view().items.len(), 16);
    assert!(query.view().has_more);

    assert!(query.load_more());
    query.advance(DELAY);
    let view = query.view();
    assert_eq!(view.items.len(), 20);
    assert!(!view.has_more);
    let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
    assert_eq!(ids(&view), expected);

    assert!(!query.load_more());
    assert_eq!(query.advance(DELAY), 0);
    assert_eq!(query.view().items.len(), 20);
}

#[test]
fn test_term_change_while_loading_drops_stale_page() {
    let mut query = CatalogQuery::new(
        numbered_catalog(20),
        &StorefrontConfig::default(),
        ManualScheduler::new(),
    );

    query.load_more();
    let stale = query.session().in_flight().unwrap();
    query.advance(Duration::from_millis(400));
    query.set_term("Ball 1");

    // "Ball 1" and "Ball 10" to "Ball 19"
    let view = query.view();
    assert_eq!(view.total_count, 11);
    assert_eq!(view.items.len(), 8);
    assert!(!view.loading);

    assert!(!query.complete(stale));
    assert_eq!(query.advance(DELAY), 0);
    assert_eq!(query.view().items.len(), 8);
    assert_eq!(query.view().page, 1);
}

#[test]
fn test_empty_catalog() {
    let mut query = CatalogQuery::new(
        numbered_catalog(0),
        &StorefrontConfig::default(),
        ManualScheduler::new(),
    );
    let view = query.view();
    assert!(view.items.is_empty());
    assert!(!view.has_more);
    assert_eq!(view.status(), ListStatus::Empty);
    assert!(!query.load_more());
}

#[test]
fn test_persian_search_on_seed_catalog() {
    let store = Storefront::seeded(StorefrontConfig::default()).unwrap();
    let mut query = store.open_query(ManualScheduler::new());

    query.set_term("توپ فوتبال");
    let view = query.view();
    let found: Vec<&str> = view.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(found, vec!["2", "9"]);
    assert!(!view.has_more);
    assert_eq!(
        view.summary(),
        ResultSummary::Matches {
            term: "توپ فوتبال".to_string(),
            total: 2
        }
    );

    query.set_term("   ");
    assert_eq!(query.view().total_count, 20);
    assert_eq!(query.view().summary(), ResultSummary::All { total: 20 });
}

#[test]
fn test_custom_delay_and_page_size() {
    let config = StorefrontConfig::default()
        .with_page_size(6)
        .with_load_delay(Duration::from_millis(250));
    let mut query = CatalogQuery::new(numbered_catalog(20), &config, ManualScheduler::new());

    assert_eq!(query.view().items.len(), 6);
    query.load_more();
    assert_eq!(query.advance(Duration::from_millis(249)), 0);
    assert_eq!(query.advance(Duration::from_millis(1)), 1);
    assert_eq!(query.view().items.len(), 12);
    assert_eq!(query.view().pagination().total_pages, 4);
}

#[tokio::test(start_paused = true)]
async fn test_timer_scheduler_end_to_end() {
    let store = Storefront::seeded(StorefrontConfig::default()).unwrap();
    let mut query = store.open_query(TimerScheduler::new());

    while query.load_more() {
        assert!(query.settle().await);
    }
    let view = query.view();
    assert_eq!(view.items.len(), 20);
    assert_eq!(view.status(), ListStatus::Exhausted);
}
