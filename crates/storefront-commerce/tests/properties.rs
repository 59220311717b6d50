//! Property tests for filtering, paging and vendor matching.

use std::collections::BTreeSet;

use proptest::prelude::*;
use storefront_commerce::prelude::*;
use storefront_commerce::search::{filter, has_more, page};
use storefront_commerce::vendors::find_matching_vendors;

const WORDS: [&str; 6] = ["ball", "Racket", "توپ", "net", "Glove", "فوتبال"];

fn arb_word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS.to_vec()).prop_map(str::to_string)
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((arb_word(), arb_word(), arb_word()), 0..30).prop_map(|rows| {
        let products = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, description, category))| {
                Product::new(i.to_string(), name, description, category, Money::toman(100))
            })
            .collect();
        Catalog::new(products).expect("generated ids are unique")
    })
}

fn arb_term() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        arb_word(),
        arb_word().prop_map(|w| format!(" {} ", w.to_uppercase())),
    ]
}

proptest! {
    #[test]
    fn prop_filter_is_ordered_subset(catalog in arb_catalog(), term in arb_term()) {
        let result = filter(catalog.products(), &term);
        let positions: Vec<usize> = result
            .iter()
            .map(|p| catalog.position(&p.id).expect("result comes from catalog"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        if term.trim().is_empty() {
            prop_assert_eq!(result.len(), catalog.len());
        }
    }

    #[test]
    fn prop_pages_concatenate_to_list(len in 0usize..60, size in 1usize..12) {
        let list: Vec<usize> = (0..len).collect();
        let pages = len.div_ceil(size) + 1;
        let joined: Vec<usize> = (1..=pages)
            .flat_map(|i| page(&list, size, i).iter().copied())
            .collect();
        prop_assert_eq!(joined, list);
    }

    #[test]
    fn prop_session_matches_filter(catalog in arb_catalog(), term in arb_term(), size in 1usize..10) {
        let expected = filter(catalog.products(), &term);
        let mut session = QuerySession::new(&catalog, size)
            .reduce(SessionEvent::TermChanged(term), &catalog);

        let mut previous = session.items().len();
        while session.has_more() {
            session = session.reduce(SessionEvent::LoadMoreRequested, &catalog);
            let ticket = session.in_flight().expect("load scheduled while has_more");
            let items = session.page_items(&ticket);
            session = session.reduce(SessionEvent::PageLoaded { ticket, items }, &catalog);
            prop_assert!(session.items().len() > previous);
            previous = session.items().len();
        }

        prop_assert_eq!(session.items(), &expected[..]);
        prop_assert_eq!(session.total_count(), expected.len());
        prop_assert!(!has_more(session.items().len(), session.total_count()));
    }

    #[test]
    fn prop_vendor_matches_are_supersets(
        cart in prop::collection::btree_set(0u32..6, 0..4),
        stock in prop::collection::vec(prop::collection::btree_set(0u32..6, 0..6), 0..5),
    ) {
        let catalog = Catalog::new(
            (0u32..6)
                .map(|i| Product::new(i, format!("P{}", i), "", "", Money::toman(10)))
                .collect(),
        )
        .expect("unique ids");
        let vendors: Vec<VendorInventory> = stock
            .into_iter()
            .enumerate()
            .map(|(i, ids)| {
                VendorInventory::new(
                    format!("v{}", i),
                    format!("Vendor {}", i),
                    ids.into_iter().map(ProductId::from),
                )
            })
            .collect();
        let cart: BTreeSet<ProductId> = cart.into_iter().map(ProductId::from).collect();
        let collator = NameCollator::new("en").expect("en collator");

        let result = find_matching_vendors(&catalog, &cart, &vendors, &collator);

        if cart.is_empty() {
            prop_assert!(result.is_empty());
        }
        for vendor in &vendors {
            let listed = result.iter().any(|m| m.vendor_id == vendor.id);
            prop_assert_eq!(listed, !cart.is_empty() && vendor.stocks_all(&cart));
        }
    }
}
