//! Vendors that stock every product in a cart.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::{Catalog, Product, VendorInventory};
use crate::ids::{ProductId, VendorId};

use super::collate::NameCollator;

/// A vendor able to supply the whole cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorMatch {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    /// The cart's products, in catalog order.
    pub products: Vec<Product>,
}

/// Vendors whose inventory covers `cart_ids`, ordered by collated name.
///
/// Ids missing from the catalog are dropped before matching. An empty cart,
/// or one made only of unknown ids, matches no vendor.
pub fn find_matching_vendors(
    catalog: &Catalog,
    cart_ids: &BTreeSet<ProductId>,
    inventories: &[VendorInventory],
    collator: &NameCollator,
) -> Vec<VendorMatch> {
    let known: BTreeSet<ProductId> = cart_ids
        .iter()
        .filter(|id| {
            let found = catalog.contains(id);
            if !found {
                tracing::debug!(product_id = %id, "skipping unknown product in cart");
            }
            found
        })
        .cloned()
        .collect();

    if known.is_empty() {
        return Vec::new();
    }

    let products: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|product| known.contains(&product.id))
        .cloned()
        .collect();

    let mut matches: Vec<VendorMatch> = inventories
        .iter()
        .filter(|vendor| vendor.stocks_all(&known))
        .map(|vendor| VendorMatch {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            products: products.clone(),
        })
        .collect();

    matches.sort_by(|a, b| {
        collator
            .compare(&a.vendor_name, &b.vendor_name)
            .then_with(|| a.vendor_id.cmp(&b.vendor_id))
    });

    tracing::debug!(
        cart_size = known.len(),
        vendors = matches.len(),
        "matched vendors for cart"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::money::Money;

    fn ids(raw: &[&str]) -> BTreeSet<ProductId> {
        raw.iter().map(|s| ProductId::new(*s)).collect()
    }

    fn small_catalog() -> Catalog {
        Catalog::new(
            (1..=4)
                .map(|i| Product::new(i.to_string(), format!("P{}", i), "", "", Money::toman(100)))
                .collect(),
        )
        .unwrap()
    }

    fn names(matches: &[VendorMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.vendor_name.as_str()).collect()
    }

    #[test]
    fn test_superset_vendors_only() {
        let catalog = small_catalog();
        let collator = NameCollator::new("en").unwrap();
        let vendors = vec![
            VendorInventory::new("a", "A", ids(&["1", "2", "3"])),
            VendorInventory::new("b", "B", ids(&["1", "3"])),
            VendorInventory::new("c", "C", ids(&["2", "3", "4"])),
        ];

        let result = find_matching_vendors(&catalog, &ids(&["1", "3"]), &vendors, &collator);
        assert_eq!(names(&result), vec!["A", "B"]);

        let result = find_matching_vendors(&catalog, &ids(&["2"]), &vendors, &collator);
        assert_eq!(names(&result), vec!["A", "C"]);

        let result = find_matching_vendors(&catalog, &ids(&["1", "4"]), &vendors, &collator);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_cart_matches_nothing() {
        let catalog = small_catalog();
        let collator = NameCollator::new("en").unwrap();
        let vendors = vec![VendorInventory::new("a", "A", ids(&["1"]))];
        assert!(find_matching_vendors(&catalog, &BTreeSet::new(), &vendors, &collator).is_empty());
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let catalog = small_catalog();
        let collator = NameCollator::new("en").unwrap();
        let vendors = vec![
            VendorInventory::new("a", "A", ids(&["1"])),
            VendorInventory::new("b", "B", ids(&["2"])),
        ];

        let result = find_matching_vendors(&catalog, &ids(&["1", "99"]), &vendors, &collator);
        assert_eq!(names(&result), vec!["A"]);

        let result = find_matching_vendors(&catalog, &ids(&["99"]), &vendors, &collator);
        assert!(result.is_empty());
    }

    #[test]
    fn test_products_in_catalog_order() {
        let catalog = small_catalog();
        let collator = NameCollator::new("en").unwrap();
        let vendors = vec![VendorInventory::new("a", "A", ids(&["1", "2", "3", "4"]))];

        let result = find_matching_vendors(&catalog, &ids(&["4", "2", "1"]), &vendors, &collator);
        let product_ids: Vec<_> = result[0].products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(product_ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_same_name_ties_break_on_id() {
        let catalog = small_catalog();
        let collator = NameCollator::new("en").unwrap();
        let vendors = vec![
            VendorInventory::new("z", "Same", ids(&["1"])),
            VendorInventory::new("m", "Same", ids(&["1"])),
        ];

        let result = find_matching_vendors(&catalog, &ids(&["1"]), &vendors, &collator);
        let vendor_ids: Vec<_> = result.iter().map(|m| m.vendor_id.as_str()).collect();
        assert_eq!(vendor_ids, vec!["m", "z"]);
    }

    #[test]
    fn test_seed_vendors_sorted_by_persian_name() {
        let catalog = seed::catalog().unwrap();
        let table = seed::vendor_table().unwrap();
        let collator = NameCollator::persian().unwrap();

        let result = find_matching_vendors(&catalog, &ids(&["2", "9"]), table.vendors(), &collator);
        assert_eq!(
            names(&result),
            vec!["آرمان ورزش", "توپ‌سرا", "چابک اسپرت", "ورزش پارس"]
        );
    }

    #[test]
    fn test_inputs_untouched() {
        let catalog = seed::catalog().unwrap();
        let table = seed::vendor_table().unwrap();
        let collator = NameCollator::persian().unwrap();
        let cart = ids(&["2", "9"]);
        let before = table.vendors().to_vec();

        let first = find_matching_vendors(&catalog, &cart, table.vendors(), &collator);
        let second = find_matching_vendors(&catalog, &cart, table.vendors(), &collator);
        assert_eq!(first, second);
        assert_eq!(table.vendors(), &before[..]);
        assert_eq!(cart, ids(&["2", "9"]));
    }
}
