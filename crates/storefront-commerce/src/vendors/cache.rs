//! Vendor matcher and its memo.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, VendorTable};
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;

use super::collate::NameCollator;
use super::matching::{find_matching_vendors, VendorMatch};

/// A vendor table bound to the collator its results are sorted with.
#[derive(Debug)]
pub struct VendorMatcher {
    vendors: VendorTable,
    collator: NameCollator,
}

impl VendorMatcher {
    pub fn new(vendors: VendorTable, config: &StorefrontConfig) -> Result<Self, CommerceError> {
        let collator = NameCollator::new(&config.collation_locale)?;
        Ok(Self::with_collator(vendors, collator))
    }

    pub fn with_collator(vendors: VendorTable, collator: NameCollator) -> Self {
        Self { vendors, collator }
    }

    /// Vendors stocking every product in `cart_ids`.
    pub fn match_cart(&self, catalog: &Catalog, cart_ids: &BTreeSet<ProductId>) -> Vec<VendorMatch> {
        find_matching_vendors(catalog, cart_ids, self.vendors.vendors(), &self.collator)
    }

    pub fn vendors(&self) -> &VendorTable {
        &self.vendors
    }

    pub fn collator(&self) -> &NameCollator {
        &self.collator
    }
}

/// Remembers the last match so an unchanged cart is not recomputed.
#[derive(Debug, Clone, Default)]
pub struct VendorMatchCache {
    key: Option<BTreeSet<ProductId>>,
    matches: Vec<VendorMatch>,
    computations: u64,
}

impl VendorMatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches for `cart_ids`, recomputed only when the id set changed.
    pub fn get_or_compute(
        &mut self,
        matcher: &VendorMatcher,
        catalog: &Catalog,
        cart_ids: &BTreeSet<ProductId>,
    ) -> &[VendorMatch] {
        if self.key.as_ref() != Some(cart_ids) {
            self.matches = matcher.match_cart(catalog, cart_ids);
            self.key = Some(cart_ids.clone());
            self.computations += 1;
        }
        &self.matches
    }

    /// Forget the memo, e.g. after the vendor table changed.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.matches.clear();
    }

    /// How many times matches were actually computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
