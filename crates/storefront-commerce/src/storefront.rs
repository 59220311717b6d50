//! The storefront: one catalog, one vendor table, one configuration.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::{seed, Catalog, VendorTable};
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::schedule::Scheduler;
use crate::search::CatalogQuery;
use crate::vendors::{VendorMatch, VendorMatcher};

/// Entry point shared by every shell.
#[derive(Debug)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    matcher: VendorMatcher,
    config: StorefrontConfig,
}

impl Storefront {
    /// Assemble a storefront after validating `config`.
    pub fn new(
        catalog: Catalog,
        vendors: VendorTable,
        config: StorefrontConfig,
    ) -> Result<Self, CommerceError> {
        config.validate()?;
        for (vendor, product) in vendors.dangling_references(&catalog) {
            tracing::debug!(vendor_id = %vendor, product_id = %product, "vendor stocks unknown product");
        }
        let matcher = VendorMatcher::new(vendors, &config)?;
        Ok(Self {
            catalog: Arc::new(catalog),
            matcher,
            config,
        })
    }

    /// The built-in sports store.
    pub fn seeded(config: StorefrontConfig) -> Result<Self, CommerceError> {
        Self::new(seed::catalog()?, seed::vendor_table()?, config)
    }

    /// Start a search session on the empty term.
    pub fn open_query<S: Scheduler>(&self, scheduler: S) -> CatalogQuery<S> {
        CatalogQuery::new(Arc::clone(&self.catalog), &self.config, scheduler)
    }

    /// Vendors able to supply every product in `ids`.
    pub fn match_vendors_for_cart<I>(&self, ids: I) -> Vec<VendorMatch>
    where
        I: IntoIterator,
        I::Item: Into<ProductId>,
    {
        let cart: BTreeSet<ProductId> = ids.into_iter().map(Into::into).collect();
        self.matcher.match_cart(&self.catalog, &cart)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matcher(&self) -> &VendorMatcher {
        &self.matcher
    }

    pub fn vendors(&self) -> &VendorTable {
        self.matcher.vendors()
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    #[test]
    fn test_seeded_storefront() {
        let store = Storefront::seeded(StorefrontConfig::default()).unwrap();
        assert_eq!(store.catalog().len(), 20);
        assert_eq!(store.vendors().len(), 6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Storefront::seeded(StorefrontConfig::default().with_page_size(0));
        assert!(matches!(result, Err(CommerceError::InvalidConfig(_))));
    }

    #[test]
    fn test_open_query_uses_page_size() {
        let store = Storefront::seeded(StorefrontConfig::default().with_page_size(5)).unwrap();
        let query = store.open_query(ManualScheduler::new());
        assert_eq!(query.view().items.len(), 5);
    }

    #[test]
    fn test_match_vendors_for_cart() {
        let store = Storefront::seeded(StorefrontConfig::default()).unwrap();
        let matches = store.match_vendors_for_cart(["2", "9"]);
        assert_eq!(matches.len(), 4);
        assert!(store.match_vendors_for_cart(Vec::<ProductId>::new()).is_empty());
    }
}
