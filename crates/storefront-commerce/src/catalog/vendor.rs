//! Vendor inventory types.

use std::collections::{BTreeSet, HashSet};

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::{ProductId, VendorId};
use serde::{Deserialize, Serialize};

/// The fixed set of products a vendor stocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VendorInventory {
    /// Unique vendor identifier.
    pub id: VendorId,
    /// Display name, also the sort key for match results.
    pub name: String,
    /// Products this vendor stocks.
    pub products: BTreeSet<ProductId>,
}

impl VendorInventory {
    /// Create an inventory from any list of product ids.
    pub fn new(
        id: impl Into<VendorId>,
        name: impl Into<String>,
        products: impl IntoIterator<Item = ProductId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            products: products.into_iter().collect(),
        }
    }

    /// Check whether the vendor stocks `product_id`.
    pub fn stocks(&self, product_id: &ProductId) -> bool {
        self.products.contains(product_id)
    }

    /// Check whether the vendor stocks every product in `product_ids`.
    ///
    /// Vacuously true for an empty set; callers decide what an empty cart means.
    pub fn stocks_all(&self, product_ids: &BTreeSet<ProductId>) -> bool {
        product_ids.is_subset(&self.products)
    }
}

/// All vendor inventories, in load order.
#[derive(Debug, Clone, Default)]
pub struct VendorTable {
    vendors: Vec<VendorInventory>,
}

impl VendorTable {
    /// Build a table, rejecting duplicate vendor ids.
    pub fn new(vendors: Vec<VendorInventory>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(vendors.len());
        for vendor in &vendors {
            if !seen.insert(vendor.id.clone()) {
                return Err(CommerceError::DuplicateVendor(vendor.id.to_string()));
            }
        }
        Ok(Self { vendors })
    }

    pub fn vendors(&self) -> &[VendorInventory] {
        &self.vendors
    }

    pub fn get(&self, id: &VendorId) -> Option<&VendorInventory> {
        self.vendors.iter().find(|v| &v.id == id)
    }

    /// Inventory entries that reference products missing from `catalog`.
    ///
    /// Such entries can never take part in a match; they are reported so the
    /// shell can log stale data after a catalog update.
    pub fn dangling_references<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a VendorId, &'a ProductId)> + 'a {
        self.vendors.iter().flat_map(move |vendor| {
            vendor
                .products
                .iter()
                .filter(move |id| !catalog.contains(id))
                .map(move |id| (&vendor.id, id))
        })
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn ids(raw: &[&str]) -> BTreeSet<ProductId> {
        raw.iter().map(|s| ProductId::new(*s)).collect()
    }

    #[test]
    fn test_stocks_all() {
        let vendor = VendorInventory::new("a", "A", ids(&["1", "2", "3"]));
        assert!(vendor.stocks_all(&ids(&["1", "2"])));
        assert!(!vendor.stocks_all(&ids(&["1", "4"])));
        assert!(vendor.stocks(&ProductId::new("3")));
    }

    #[test]
    fn test_table_rejects_duplicate_vendor() {
        let result = VendorTable::new(vec![
            VendorInventory::new("a", "A", ids(&["1"])),
            VendorInventory::new("a", "B", ids(&["2"])),
        ]);
        assert!(matches!(result, Err(CommerceError::DuplicateVendor(_))));
    }

    #[test]
    fn test_dangling_references() {
        let catalog = Catalog::new(vec![Product::new("1", "A", "", "", Money::toman(10))]).unwrap();
        let table = VendorTable::new(vec![VendorInventory::new("a", "A", ids(&["1", "9"]))]).unwrap();

        let dangling: Vec<_> = table.dangling_references(&catalog).collect();
        assert_eq!(dangling, vec![(&VendorId::new("a"), &ProductId::new("9"))]);
    }
}
