//! Multi-selection of catalog products.

use std::collections::BTreeSet;

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products picked for a vendor lookup. Selection carries no quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Selection {
    products: BTreeSet<ProductId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a product in or out of the selection.
    ///
    /// Returns true if the product is selected afterwards.
    pub fn toggle(&mut self, product_id: &ProductId) -> bool {
        if self.products.remove(product_id) {
            false
        } else {
            self.products.insert(product_id.clone());
            true
        }
    }

    /// Select a product. Returns false if it was already selected.
    pub fn select(&mut self, product_id: ProductId) -> bool {
        self.products.insert(product_id)
    }

    /// Deselect a product. Returns false if it was not selected.
    pub fn deselect(&mut self, product_id: &ProductId) -> bool {
        self.products.remove(product_id)
    }

    pub fn is_selected(&self, product_id: &ProductId) -> bool {
        self.products.contains(product_id)
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The selected ids, used as the vendor match key.
    pub fn product_ids(&self) -> &BTreeSet<ProductId> {
        &self.products
    }
}

impl FromIterator<ProductId> for Selection {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
