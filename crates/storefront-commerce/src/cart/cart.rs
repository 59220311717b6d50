//! Cart and cart line types.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A shopping cart: at most one line per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a catalog product, merging with an existing line.
    ///
    /// Returns the line's new quantity. Fails if:
    /// - the product is not in the catalog
    /// - quantity is zero
    /// - the line would exceed MAX_QUANTITY_PER_ITEM
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        catalog.require(product_id)?;

        if let Some(existing) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(new_quantity);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.lines.push(CartLine {
            product_id: product_id.clone(),
            quantity,
        });
        Ok(quantity)
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero removes the line. Returns whether a line was found.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, CommerceError> {
        if quantity == 0 {
            return Ok(self.remove_item(product_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a product's line.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Clear all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The product-id set used as the vendor match key.
    pub fn product_ids(&self) -> BTreeSet<ProductId> {
        self.lines.iter().map(|l| l.product_id.clone()).collect()
    }

    /// Sum of line prices, in toman.
    ///
    /// Lines whose product has left the catalog contribute nothing.
    pub fn subtotal(&self, catalog: &Catalog) -> Result<Money, CommerceError> {
        let mut total = Money::zero(Currency::Toman);
        for line in &self.lines {
            let Some(product) = catalog.get(&line.product_id) else {
                tracing::debug!(product_id = %line.product_id, "skipping cart line for unknown product");
                continue;
            };
            let line_total = product
                .price
                .try_multiply(i64::from(line.quantity))
                .ok_or(CommerceError::Overflow)?;
            total = total.try_add(&line_total).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }
}

/// One product and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity, always at least one.
    pub quantity: u32,
}
