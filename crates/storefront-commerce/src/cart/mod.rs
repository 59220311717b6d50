//! Shopping cart module.
//!
//! Contains the cart with its lines and the product multi-selection.

mod cart;
mod selection;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
pub use selection::Selection;
