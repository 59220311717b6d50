//! Product catalog module.
//!
//! Contains products, the catalog index, vendor inventories and the static
//! storefront data.

mod catalog;
mod product;
pub mod seed;
mod vendor;

pub use catalog::Catalog;
pub use product::{Product, Rating, StarBreakdown, MAX_RATING};
pub use vendor::{VendorInventory, VendorTable};
