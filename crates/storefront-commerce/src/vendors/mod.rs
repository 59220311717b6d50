//! Vendor matching: which vendors can supply an entire cart.

mod cache;
mod collate;
mod matching;

pub use cache::{VendorMatchCache, VendorMatcher};
pub use collate::NameCollator;
pub use matching::{find_matching_vendors, VendorMatch};
