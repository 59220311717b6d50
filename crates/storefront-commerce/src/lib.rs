//! Storefront domain types and engines.
//!
//! This crate holds everything behind the storefront shell:
//!
//! - **Catalog**: Products, ratings, vendor inventories, seed data
//! - **Search**: Free-text filtering and the paginated load-more session
//! - **Cart**: Cart lines and the product selection
//! - **Vendors**: Vendors that stock a whole cart, ordered by collated name
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//! use std::time::Duration;
//!
//! let store = Storefront::seeded(StorefrontConfig::default())?;
//!
//! // Search and page through results
//! let mut query = store.open_query(ManualScheduler::new());
//! query.set_term("توپ");
//! query.load_more();
//! query.advance(Duration::from_secs(1));
//! println!("{}", query.view().summary());
//!
//! // Vendors that can supply the whole cart
//! for vendor in store.match_vendors_for_cart(["2", "9"]) {
//!     println!("{}", vendor.vendor_name);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod schedule;
pub mod search;
pub mod vendors;

mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::storefront::Storefront;
    pub use crate::config::StorefrontConfig;

    // Catalog
    pub use crate::catalog::{Catalog, Product, Rating, StarBreakdown, VendorInventory, VendorTable};

    // Cart
    pub use crate::cart::{Cart, CartLine, Selection};

    // Search
    pub use crate::search::{
        CatalogQuery, ListStatus, Pagination, QuerySession, QueryView, ResultSummary, SessionEvent,
    };

    // Scheduling
    pub use crate::schedule::{LoadTicket, ManualScheduler, Scheduler, TimerScheduler};

    // Vendors
    pub use crate::vendors::{NameCollator, VendorMatch, VendorMatchCache, VendorMatcher};
}
