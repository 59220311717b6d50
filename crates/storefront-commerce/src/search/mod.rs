//! Catalog search: filtering, pagination and the load-more session.

mod filter;
mod query;
mod results;
mod session;
mod view;

pub use filter::{filter, normalize_term};
pub use query::CatalogQuery;
pub use results::{has_more, page, Pagination};
pub use session::{QuerySession, SessionEvent};
pub use view::{ListStatus, QueryView, ResultSummary};
