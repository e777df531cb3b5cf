//! Catalog domain module.
//!
//! Product records, the validated product list, facet derivation, the
//! storefront filter selection and the query-string filter used by the
//! product API. Pure, deterministic logic only (no IO, no HTTP, no storage).

pub mod catalog;
pub mod filter;
pub mod product;
pub mod query;
pub mod seed;

pub use catalog::{Catalog, Facets};
pub use filter::{DEFAULT_PRICE_MAX, FilterSelection, PriceRange, visible};
pub use product::{Product, ProductId};
pub use query::ProductQuery;
