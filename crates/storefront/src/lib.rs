//! `klimatpro-storefront`
//!
//! **Responsibility:** the page session behind the storefront.
//!
//! This crate provides:
//! - Product sources (embedded list or one fetch from the product API)
//! - Filter & selection state with a published, always-current catalog view
//! - The contact form and pluggable inquiry sinks
//!
//! Rendering is left to whatever consumes [`CatalogView`].

pub mod config;
pub mod inquiry;
pub mod session;
pub mod source;
pub mod types;

pub use config::StorefrontConfig;
pub use inquiry::{
    ContactForm, HttpInquirySink, InMemoryInquirySink, Inquiry, InquiryError, InquirySink,
    LogInquirySink,
};
pub use session::StorefrontSession;
pub use source::{HttpProductSource, ProductSource, SourceError, StaticProductSource};
pub use types::{CatalogView, ProductListPayload};
