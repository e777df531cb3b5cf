//! `klimatpro-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, the
//! storefront session and the HTTP API (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod inquiry;
pub mod value_object;

pub use entity::{Entity, first_duplicate_id};
pub use error::{DomainError, DomainResult};
pub use id::InquiryId;
pub use inquiry::Inquiry;
pub use value_object::ValueObject;
