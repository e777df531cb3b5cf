//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A price range `[0, 50000]` is equal to any other
//! `[0, 50000]`, and a filter selection is equal to any other selection with
//! the same bound and the same brand/type sets.

/// Marker trait for value objects.
///
/// Value objects are **compared by value**: two instances with the same
/// attributes are interchangeable. They may still be edited in place through
/// `&mut self` (a filter selection is toggled rather than rebuilt); what they
/// never carry is an identity that survives such edits. Visible-set derivation
/// relies on this, being a pure function of `(products, selection)`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PriceRange {
///     low: u64,
///     high: u64,
/// }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
