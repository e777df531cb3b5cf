//! Entities: records whose identity outlives their attributes.

use std::collections::HashSet;

/// Entity marker + minimal interface.
///
/// Two products with equal attributes but different identifiers are
/// different products.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First identifier that appears more than once in `items`, if any.
pub fn first_duplicate_id<E: Entity>(items: &[E]) -> Option<&E::Id> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(|item| item.id()).find(|id| !seen.insert(*id))
}
