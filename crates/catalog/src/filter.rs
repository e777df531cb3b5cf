//! Filter selection and visible-set derivation.
//!
//! The visible set is a pure function of `(products, selection)`: a stable,
//! single-pass filter that keeps the input order. There is no incremental
//! update; callers rescan on every change, which is fine for catalog sizes in
//! the tens to low hundreds.

use std::collections::BTreeSet;

use serde::Serialize;

use klimatpro_core::{DomainError, DomainResult, ValueObject};

use crate::product::Product;

/// Upper end of the price slider, roubles.
pub const DEFAULT_PRICE_MAX: u64 = 100_000;

/// Inclusive price bound `[low, high]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    low: u64,
    high: u64,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    /// Bound as produced by the price slider: `0 <= low <= high <= max`.
    pub fn new(low: u64, high: u64, max: u64) -> DomainResult<Self> {
        if low > high {
            return Err(DomainError::validation(format!(
                "price range is inverted ({low} > {high})"
            )));
        }
        if high > max {
            return Err(DomainError::validation(format!(
                "price range upper bound {high} exceeds maximum {max}"
            )));
        }
        Ok(Self { low, high })
    }

    /// The unrestricted bound `[0, max]`.
    pub fn full(max: u64) -> Self {
        Self { low: 0, high: max }
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn contains(&self, price: u64) -> bool {
        self.low <= price && price <= self.high
    }
}

/// The user's current filter intent.
///
/// Empty brand/type sets mean "no restriction", not "exclude everything".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    price_max: u64,
    price: PriceRange,
    brands: BTreeSet<String>,
    types: BTreeSet<String>,
}

impl ValueObject for FilterSelection {}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::unrestricted(DEFAULT_PRICE_MAX)
    }
}

impl FilterSelection {
    /// `([0, price_max], {}, {})`.
    pub fn unrestricted(price_max: u64) -> Self {
        Self {
            price_max,
            price: PriceRange::full(price_max),
            brands: BTreeSet::new(),
            types: BTreeSet::new(),
        }
    }

    pub fn price_max(&self) -> u64 {
        self.price_max
    }

    pub fn price_range(&self) -> PriceRange {
        self.price
    }

    pub fn brands(&self) -> &BTreeSet<String> {
        &self.brands
    }

    pub fn types(&self) -> &BTreeSet<String> {
        &self.types
    }

    /// Build a [`PriceRange`] checked against this selection's maximum.
    pub fn price_range_for(&self, low: u64, high: u64) -> DomainResult<PriceRange> {
        PriceRange::new(low, high, self.price_max)
    }

    /// Replace the price bound atomically.
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.price = range;
    }

    /// Add `brand` if absent, remove it if present.
    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.brands, brand);
    }

    /// Add `kind` if absent, remove it if present.
    pub fn toggle_type(&mut self, kind: &str) {
        toggle(&mut self.types, kind);
    }

    pub fn is_brand_selected(&self, brand: &str) -> bool {
        self.brands.contains(brand)
    }

    pub fn is_type_selected(&self, kind: &str) -> bool {
        self.types.contains(kind)
    }

    /// Back to `([0, price_max], {}, {})`.
    pub fn reset(&mut self) {
        *self = Self::unrestricted(self.price_max);
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::unrestricted(self.price_max)
    }

    /// All three predicates, ANDed.
    pub fn matches(&self, product: &Product) -> bool {
        self.price.contains(product.price)
            && (self.brands.is_empty() || self.brands.contains(&product.brand))
            && (self.types.is_empty() || self.types.contains(&product.kind))
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Products satisfying `selection`, in input order.
pub fn visible<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    products.iter().filter(|p| selection.matches(p)).collect()
}
