//! Validated product list and facet derivation.

use std::collections::BTreeSet;

use serde::Serialize;

use klimatpro_core::{DomainError, DomainResult, first_duplicate_id};

use crate::filter::{self, FilterSelection};
use crate::product::Product;

/// Distinct filterable values present in a product list, sorted.
///
/// Depends only on the list, never on the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub brands: Vec<String>,
    pub types: Vec<String>,
}

impl Facets {
    pub fn derive(products: &[Product]) -> Self {
        let brands: BTreeSet<&str> = products.iter().map(|p| p.brand.as_str()).collect();
        let types: BTreeSet<&str> = products.iter().map(|p| p.kind.as_str()).collect();
        Self {
            brands: brands.into_iter().map(str::to_string).collect(),
            types: types.into_iter().map(str::to_string).collect(),
        }
    }
}

/// A product list that upholds the list-level invariants: every record is
/// valid and identifiers are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        for product in &products {
            product.validate()?;
        }
        if let Some(id) = first_duplicate_id(&products) {
            return Err(DomainError::invariant(format!("duplicate product id {id}")));
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn facets(&self) -> Facets {
        Facets::derive(&self.products)
    }

    /// Distinct non-empty provenance tags, in first-seen order.
    pub fn sources(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for p in &self.products {
            if !p.source.is_empty() && !out.contains(&p.source) {
                out.push(p.source.clone());
            }
        }
        out
    }

    pub fn visible(&self, selection: &FilterSelection) -> Vec<&Product> {
        filter::visible(&self.products, selection)
    }
}
