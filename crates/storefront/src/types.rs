//! Wire and view types.

use serde::{Deserialize, Serialize};

use klimatpro_catalog::{Facets, FilterSelection, Product};

/// Body of the product list endpoint, as far as the storefront cares.
///
/// `products` may be missing (or null); that reads as an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListPayload {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

impl ProductListPayload {
    pub fn into_products(self) -> Vec<Product> {
        self.products.unwrap_or_default()
    }
}

/// Snapshot of everything the catalog area displays.
///
/// While `loading` is set, a renderer shows a loading indicator instead of
/// product cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub loading: bool,
    pub selection: FilterSelection,
    pub facets: Facets,
    /// Visible products, in catalog order.
    pub products: Vec<Product>,
    /// Number of visible products ("Найдено товаров").
    pub found: usize,
}
