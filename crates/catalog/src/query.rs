//! Query-string filtering used by the product list endpoint.
//!
//! Looser than [`crate::FilterSelection`]: parameters arrive as raw strings,
//! a brand or type matches one value case-insensitively, and anything that
//! does not parse is ignored rather than rejected.

use serde::Deserialize;

use crate::product::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl ProductQuery {
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let min = parse_price(self.min_price.as_deref());
        let max = parse_price(self.max_price.as_deref());
        let brand = non_empty(self.brand.as_deref()).map(str::to_lowercase);
        let kind = non_empty(self.kind.as_deref()).map(str::to_lowercase);

        products
            .iter()
            .filter(|p| min.is_none_or(|m| p.price as f64 >= m))
            .filter(|p| max.is_none_or(|m| p.price as f64 <= m))
            .filter(|p| brand.as_deref().is_none_or(|b| p.brand.to_lowercase() == b))
            .filter(|p| kind.as_deref().is_none_or(|k| p.kind.to_lowercase() == k))
            .collect()
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    non_empty(raw)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}
