use serde::{Deserialize, Deserializer, Serialize};

use klimatpro_core::{DomainError, DomainResult, Entity};

/// Product identifier.
///
/// Upstream feeds use either integers (`1`) or strings (`"kp_1"`); both are
/// accepted on the wire and normalised to a string. Serialises as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Unsigned(u64),
            Signed(i64),
            Decimal(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Unsigned(n) => Self::from(n),
            Raw::Signed(n) => Self(n.to_string()),
            // `1.0` names the same record as `1`.
            Raw::Decimal(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                Self((v as i64).to_string())
            }
            Raw::Decimal(v) => Self(v.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// One sellable unit of climate equipment.
///
/// Records are created once per catalog load and never mutated afterwards;
/// a reload replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Rated power, kW.
    pub power: f64,
    /// Installation type ("Настенный", "Канальный", ...). Open set.
    #[serde(rename = "type")]
    pub kind: String,
    /// Price in whole roubles. Any non-negative JSON number is accepted on
    /// the wire; fractions round to the nearest rouble.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: u64,
    pub image: String,
    /// Provenance tag when the record came from a partner feed.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub features: Vec<String>,
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Whole(u64),
        Decimal(f64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Whole(n) => Ok(n),
        Raw::Decimal(v) if v.is_finite() && v >= 0.0 && v < u64::MAX as f64 => Ok(v.round() as u64),
        Raw::Decimal(v) => Err(serde::de::Error::custom(format!(
            "price must be a non-negative number (got {v})"
        ))),
    }
}

impl Product {
    /// Minimal record; remaining attributes default to empty and can be
    /// filled in with the `with_*` methods.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        kind: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: String::new(),
            series: None,
            power: 0.0,
            kind: kind.into(),
            price,
            image: String::new(),
            source: String::new(),
            features: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Per-record invariants. List-level invariants (unique ids) are checked
    /// by [`crate::Catalog::from_products`].
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().is_empty() {
            return Err(DomainError::invalid_id("product id cannot be empty"));
        }
        if !self.power.is_finite() || self.power < 0.0 {
            return Err(DomainError::invariant(format!(
                "product {}: power must be a non-negative number (got {})",
                self.id, self.power
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_accepts_integers_and_strings() {
        let a: ProductId = serde_json::from_value(json!(4)).unwrap();
        let b: ProductId = serde_json::from_value(json!("kp_1")).unwrap();
        assert_eq!(a, ProductId::from(4u64));
        assert_eq!(a.as_str(), "4");
        assert_eq!(b.as_str(), "kp_1");
        assert_eq!(serde_json::to_value(&a).unwrap(), json!("4"));
    }

    #[test]
    fn decodes_a_partner_record() {
        let raw = json!({
            "id": "br_5",
            "name": "Hitachi RAK-18RPD/RAC-18WPD",
            "brand": "Hitachi",
            "category": "Кондиционеры",
            "series": "Performance",
            "power": 5.0,
            "type": "Настенный",
            "price": 67900,
            "source": "breez.ru",
            "image": "https://example.test/h.jpg",
            "features": ["Инвертор", "Мощная система"]
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.id.as_str(), "br_5");
        assert_eq!(product.kind, "Настенный");
        assert_eq!(product.series.as_deref(), Some("Performance"));
        assert_eq!(product.features.len(), 2);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn optional_attributes_default_when_absent() {
        let raw = json!({
            "id": 1,
            "name": "Ballu BSVP-07HN1",
            "brand": "Ballu",
            "category": "Кондиционеры",
            "power": 2.0,
            "type": "Настенный",
            "price": 28900,
            "image": "https://example.test/b.jpg"
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.series, None);
        assert!(product.features.is_empty());
        assert_eq!(product.source, "");
    }

    #[test]
    fn id_accepts_signed_and_integral_decimal_numbers() {
        let id = |v| serde_json::from_value::<ProductId>(v).unwrap();
        assert_eq!(id(json!(-1)).as_str(), "-1");
        assert_eq!(id(json!(1.0)), ProductId::from(1u64));
        assert_eq!(id(json!(2.5)).as_str(), "2.5");
    }

    fn record_with_price(price: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "kp_1", "name": "Fujitsu", "brand": "Fujitsu", "category": "c",
            "power": 2.5, "type": "Настенный", "price": price, "image": ""
        })
    }

    #[test]
    fn decimal_prices_are_accepted() {
        let p: Product = serde_json::from_value(record_with_price(json!(49900.0))).unwrap();
        assert_eq!(p.price, 49_900);

        let p: Product = serde_json::from_value(record_with_price(json!(36899.6))).unwrap();
        assert_eq!(p.price, 36_900);
    }

    #[test]
    fn negative_decimal_price_is_a_decode_error() {
        assert!(serde_json::from_value::<Product>(record_with_price(json!(-0.5))).is_err());
    }

    #[test]
    fn negative_price_is_a_decode_error() {
        let raw = json!({
            "id": 1, "name": "x", "brand": "b", "category": "c",
            "power": 1.0, "type": "t", "price": -5, "image": ""
        });
        assert!(serde_json::from_value::<Product>(raw).is_err());
    }

    #[test]
    fn validate_rejects_negative_power_and_empty_id() {
        let p = Product::new("1", "x", "b", "t", 100).with_power(-1.0);
        assert!(matches!(p.validate(), Err(DomainError::InvariantViolation(_))));

        let p = Product::new("", "x", "b", "t", 100);
        assert!(matches!(p.validate(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn entity_identity_is_the_product_id() {
        let p = Product::new("kp_2", "Lessar", "Lessar", "Настенный", 32900);
        assert_eq!(Entity::id(&p), &ProductId::from("kp_2"));
    }
}
