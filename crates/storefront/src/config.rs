//! Environment-driven storefront configuration.

use klimatpro_catalog::DEFAULT_PRICE_MAX;

use crate::inquiry::{HttpInquirySink, InquirySink, LogInquirySink};
use crate::source::{HttpProductSource, ProductSource, StaticProductSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Product API endpoint. Unset means the embedded showcase list.
    pub products_url: Option<String>,
    /// Inquiry endpoint. Unset means inquiries are only logged.
    pub inquiry_url: Option<String>,
    /// Upper end of the price slider.
    pub price_max: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            products_url: None,
            inquiry_url: None,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Never fails: bad values fall back
    /// to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let products_url = non_empty("KLIMATPRO_PRODUCTS_URL");
        if products_url.is_none() {
            tracing::info!("KLIMATPRO_PRODUCTS_URL not set; using the built-in showcase list");
        }

        let price_max = match non_empty("KLIMATPRO_PRICE_MAX") {
            None => DEFAULT_PRICE_MAX,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(v) if v > 0 => v,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "KLIMATPRO_PRICE_MAX is not a positive integer; using {DEFAULT_PRICE_MAX}"
                    );
                    DEFAULT_PRICE_MAX
                }
            },
        };

        Self {
            products_url,
            inquiry_url: non_empty("KLIMATPRO_INQUIRY_URL"),
            price_max,
        }
    }

    pub fn product_source(&self) -> Box<dyn ProductSource> {
        match &self.products_url {
            Some(url) => Box::new(HttpProductSource::new(url.clone())),
            None => Box::new(StaticProductSource::showcase()),
        }
    }

    pub fn inquiry_sink(&self) -> Box<dyn InquirySink> {
        match &self.inquiry_url {
            Some(url) => Box::new(HttpInquirySink::new(url.clone())),
            None => Box::new(LogInquirySink),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, http::StatusCode, routing::post};
    use klimatpro_core::Inquiry;

    use super::*;

    fn from(pairs: &[(&str, &str)]) -> StorefrontConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(from(&[]), StorefrontConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = from(&[
            ("KLIMATPRO_PRODUCTS_URL", "http://127.0.0.1:8080/products"),
            ("KLIMATPRO_INQUIRY_URL", "http://127.0.0.1:8080/inquiries"),
            ("KLIMATPRO_PRICE_MAX", "250000"),
        ]);
        assert_eq!(cfg.products_url.as_deref(), Some("http://127.0.0.1:8080/products"));
        assert_eq!(cfg.inquiry_url.as_deref(), Some("http://127.0.0.1:8080/inquiries"));
        assert_eq!(cfg.price_max, 250_000);
    }

    #[test]
    fn bad_price_max_falls_back() {
        for raw in ["lots", "-5", "0", "1.5"] {
            assert_eq!(from(&[("KLIMATPRO_PRICE_MAX", raw)]).price_max, DEFAULT_PRICE_MAX);
        }
    }

    #[test]
    fn blank_urls_count_as_unset() {
        let cfg = from(&[("KLIMATPRO_PRODUCTS_URL", "  "), ("KLIMATPRO_INQUIRY_URL", "")]);
        assert_eq!(cfg.products_url, None);
        assert_eq!(cfg.inquiry_url, None);
    }

    #[tokio::test]
    async fn unset_products_url_means_showcase() {
        let products = StorefrontConfig::default().product_source().load().await;
        assert_eq!(products.len(), 6);
    }

    #[tokio::test]
    async fn unset_inquiry_url_only_logs() {
        let inquiry = Inquiry::new("Ann", "+7000", "hi").unwrap();
        assert!(StorefrontConfig::default().inquiry_sink().submit(&inquiry).await.is_ok());
    }

    #[tokio::test]
    async fn inquiry_url_selects_the_http_sink() {
        let received: Arc<Mutex<Vec<serde_json::Value>>> = Arc::default();
        let app = Router::new().route(
            "/inquiries",
            post({
                let received = received.clone();
                move |Json(body): Json<serde_json::Value>| {
                    let received = received.clone();
                    async move {
                        received.lock().unwrap().push(body);
                        StatusCode::CREATED
                    }
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let url = format!("http://{addr}/inquiries");
        let cfg = from(&[("KLIMATPRO_INQUIRY_URL", url.as_str())]);
        let inquiry = Inquiry::new("Ann", "+7000", "hi").unwrap();
        cfg.inquiry_sink().submit(&inquiry).await.unwrap();

        let got = received.lock().unwrap().clone();
        handle.abort();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0]["name"], "Ann");
        assert_eq!(got[0]["phone"], "+7000");
        assert_eq!(got[0]["message"], "hi");
    }
}
