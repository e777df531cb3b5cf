use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use klimatpro_catalog::{Catalog, seed};
use klimatpro_core::{DomainResult, InquiryId};

use crate::app::dto::CreateInquiryRequest;

/// A contact inquiry accepted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryRecord {
    pub id: InquiryId,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Shared state behind every handler.
///
/// The catalog is immutable for the life of the process; inquiries are kept
/// in memory only.
#[derive(Debug)]
pub struct AppServices {
    catalog: Catalog,
    inquiries: Mutex<Vec<InquiryRecord>>,
}

impl AppServices {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            inquiries: Mutex::new(Vec::new()),
        }
    }

    /// Serve the embedded klimatprof.online + breez.ru records.
    pub fn with_partner_feed() -> DomainResult<Self> {
        Ok(Self::new(Catalog::from_products(seed::partner_products())?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn record_inquiry(&self, req: CreateInquiryRequest) -> DomainResult<InquiryRecord> {
        let (name, phone, message) = req.into_inquiry()?.into_parts();

        let record = InquiryRecord {
            id: InquiryId::new(),
            name,
            phone,
            message,
            received_at: Utc::now(),
        };

        tracing::info!(
            inquiry_id = %record.id,
            name = %record.name,
            phone = %record.phone,
            message_len = record.message.chars().count(),
            "inquiry received"
        );

        self.inquiries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
        Ok(record)
    }

    pub fn inquiries(&self) -> Vec<InquiryRecord> {
        self.inquiries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
