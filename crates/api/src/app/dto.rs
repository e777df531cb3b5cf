use serde::{Deserialize, Serialize};

use klimatpro_catalog::Product;
use klimatpro_core::{DomainResult, Inquiry, InquiryId};

// -------------------------
// Request DTOs
// -------------------------

/// Contact form submission. Missing fields decode as empty and are then
/// rejected by [`CreateInquiryRequest::into_inquiry`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInquiryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl CreateInquiryRequest {
    pub fn into_inquiry(self) -> DomainResult<Inquiry> {
        Inquiry::new(self.name, self.phone, self.message)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductListResponse<'a> {
    pub products: Vec<&'a Product>,
    pub total: usize,
    pub sources: Vec<String>,
}

impl<'a> ProductListResponse<'a> {
    pub fn new(products: Vec<&'a Product>, sources: Vec<String>) -> Self {
        Self {
            total: products.len(),
            products,
            sources,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InquiryAccepted {
    pub id: InquiryId,
}
