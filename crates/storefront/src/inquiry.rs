//! Contact form state and inquiry sinks.

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use klimatpro_core::DomainError;
pub use klimatpro_core::Inquiry;

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("inquiry is incomplete: {0}")]
    Incomplete(#[from] DomainError),
    #[error("inquiry was rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Destination for submitted contact inquiries.
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), InquiryError>;
}

/// Records the inquiry as a log event and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogInquirySink;

#[async_trait]
impl InquirySink for LogInquirySink {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), InquiryError> {
        tracing::info!(
            name = inquiry.name(),
            phone = inquiry.phone(),
            message = inquiry.message(),
            "contact inquiry submitted"
        );
        Ok(())
    }
}

/// In-memory sink for tests/dev. Optionally rejects everything.
#[derive(Debug, Default)]
pub struct InMemoryInquirySink {
    inner: Mutex<Vec<Inquiry>>,
    reject_with: Option<String>,
}

impl InMemoryInquirySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that refuses every submission with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            reject_with: Some(reason.into()),
        }
    }

    pub fn all(&self) -> Vec<Inquiry> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl InquirySink for InMemoryInquirySink {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), InquiryError> {
        if let Some(reason) = &self.reject_with {
            return Err(InquiryError::Rejected(reason.clone()));
        }
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(inquiry.clone());
        Ok(())
    }
}

/// POSTs the inquiry as JSON to the API's inquiry endpoint.
#[derive(Debug, Clone)]
pub struct HttpInquirySink {
    client: reqwest::Client,
    url: String,
}

impl HttpInquirySink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl InquirySink for HttpInquirySink {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), InquiryError> {
        let resp = self
            .client
            .post(&self.url)
            .json(inquiry)
            .send()
            .await
            .map_err(|e| InquiryError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InquiryError::Rejected(format!("{}: {}", status.as_u16(), body)));
        }
        Ok(())
    }
}

/// Contact form fields, edited keystroke by keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    phone: String,
    message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Hand the current fields to `sink`, then clear them.
    ///
    /// An incomplete form is refused before the sink is called and is left
    /// as-is. Once the sink has been called the form is cleared whatever the
    /// sink answered; the sink's answer is returned.
    pub async fn submit(&mut self, sink: &dyn InquirySink) -> Result<(), InquiryError> {
        let inquiry = Inquiry::new(self.name.clone(), self.phone.clone(), self.message.clone())?;
        let outcome = sink.submit(&inquiry).await;
        self.clear();
        outcome
    }
}
