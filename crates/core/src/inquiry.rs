//! Contact inquiry: the one shape both the storefront and the API accept.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A complete contact inquiry: every field non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    name: String,
    phone: String,
    message: String,
}

impl ValueObject for Inquiry {}

impl Inquiry {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> DomainResult<Self> {
        let inquiry = Self {
            name: name.into(),
            phone: phone.into(),
            message: message.into(),
        };
        for (field, value) in [
            ("name", &inquiry.name),
            ("phone", &inquiry.phone),
            ("message", &inquiry.message),
        ] {
            if value.is_empty() {
                return Err(DomainError::validation(format!("{field} is required")));
            }
        }
        Ok(inquiry)
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

    /// `(name, phone, message)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.name, self.phone, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_every_field() {
        assert!(Inquiry::new("Ann", "+7000", "hi").is_ok());
        for (n, p, m, missing) in [
            ("", "+7000", "hi", "name"),
            ("Ann", "", "hi", "phone"),
            ("Ann", "+7000", "", "message"),
        ] {
            let err = Inquiry::new(n, p, m).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains(missing), "{err}");
        }
    }

    #[test]
    fn parts_come_back_in_field_order() {
        let inquiry = Inquiry::new("Ann", "+7000", "hi").unwrap();
        assert_eq!(
            inquiry.into_parts(),
            ("Ann".to_string(), "+7000".to_string(), "hi".to_string())
        );
    }
}
