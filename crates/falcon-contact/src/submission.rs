//! Contact submission
//!
//! [`FormFields`] mirrors the visible inputs. A [`ContactSubmission`] is built
//! from them at the moment of submit and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::interest::Interest;
use crate::relay::TemplatePayload;

/// Raw values of the form inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Select value; empty when the placeholder is still selected
    pub interest: String,
    pub message: String,
}

impl FormFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.company.is_empty()
            && self.interest.is_empty()
            && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Correlates log lines for one submit
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub interest: Option<Interest>,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from the inputs, trimming every value.
    ///
    /// Enforces the same constraints as the rendered form: name, email and
    /// message are required and the email needs a local part, an `@` and a
    /// domain. `required` only rejects an empty input, so a whitespace-only
    /// name or message passes and is sent trimmed to the empty string.
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        if fields.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        // Email inputs strip surrounding whitespace before checking
        let email = fields.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ValidationError::MalformedEmail(email.to_string()));
        }
        if fields.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        let name = fields.name.trim();
        let company = fields.company.trim();
        let message = fields.message.trim();

        let interest = Interest::parse_optional(&fields.interest)
            .map_err(|_| ValidationError::UnknownInterest(fields.interest.clone()))?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
            name: name.to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            interest,
            message: message.to_string(),
        })
    }

    /// Map onto the relay template, addressed to `destination`.
    pub fn to_payload(&self, destination: &str) -> TemplatePayload {
        TemplatePayload {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            company: self.company.clone().unwrap_or_default(),
            interest: self
                .interest
                .map(|i| i.as_str().to_string())
                .unwrap_or_default(),
            message: self.message.clone(),
            to_email: destination.to_string(),
        }
    }
}

/// `local@domain` with no whitespace; anything stricter is left to the
/// rendered email input.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
