//! Falcon View Contact Form
//!
//! Drives one contact form through its submission lifecycle:
//! ```text
//! Idle -> Sending -> Sent
//!              \---> Error
//! Sent | Error -> Sending (next submit)
//! ```
//! The message itself is delivered by an external email relay; this crate
//! only builds the template payload, makes exactly one relay call per
//! submit and reflects the outcome.

mod error;
mod form;
mod interest;
mod relay;
mod status;
mod submission;

pub use error::{ContactError, RelayError, ValidationError};
pub use form::{ContactForm, FormSettings, FormView, SubmitOutcome, SENT_MESSAGE};
pub use interest::Interest;
pub use relay::{
    EmailJsRelay, EmailRelay, RelayCredentials, RelayRequest, TemplatePayload, EMAILJS_ENDPOINT,
};
pub use status::SubmitStatus;
pub use submission::{ContactSubmission, FormFields};

pub type Result<T> = std::result::Result<T, ContactError>;
