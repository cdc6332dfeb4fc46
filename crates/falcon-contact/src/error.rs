//! Contact form error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid submission: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

/// Field constraints the form enforces before a submit reaches the relay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Email address is malformed: {0}")]
    MalformedEmail(String),

    #[error("Message is required")]
    MissingMessage,

    #[error("Unknown interest: {0}")]
    UnknownInterest(String),
}

/// Failure reported by the email relay. Only ever logged; users see a
/// single fixed message whatever the variant.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Network error ({kind}): {message}")]
    Network { kind: String, message: String },

    #[error("Relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Relay client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connect"
        } else if err.is_request() {
            "request"
        } else if err.is_builder() {
            return RelayError::Client(err.to_string());
        } else {
            "unknown"
        };

        RelayError::Network {
            kind: kind.to_string(),
            message: err.to_string(),
        }
    }
}
