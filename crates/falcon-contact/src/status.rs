//! Submission status
//!
//! ```text
//! Idle ──submit──▶ Sending ──ok──▶ Sent
//!                     │
//!                     └──err──▶ Error
//! Sent / Error ──submit──▶ Sending
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Relay call in flight; the submit control is disabled
    Sending,
    /// Last relay call succeeded
    Sent,
    /// Last relay call failed
    Error,
}

impl SubmitStatus {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: SubmitStatus) -> bool {
        matches!(
            (self, target),
            (SubmitStatus::Idle, SubmitStatus::Sending)
                | (SubmitStatus::Sending, SubmitStatus::Sent)
                | (SubmitStatus::Sending, SubmitStatus::Error)
                | (SubmitStatus::Sent, SubmitStatus::Sending)
                | (SubmitStatus::Error, SubmitStatus::Sending)
        )
    }

    /// The submit control accepts clicks
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, SubmitStatus::Sending)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitStatus::Sending => "Sending…",
            _ => "Send",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "idle",
            SubmitStatus::Sending => "sending",
            SubmitStatus::Sent => "sent",
            SubmitStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubmitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(SubmitStatus::Idle),
            "sending" => Ok(SubmitStatus::Sending),
            "sent" => Ok(SubmitStatus::Sent),
            "error" => Ok(SubmitStatus::Error),
            _ => Err(format!("Unknown submit status: {}", s)),
        }
    }
}
