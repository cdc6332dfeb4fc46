//! Interest options offered by the form's select

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Strategy,
    Software,
    #[serde(rename = "Niche SaaS")]
    NicheSaas,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Strategy,
        Interest::Software,
        Interest::NicheSaas,
        Interest::Other,
    ];

    /// Display string, also the value sent to the relay.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Strategy => "Strategy",
            Interest::Software => "Software",
            Interest::NicheSaas => "Niche SaaS",
            Interest::Other => "Other",
        }
    }

    /// Parse a select value. The empty string is the unselected placeholder.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, String> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Interest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|interest| interest.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown interest: {}", s))
    }
}
