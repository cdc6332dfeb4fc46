//! Page configuration
//!
//! Read once at startup. Relay identifiers never change afterwards.

use serde::{Deserialize, Serialize};
use url::Url;

use falcon_contact::{FormSettings, RelayCredentials, EMAILJS_ENDPOINT};
use falcon_tabs::DEFAULT_LABELS;

use crate::error::CoreError;
use crate::Result;

const SERVICE_ID: &str = "service_7ss2s0l";
const TEMPLATE_ID: &str = "template_vy2y36q";
const PUBLIC_KEY: &str = "yrE4rcKrf6Wy1PbZ8";
const DESTINATION_EMAIL: &str = "info@falconviewgroup.io";
const PAGE_TITLE: &str = "Falcon View Group — Strategy & Software";
const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700;800&display=swap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Relay send endpoint
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn endpoint_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.endpoint)?)
    }

    pub fn credentials(&self) -> RelayCredentials {
        RelayCredentials {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: SERVICE_ID.to_string(),
            template_id: TEMPLATE_ID.to_string(),
            public_key: PUBLIC_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub relay: RelayConfig,
    /// Where contact messages are delivered
    pub destination_email: String,
    /// Document title set on first mount
    pub page_title: String,
    /// Web font stylesheet injected on first mount
    pub font_stylesheet_url: String,
    /// Navigation tab labels, in display order
    pub tab_labels: Vec<String>,
}

impl Config {
    /// Defaults overlaid with `FALCON_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the `FALCON_*`
    /// keys. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("FALCON_RELAY_ENDPOINT") {
            config.relay.endpoint = v;
        }
        if let Some(v) = get("FALCON_RELAY_SERVICE_ID") {
            config.relay.service_id = v;
        }
        if let Some(v) = get("FALCON_RELAY_TEMPLATE_ID") {
            config.relay.template_id = v;
        }
        if let Some(v) = get("FALCON_RELAY_PUBLIC_KEY") {
            config.relay.public_key = v;
        }
        if let Some(v) = get("FALCON_DESTINATION_EMAIL") {
            config.destination_email = v;
        }

        config
    }

    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("relay.service_id", &self.relay.service_id),
            ("relay.template_id", &self.relay.template_id),
            ("relay.public_key", &self.relay.public_key),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Config(format!("{name} must not be empty")));
            }
        }

        let endpoint = self.relay.endpoint_url()?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(CoreError::Config(format!(
                "relay.endpoint must be http(s), got {}",
                endpoint.scheme()
            )));
        }

        match self.destination_email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(CoreError::Config(format!(
                    "destination_email is not an address: {}",
                    self.destination_email
                )))
            }
        }

        if self.tab_labels.is_empty() {
            return Err(CoreError::Config("tab_labels must not be empty".to_string()));
        }

        Ok(())
    }

    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            credentials: self.relay.credentials(),
            destination_email: self.destination_email.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            destination_email: DESTINATION_EMAIL.to_string(),
            page_title: PAGE_TITLE.to_string(),
            font_stylesheet_url: FONT_STYLESHEET_URL.to_string(),
            tab_labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.relay.service_id, "service_7ss2s0l");
        assert_eq!(config.destination_email, "info@falconviewgroup.io");
        assert_eq!(config.tab_labels, vec!["How we help", "About", "Contact"]);
    }

    #[test]
    fn test_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            ("FALCON_RELAY_SERVICE_ID", "service_staging"),
            ("FALCON_DESTINATION_EMAIL", "ops@example.com"),
            ("FALCON_RELAY_PUBLIC_KEY", "  "),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.relay.service_id, "service_staging");
        assert_eq!(config.destination_email, "ops@example.com");
        // Blank values fall back to the default
        assert_eq!(config.relay.public_key, "yrE4rcKrf6Wy1PbZ8");
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"relay": {"template_id": "template_x"}}"#).unwrap();
        assert_eq!(config.relay.template_id, "template_x");
        assert_eq!(config.relay.service_id, "service_7ss2s0l");
        assert_eq!(config.page_title, "Falcon View Group — Strategy & Software");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.relay.public_key.clear();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let mut config = Config::default();
        config.destination_email = "nobody".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let mut config = Config::default();
        config.relay.endpoint = "ftp://relay.example.com".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let mut config = Config::default();
        config.relay.endpoint = "not a url".to_string();
        assert!(matches!(config.validate(), Err(CoreError::InvalidUrl(_))));

        let mut config = Config::default();
        config.tab_labels.clear();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
