//! Landing page shell
//!
//! Holds the tab navigation and the contact form side by side. The two share
//! nothing: a pending submit never blocks tab hover or click handling.

use std::sync::Arc;

use falcon_contact::{ContactForm, EmailJsRelay, EmailRelay};
use falcon_tabs::TabIndicator;

use crate::config::Config;
use crate::setup::{DocumentHost, PageSetup};
use crate::Result;

pub struct LandingPage<R> {
    config: Config,
    setup: PageSetup,
    tabs: TabIndicator,
    contact: ContactForm<R>,
}

impl LandingPage<EmailJsRelay> {
    /// Build the page against the configured EmailJS endpoint.
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let relay = EmailJsRelay::new(config.relay.endpoint_url()?);
        Self::new(config, relay)
    }
}

impl<R: EmailRelay> LandingPage<R> {
    pub fn new(config: Config, relay: R) -> Result<Self> {
        Self::with_shared_relay(config, Arc::new(relay))
    }

    pub fn with_shared_relay(config: Config, relay: Arc<R>) -> Result<Self> {
        config.validate()?;

        let tabs = TabIndicator::new(config.tab_labels.iter().cloned())?;
        let contact = ContactForm::with_shared_relay(relay, config.form_settings());
        let setup = PageSetup::new(&config);

        tracing::info!(
            tabs = tabs.len(),
            destination = %config.destination_email,
            "Landing page created"
        );

        Ok(Self {
            config,
            setup,
            tabs,
            contact,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// First mount: run the one-time document setup.
    pub fn initialize(&self, host: &mut impl DocumentHost) -> bool {
        self.setup.run(host)
    }

    pub fn tabs(&self) -> &TabIndicator {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabIndicator {
        &mut self.tabs
    }

    /// Handle to the contact form. Clones share the form's state.
    pub fn contact(&self) -> &ContactForm<R> {
        &self.contact
    }
}
