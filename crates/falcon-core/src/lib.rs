//! Falcon View Core
//!
//! Composes the landing page's stateful pieces: the tab navigation and the
//! contact form. Static content (hero, service tiles, founder bio, footer)
//! is rendered by the host and holds no state here.

mod config;
mod error;
mod page;
mod setup;

pub use config::{Config, RelayConfig};
pub use error::CoreError;
pub use page::LandingPage;
pub use setup::{DocumentHost, PageSetup, FONT_ELEMENT_ID};

// Re-export page components
pub use falcon_contact::{
    ContactError, ContactForm, ContactSubmission, EmailJsRelay, EmailRelay, FormFields,
    FormSettings, FormView, Interest, RelayCredentials, RelayError, RelayRequest, SubmitOutcome,
    SubmitStatus, TemplatePayload, ValidationError,
};
pub use falcon_tabs::{
    anchor_for_label, AnchorScroller, IndicatorRect, LayoutProbe, MeasuredLayout, ScrollBehavior,
    TabClick, TabError, TabIndicator, TabView, ANCHOR_IDS, TOP_ANCHOR,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
